use std::str::FromStr;

use super::error::CrontabParseError;
use super::CrontabLine;

impl FromStr for CrontabLine {
	type Err = CrontabParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		// User crontabs only have 5 schedule fields, so one is prepended
		// to represent seconds
		let mut line = String::with_capacity(s.len() + 2);
		line.push_str("0 ");
		line.push_str(s);

		// Walk six word boundaries. A line that runs out before the
		// fifth user field is unusable; a sixth word marks where the
		// disposition text begins.
		let mut word_start = 0;
		let mut last_word_start = 0;
		let mut more = true;
		for found in 0..6 {
			match next_word_start(&line, word_start) {
				Some(next) => {
					last_word_start = word_start;
					word_start = next;
				},
				None if found < 5 => {
					// A boundary at the end of the line opens no
					// field, so a trailing separator is not counted
					let words = if word_start == line.len() { found - 1 } else { found };
					return Err(CrontabParseError::TooFewFields(words));
				},
				None => more = false
			}
		}

		let disposition = if more {
			// The first space after the fifth field terminates the
			// schedule; everything past that one space is kept verbatim
			let cut = word_end(&line, last_word_start);
			let text = line[cut + 1..].to_string();
			line.truncate(cut);
			Some(text)
		} else {
			None
		};

		Ok(CrontabLine { schedule: line, disposition })
	}
}

// Offset of the first character of the word after the one at `from`,
// or None when the word at `from` runs to the end of the line. A line
// ending in separator spaces yields the line length, an empty trailing
// word.
fn next_word_start(s: &str, from: usize) -> Option<usize> {
	let bytes = s.as_bytes();
	let mut pos = from;
	while pos < bytes.len() && bytes[pos] != b' ' {
		pos += 1;
	}
	if pos == bytes.len() {
		return None;
	}
	while pos < bytes.len() && bytes[pos] == b' ' {
		pos += 1;
	}
	Some(pos)
}

// Offset of the first space at or after `from`, or the line length
fn word_end(s: &str, from: usize) -> usize {
	let bytes = s.as_bytes();
	let mut pos = from;
	while pos < bytes.len() && bytes[pos] != b' ' {
		pos += 1;
	}
	pos
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn finds_word_starts() {
		assert_eq!(next_word_start("0 22 *", 0), Some(2));
		assert_eq!(next_word_start("0 22 *", 2), Some(5));
		assert_eq!(next_word_start("0 22 *", 5), None);
		// Double separators collapse into one boundary
		assert_eq!(next_word_start("0  22", 0), Some(3));
		// A line ending in spaces has an empty trailing word
		assert_eq!(next_word_start("22  ", 0), Some(4));
		assert_eq!(next_word_start("22  ", 4), None);
	}

	#[test]
	fn finds_word_ends() {
		assert_eq!(word_end("mon disable_wifi.sh", 0), 3);
		assert_eq!(word_end("mon disable_wifi.sh", 4), 19);
		assert_eq!(word_end("", 0), 0);
	}

	#[test]
	fn splits_schedule_only_line() {
		let line: CrontabLine = "0 22 * * mon".parse().unwrap();
		assert_eq!(line.schedule(), "0 0 22 * * mon");
		assert_eq!(line.disposition(), None);
	}

	#[test]
	fn splits_schedule_and_disposition() {
		let line: CrontabLine = "0 22 * * mon,tue,wed,thu,fri disable_wifi.sh".parse().unwrap();
		assert_eq!(line.schedule(), "0 0 22 * * mon,tue,wed,thu,fri");
		assert_eq!(line.disposition(), Some("disable_wifi.sh"));
	}

	#[test]
	fn disposition_keeps_embedded_spaces() {
		let line: CrontabLine = "*/5 * * * * echo hello world".parse().unwrap();
		assert_eq!(line.schedule(), "0 */5 * * * *");
		assert_eq!(line.disposition(), Some("echo hello world"));
	}

	#[test]
	fn disposition_keeps_extra_separator_spaces() {
		// Only the first space after the fifth field is consumed
		let line: CrontabLine = "0 22 * * fri  run.sh".parse().unwrap();
		assert_eq!(line.schedule(), "0 0 22 * * fri");
		assert_eq!(line.disposition(), Some(" run.sh"));
	}

	#[test]
	fn trailing_space_is_an_empty_disposition() {
		let line: CrontabLine = "30 4 1 * * ".parse().unwrap();
		assert_eq!(line.schedule(), "0 30 4 1 * *");
		assert_eq!(line.disposition(), Some(""));
	}

	#[test]
	fn rejects_short_lines() {
		let err = "* * *".parse::<CrontabLine>().unwrap_err();
		assert!(matches!(err, CrontabParseError::TooFewFields(3)));
		assert!("".parse::<CrontabLine>().is_err());
		assert!("59 23".parse::<CrontabLine>().is_err());
	}

	#[test]
	fn a_trailing_separator_is_not_a_field() {
		let err = "30 4 ".parse::<CrontabLine>().unwrap_err();
		assert!(matches!(err, CrontabParseError::TooFewFields(2)));
		let err = "".parse::<CrontabLine>().unwrap_err();
		assert!(matches!(err, CrontabParseError::TooFewFields(0)));
	}
}
