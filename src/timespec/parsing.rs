use super::{CivilDateTime, ParseOutcome};

// Byte positions of the fixed-width datetime fields, keyed by where
// the date/time delimiter falls
struct Layout {
	delimiter: usize,
	year: usize,
	month: usize,
	day: usize,
	hour: usize,
	minute: usize
}

// Compact YYYYMMDD{T| }HHMM and separated YYYY-MM-DD{T| }HH:MM. The
// minute offset is where a `:` may sit; when one does, the minute
// slides right by one. A trailing :SS is ignored in either layout.
const LAYOUTS: [Layout; 2] = [
	Layout { delimiter: 8, year: 0, month: 4, day: 6, hour: 9, minute: 11 },
	Layout { delimiter: 10, year: 0, month: 5, day: 8, hour: 11, minute: 13 }
];

/// Decide whether `s` encodes a civil datetime and extract it.
/// `NotADateTime` tells the caller to fall back to reading `s` as
/// epoch seconds.
pub fn parse(s: &str) -> ParseOutcome {
	try_parse(s).unwrap_or(ParseOutcome::NotADateTime)
}

fn try_parse(s: &str) -> Option<ParseOutcome> {
	// A space anywhere in the string is the delimiter before a T is
	let delim = s.find(' ').or_else(|| s.find('T'))?;
	let layout = LAYOUTS.iter().find(|l| l.delimiter == delim)?;
	// At least HHMM must follow the delimiter
	if s.len() < delim + 5 {
		return None;
	}

	let year = read_number(s, layout.year, 4)?;
	let month = read_number(s, layout.month, 2)?;
	let day = read_number(s, layout.day, 2)?;
	let hour = read_number(s, layout.hour, 2)?;
	let minute_start = if s.as_bytes().get(layout.minute) == Some(&b':') {
		layout.minute + 1
	} else {
		layout.minute
	};
	let minute = read_number(s, minute_start, 2)?;

	let valid = (1900..=2038).contains(&year)
		&& (1..=12).contains(&month)
		&& (1..=31).contains(&day)
		&& (0..=23).contains(&hour);
	if !valid {
		return Some(ParseOutcome::Malformed);
	}
	Some(ParseOutcome::WellFormed(CivilDateTime {
		year,
		month: month as u32,
		day: day as u32,
		hour: hour as u32,
		minute
	}))
}

// Read the window [start, start+len) the way atoi(3) would: leading
// whitespace, an optional sign, then a digit run; no digits reads as
// 0. None only when the window runs past the end of the string.
fn read_number(s: &str, start: usize, len: usize) -> Option<i32> {
	let window = s.as_bytes().get(start..start + len)?;
	let mut bytes = window.iter().copied().peekable();
	while bytes.peek().is_some_and(|b| b.is_ascii_whitespace()) {
		bytes.next();
	}
	let negative = match bytes.peek() {
		Some(&b'-') => {
			bytes.next();
			true
		},
		Some(&b'+') => {
			bytes.next();
			false
		},
		_ => false
	};
	let mut value = 0;
	while let Some(b) = bytes.peek().copied().filter(u8::is_ascii_digit) {
		value = value * 10 + i32::from(b - b'0');
		bytes.next();
	}
	Some(if negative { -value } else { value })
}
