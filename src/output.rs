use chrono::{DateTime, FixedOffset};

use crate::clock::OutputMode;

/// Render the next occurrence in the reference's own format, with the
/// disposition appended verbatim when one is present
pub fn render(next: DateTime<FixedOffset>, mode: OutputMode, disposition: Option<&str>) -> String {
	let when = match mode {
		OutputMode::EpochNumeric => next.timestamp().to_string(),
		// Seconds are always the literal 00
		OutputMode::Iso8601Civil => next.format("%Y-%m-%dT%H:%M:00").to_string()
	};
	match disposition {
		Some(text) => format!("{} {}", when, text),
		None => when
	}
}
