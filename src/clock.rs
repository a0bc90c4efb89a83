use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, Timelike};
use tracing::{event, Level};

use crate::timespec::{self, CivilDateTime, ParseOutcome};

/// Which shape the final output takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
	EpochNumeric,
	Iso8601Civil
}

/// The instant the next occurrence is computed from, and how to print
/// the result
pub struct Reference {
	pub epoch: i64,
	pub mode: OutputMode
}

/// Local time snapshot, captured once per invocation. Every conversion
/// reuses the snapshot offset, so a wall clock ticking across a DST
/// boundary mid-computation cannot skew the result.
pub struct Clock {
	now: DateTime<FixedOffset>
}

impl Clock {
	pub fn capture() -> Self {
		Clock { now: Local::now().fixed_offset() }
	}

	pub fn offset(&self) -> FixedOffset {
		*self.now.offset()
	}

	/// Resolve the optional reference argument into an epoch instant
	/// plus an output mode
	pub fn resolve(&self, reference: Option<&str>) -> Reference {
		let reference = match reference {
			Some(r) => r,
			// No reference given: the current minute, printed numerically
			None => return Reference { epoch: self.minute_now(), mode: OutputMode::EpochNumeric }
		};
		match timespec::parse(reference) {
			ParseOutcome::NotADateTime => Reference {
				epoch: parse_epoch(reference),
				mode: OutputMode::EpochNumeric
			},
			ParseOutcome::Malformed => {
				event!(Level::WARN, "malformed datetime {:?}, starting from the current minute", reference);
				Reference { epoch: self.minute_now(), mode: OutputMode::Iso8601Civil }
			},
			ParseOutcome::WellFormed(civil) => Reference {
				epoch: self.civil_epoch(civil),
				mode: OutputMode::Iso8601Civil
			}
		}
	}

	// Snapshot time with seconds zeroed
	fn minute_now(&self) -> i64 {
		self.now.timestamp() - i64::from(self.now.second())
	}

	// Epoch seconds of a civil datetime under the snapshot offset. The
	// day and minute ride plain arithmetic from the first of the month
	// and the top of the hour, so out-of-range values normalize forward
	// the way mktime(3) would.
	fn civil_epoch(&self, civil: CivilDateTime) -> i64 {
		let CivilDateTime { year, month, day, hour, minute } = civil;
		let base = NaiveDate::from_ymd_opt(year, month, 1)
			.and_then(|date| date.and_hms_opt(hour, 0, 0))
			.unwrap(); // year/month/hour were range-checked at parse
		let target = base
			+ Duration::days(i64::from(day) - 1)
			+ Duration::minutes(i64::from(minute));
		target.and_utc().timestamp() - i64::from(self.offset().local_minus_utc())
	}
}

// Epoch seconds from free text, read the way atof(3) reads it: leading
// whitespace, then the longest numeric prefix, with trailing text
// ignored. Floats truncate toward zero; no digits reads 0.
fn parse_epoch(s: &str) -> i64 {
	let s = s.trim_start();
	let number = &s[..numeric_prefix_len(s)];
	number.parse::<i64>()
		.unwrap_or_else(|_| number.parse::<f64>().map(|f| f as i64).unwrap_or(0))
}

// Byte length of the leading float syntax: an optional sign, digits
// with an optional fraction, then an optional exponent
fn numeric_prefix_len(s: &str) -> usize {
	let bytes = s.as_bytes();
	let mut pos = 0;
	if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
		pos += 1;
	}
	let mut digits = 0;
	while pos < bytes.len() && bytes[pos].is_ascii_digit() {
		pos += 1;
		digits += 1;
	}
	if pos < bytes.len() && bytes[pos] == b'.' {
		pos += 1;
		while pos < bytes.len() && bytes[pos].is_ascii_digit() {
			pos += 1;
			digits += 1;
		}
	}
	if digits == 0 {
		return 0;
	}
	// An exponent only counts when at least one digit follows it
	if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
		let mut exp = pos + 1;
		if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
			exp += 1;
		}
		let first_digit = exp;
		while exp < bytes.len() && bytes[exp].is_ascii_digit() {
			exp += 1;
		}
		if exp > first_digit {
			pos = exp;
		}
	}
	pos
}
