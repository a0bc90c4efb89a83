mod parsing;
pub use parsing::*;

/// A wall-clock date and time with no zone attached. Crontab schedules
/// have no seconds resolution, so none is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDateTime {
	pub year: i32,
	pub month: u32,
	pub day: u32,
	pub hour: u32,
	/// Deliberately unchecked; out-of-range minutes normalize forward
	/// during epoch conversion
	pub minute: i32
}

/// How a reference argument reads as a datetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
	/// No date/time shape at all; the text is epoch seconds
	NotADateTime,
	/// Shaped like a datetime but a field is out of range
	Malformed,
	WellFormed(CivilDateTime)
}
