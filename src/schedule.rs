mod error;

use std::str::FromStr;

use chrono::{DateTime, FixedOffset};

use error::ScheduleError;

/// A parsed six-field cron schedule. Field matching and next-occurrence
/// computation are delegated wholesale to the cron crate.
pub struct Schedule {
	inner: cron::Schedule
}

impl FromStr for Schedule {
	type Err = ScheduleError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let inner = cron::Schedule::from_str(s).map_err(ScheduleError::Parse)?;
		Ok(Schedule { inner })
	}
}

impl Schedule {
	/// The first occurrence strictly after `epoch`, with schedule fields
	/// matched against wall-clock time under `offset`
	pub fn next_after(&self, epoch: i64, offset: FixedOffset) -> Result<DateTime<FixedOffset>, ScheduleError> {
		let from = DateTime::from_timestamp(epoch, 0)
			.ok_or(ScheduleError::StartOutOfRange(epoch))?
			.with_timezone(&offset);
		self.inner.after(&from).next().ok_or(ScheduleError::NoMoreOccurrences)
	}
}
