use std::error::Error;
use std::fmt::Display;

#[derive(Debug)]
pub enum ScheduleError {
	Parse(cron::error::Error),
	StartOutOfRange(i64),
	NoMoreOccurrences
}

impl Display for ScheduleError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Parse(e) => write!(f, "invalid schedule: {}", e),
			Self::StartOutOfRange(epoch) => write!(f, "start time {} is out of range", epoch),
			Self::NoMoreOccurrences => write!(f, "the schedule has no occurrences after the start time")
		}
	}
}

impl Error for ScheduleError {}
