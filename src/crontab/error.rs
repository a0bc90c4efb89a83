use std::error::Error;
use std::fmt::Display;

#[derive(Debug)]
pub enum CrontabParseError {
	TooFewFields(usize)
}

impl Display for CrontabParseError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::TooFewFields(found) => write!(f, "a user crontab line needs 5 schedule fields, found {}", found)
		}
	}
}

impl Error for CrontabParseError {}
