mod parsing;
mod error;

/// One line from a user crontab: five schedule fields with a synthetic
/// seconds field prepended, plus any trailing disposition text
/// (conventionally the command to run).
#[derive(Debug)]
pub struct CrontabLine {
	schedule: String,
	disposition: Option<String>
}

impl CrontabLine {
	/// The six-field schedule text, original spacing preserved
	pub fn schedule(&self) -> &str {
		&self.schedule
	}

	/// Trailing text after the fifth field, verbatim. Present and empty
	/// when the line ends in a separator space.
	pub fn disposition(&self) -> Option<&str> {
		self.disposition.as_deref()
	}
}
