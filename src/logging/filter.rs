use tracing::Level;
use tracing_subscriber::filter::Targets;

pub fn filter(verbose: bool) -> Targets {
	Targets::default()
		.with_default(Level::WARN) // Block noise from other crates
		.with_target("cron_next", if verbose { Level::TRACE } else { Level::WARN })
}
