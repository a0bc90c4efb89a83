use std::error::Error;

use tracing::{event, Level};

mod args;
mod clock;
mod crontab;
mod logging;
mod output;
mod schedule;
mod timespec;

fn main() -> Result<(), Box<dyn Error>> {
	// Parse CLI args
	let args = args::args();

	// Initialize logging destinations
	let _guard = logging::init(&args);

	// Sample local time once; every conversion below reuses it
	let clock = clock::Clock::capture();

	// Split the crontab line into schedule fields and disposition
	let line: crontab::CrontabLine = args.line.parse().or_else(|err| {
		eprintln!("Failed to parse {:?}:", &args.line);
		Err(err)
	})?;
	event!(Level::DEBUG, "schedule fields {:?}", line.schedule());

	// Resolve the starting instant and the output format
	let reference = clock.resolve(args.reference.as_deref());
	event!(Level::DEBUG, "starting from {}", reference.epoch);

	// Hand the schedule to the evaluator
	let schedule: schedule::Schedule = line.schedule().parse().or_else(|err| {
		eprintln!("Failed to parse {:?}:", line.schedule());
		Err(err)
	})?;
	let next = schedule.next_after(reference.epoch, clock.offset())?;

	println!("{}", output::render(next, reference.mode, line.disposition()));
	Ok(())
}
