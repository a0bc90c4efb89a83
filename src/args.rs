use std::process::exit;
use std::env;

/// Program arguments gathered from CLI args and/or env variables
pub struct Args {
	pub line: String,
	pub reference: Option<String>,
	pub verbose: bool,
	pub log_file: Option<String>
}

const VERBOSE_ENV: &str = "CRON_NEXT_VERBOSE";
const LOG_FILE_ENV: &str = "CRON_NEXT_LOG";

const USAGE: &str = "\
Outputs the epoch time at which a given user crontab line will next
execute, followed by the disposition element of the line, if present.
The expression should be one line from a user crontab, delimited by
double quotes, passed as an argument.  Optionally, a second argument
may supply either the epoch time, or the iso8601 datetime, from which
to start.  If the starting time is in iso8601 then the output is also
in iso8601 format; if the starting time is a malformed iso8601
datetime, such as 9999-99-99T99:99, then current time is assumed, but
the next time is still printed in iso8601 format.  All times are
local, not GMT.

Examples:
   cron_next \"0 22 * * mon,tue,wed,thu,fri disable_wifi.sh\" 1569016800
   This outputs: 1569034800 disable_wifi.sh

   cron_next \"0 22 * * mon,tue,wed,thu,fri disable_wifi.sh\" 2019-02-08T12:11
   This outputs: 2019-02-08T22:00:00 disable_wifi.sh

Environment:
   CRON_NEXT_VERBOSE=1    trace-level diagnostics on stderr
   CRON_NEXT_LOG=<path>   append diagnostics to <path>";

/// Parse program arguments
pub fn args() -> Args {
	let mut args: Vec<String> = env::args().skip(1).collect();

	// A lone option-looking argument asks for help
	if args.len() == 1 && matches!(args[0].bytes().next(), Some(b'-') | Some(b'h')) {
		println!("cron_next v{} ({})", env!("CARGO_PKG_VERSION"), env!("BUILD_DATE"));
		println!("{}", USAGE);
		exit(0);
	}

	let reference = match args.len() {
		1 => None,
		2 => args.pop(),
		_ => {
			eprintln!("A single cron expression is required: one line from a user crontab delimited by double quotes.  Optionally, a second argument may be supplied specifying the epoch time from which to start.");
			eprintln!("For help see the -h option.");
			exit(1);
		}
	};
	// Exactly the crontab line remains
	let line = args.pop().unwrap_or_default();

	Args {
		line,
		reference,
		verbose: matches!(env::var(VERBOSE_ENV).as_deref(), Ok("1") | Ok("true")),
		log_file: env::var(LOG_FILE_ENV).ok()
	}
}
