use std::path::Path;

use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{Layer, registry};
use tracing_subscriber::prelude::*;

use crate::args::Args;

pub mod filter;
pub mod time_format;

pub type GuardedLayer<S> = (Box<dyn Layer<S> + Send + Sync + 'static>, WorkerGuard);

/// Initialize logging destinations: stderr, plus an append-to-file layer
/// when requested. The returned guard must be held for the life of the
/// program so file logs flush on exit.
pub fn init(args: &Args) -> Option<WorkerGuard> {
	let stderr_layer = tracing_subscriber::fmt::layer()
		.with_writer(std::io::stderr)
		.with_timer(time_format::timer())
		.with_line_number(false)
		.with_file(false)
		.with_target(false)
		.with_ansi(false);

	let mut guard = None;
	let file_layer = args.log_file.as_deref().and_then(|path| {
		let (layer, file_guard) = guarded_file_layer(path)?;
		guard = Some(file_guard);
		Some(layer)
	});

	tracing_subscriber::registry()
		.with(filter::filter(args.verbose))
		.with(stderr_layer)
		.with(file_layer)
		.init();

	guard
}

// Create a guarded non-blocking file layer (without rotation)
fn guarded_file_layer<S>(path: &str) -> Option<GuardedLayer<S>>
where S: tracing::Subscriber + for<'a> registry::LookupSpan<'a>
{
	let path = Path::new(path);
	let dir = match path.parent() {
		Some(d) => d,
		None => return None
	};
	let file = match path.file_name() {
		Some(f) => f,
		None => return None
	};

	let file_appender = rolling::never(dir, file);
	let (non_blocking, guard) = non_blocking(file_appender);
	let layer = tracing_subscriber::fmt::layer()
		.with_writer(non_blocking)
		.with_timer(time_format::timer())
		.with_target(false)
		.with_ansi(false)
		.boxed();
	Some((layer, guard))
}
