//! Logging init: structured `tracing` output on stderr.
//!
//! stdout carries converted URLs only, so log lines never mix with results.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Default filter with `--verbose`.
const VERBOSE_FILTER: &str = "info,xget_convert=debug,xget=debug";

/// Target used for conversion telemetry events.
pub const TELEMETRY_TARGET: &str = "xget::telemetry";

/// Initialize logging to stderr. `RUST_LOG` takes precedence over `verbose`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: bool) {
	let fallback = if verbose {
		VERBOSE_FILTER
	} else {
		DEFAULT_FILTER
	};
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_ansi(false)
		.with_target(verbose)
		.try_init();
}
