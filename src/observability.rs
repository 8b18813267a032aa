//! This module provides logging and diagnostics hooks for the sort engine.
//!
//! The crate logs through the `log` facade. `enable_verbose_logging` installs
//! an `env_logger` backend once per process for callers that have no logger of
//! their own, and the `log_metric!` macro emits structured key/value lines for
//! per-run statistics.
//!
//! `log_metric!` is compiled out of release builds by `#[cfg(debug_assertions)]`.

use log::LevelFilter;

#[doc(hidden)]
pub use log as __log;
use std::fs::OpenOptions;
use std::sync::Once;

/// Logs a structured key-value metric line at `trace` level, only in debug builds.
///
/// # Example
/// ```
/// use sortvision::log_metric;
/// let comparisons = 10;
/// log_metric!("event"="sort", "algorithm"="quick", "comparisons"=&comparisons);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            $crate::observability::__log::trace!("SORTVISION_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` backend at `Debug` level, once per process.
///
/// With `log_file` set, output is appended to that file instead of stderr.
/// If the file cannot be opened, logging falls back to stderr and a warning is
/// emitted. Calls after the first are no-ops.
pub fn enable_verbose_logging(log_file: Option<&str>) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Debug);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        let mut open_failure = None;
        if let Some(filename) = log_file {
            match OpenOptions::new().append(true).create(true).open(filename) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                }
                Err(e) => open_failure = Some(format!("{}: {}", filename, e)),
            }
        }

        let _ = builder.try_init();
        if let Some(reason) = open_failure {
            log::warn!("Could not open log file {}, logging to stderr", reason);
        }
    });
}
