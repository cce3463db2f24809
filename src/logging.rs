//! Logging setup for the command-line host.
//!
//! Logs go to stderr so that stdout only carries command results.
//!
//! ## Environment Variables
//!
//! 1. **`INDENT_NAV_LOG`** (highest priority) - crate-specific logging control
//! 2. **`RUST_LOG`** - Standard tracing environment variable
//! 3. **Default** - `warn` globally, `info` for this crate (`debug` with `-v`)

use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATE_TARGET: &str = "indent_nav";

/// Initialize logging.
///
/// Safe to call multiple times -- a second call reports the existing
/// subscriber as an error instead of panicking.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(filter_directives(
        env::var("INDENT_NAV_LOG").ok(),
        env::var("RUST_LOG").ok(),
        verbose,
    ))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init()?;

    Ok(())
}

/// Filter directives, by priority: `INDENT_NAV_LOG` > `RUST_LOG` > defaults
fn filter_directives(
    indent_nav_log: Option<String>,
    rust_log: Option<String>,
    verbose: bool,
) -> String {
    if let Some(level) = indent_nav_log {
        return expand_level(&level);
    }

    if let Some(rust_log) = rust_log {
        return rust_log;
    }

    let level = if verbose { "debug" } else { "info" };
    format!("warn,{CRATE_TARGET}={level}")
}

/// Expand a bare level such as `debug` to `warn,indent_nav=debug`.
///
/// Values with module-specific syntax are used as-is.
fn expand_level(value: &str) -> String {
    if value.contains('=') || value.contains(':') || value.contains(',') {
        return value.to_string();
    }
    format!("warn,{CRATE_TARGET}={value}")
}
