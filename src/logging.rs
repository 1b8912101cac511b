//! Logging setup for the binary
//!
//! Events go to stderr through tracing-subscriber, filtered by `RUST_LOG`.
//! Whatever `RUST_LOG` says about other targets, this crate's own errors are
//! always shown so a fatal error is never swallowed.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Target name of this crate's events
const CRATE_TARGET: &str = "urban_dict";

/// Filter used when `RUST_LOG` is unset or invalid
const DEFAULT_DIRECTIVES: &str = "warn";

/// Builds the filter directives from the user's `RUST_LOG` value
///
/// Adds an `urban_dict=error` floor unless the directives already enable
/// errors for every target or say something about this crate explicitly.
pub fn filter_directives(rust_log: Option<&str>) -> String {
    let user = rust_log
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVES);

    let covered = user.split(',').map(str::trim).any(|directive| {
        if directive == CRATE_TARGET || directive.starts_with(&format!("{}=", CRATE_TARGET)) {
            return true;
        }
        matches!(directive.parse::<LevelFilter>(), Ok(level) if level != LevelFilter::OFF)
    });

    if covered {
        user.to_string()
    } else {
        format!("{},{}=error", user, CRATE_TARGET)
    }
}

/// Sets up logging to stderr
///
/// Lines carry no timestamp, target or level so a fatal error reads as a
/// single plain message.
pub fn init_tracing() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::try_new(filter_directives(rust_log.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .with_level(false),
        )
        .init();
}
