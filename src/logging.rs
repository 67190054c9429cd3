use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "doctor_directory=info";

/// Filter built from a `RUST_LOG` value; `doctor_directory=info` when unset,
/// blank, or unparsable.
pub fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|spec| !spec.trim().is_empty())
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Initializes console logging on stderr.
///
/// Stdout is reserved for the run summary line, so every log event goes to
/// stderr. `RUST_LOG` replaces the default `doctor_directory=info` filter.
pub fn init_logging() {
    let filter = env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    // A global subscriber may already be installed (tests, embedders)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
