use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "KIRA_CONTENTQC_LOG";

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "kira_contentqc=info"
    } else {
        "kira_contentqc=warn"
    }
}

/// Installs a stderr subscriber. `KIRA_CONTENTQC_LOG` overrides the level
/// picked from `--verbose`. A second call is a no-op.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
