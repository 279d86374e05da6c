//! Log subscriber setup

use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

const DEFAULT_FILTER: &str = "warn";

/// Filter directives from `VIGIL_LOG`, then `RUST_LOG`, then `warn`.
fn filter_directives() -> String {
    std::env::var("VIGIL_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_FILTER.to_owned())
}

/// Installs the global subscriber. Output goes to stderr so stdout stays
/// machine-readable.
pub fn init(format: LogFormat) -> anyhow::Result<()> {
    let directives = filter_directives();
    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid log filter `{directives}`"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
