//! `tracing` subscriber setup. Diagnostics go to stderr so stdout carries
//! only the run summary.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Verbosity {
    Quiet,
    Level(u8),
}

impl Verbosity {
    fn default_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Level(0) => "warn",
            Self::Level(1) => "info",
            Self::Level(2) => "debug",
            Self::Level(_) => "trace",
        }
    }
}

/// `RUST_LOG`, when set, takes precedence over the verbosity flags.
pub(super) fn init_logging(verbosity: Verbosity) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(verbosity.default_directive()))
        .context("failed to build log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|error| anyhow::anyhow!(error))
        .context("failed to install log subscriber")
}
