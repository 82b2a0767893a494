use anyhow::{Context, Result};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "MYCLI_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Diagnostics go to standard error and stay
/// silent unless `MYCLI_LOG` (or the config's `log.filter`) asks for more.
/// An unparseable directive falls back to the default filter with a warning.
pub fn init(configured: Option<&str>) -> Result<()> {
    let (filter, rejected) = match build_filter(configured) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_FILTER), Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .try_init()
        .context("installing log subscriber")?;

    if let Some(e) = rejected {
        tracing::warn!("{e:#}; using '{DEFAULT_FILTER}'");
    }
    Ok(())
}

fn build_filter(configured: Option<&str>) -> Result<EnvFilter> {
    let directive = std::env::var(LOG_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string());
    EnvFilter::try_new(&directive).with_context(|| format!("invalid log filter '{directive}'"))
}
