use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::config::SkycastConfig;
use crate::errors::SkycastError;

/// Installs the stderr subscriber used by the skycast binaries.
///
/// `RUST_LOG` wins when set; otherwise `override_level` (a command-line flag)
/// and then `config.log_level` are used as the filter.
pub fn init_tracing(
    config: &SkycastConfig,
    override_level: Option<&str>,
) -> Result<(), SkycastError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_filter(effective_level(config, override_level))?,
    };

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init()
        .map_err(|err| SkycastError::GeneralError(err.to_string()))
}

fn effective_level<'a>(config: &'a SkycastConfig, override_level: Option<&'a str>) -> &'a str {
    override_level
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(config.log_level.as_str())
}

/// A malformed configured filter is reported instead of silently falling back.
fn level_filter(level: &str) -> Result<EnvFilter, SkycastError> {
    EnvFilter::try_new(level)
        .map_err(|err| SkycastError::GeneralError(format!("invalid log filter {level:?}: {err}")))
}
