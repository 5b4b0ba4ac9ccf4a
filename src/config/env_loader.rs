use crate::config::model::Config;
use crate::debounce;
use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

const APP_DIR_NAME: &str = "eventmap";

pub const DATA_DIR_VAR: &str = "EVENTMAP_DATA_DIR";
pub const SEARCH_DEBOUNCE_MS_VAR: &str = "EVENTMAP_SEARCH_DEBOUNCE_MS";
pub const LOG_LEVEL_VAR: &str = "EVENTMAP_LOG_LEVEL";

pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(|name| env::var(name).ok())
}

/// Builds the config from `lookup`, which maps a variable name to its value.
pub fn load_config_from(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Config, ConfigError> {
    let data_dir = lookup(DATA_DIR_VAR)
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(default_data_dir);
    let search_debounce = match lookup(SEARCH_DEBOUNCE_MS_VAR) {
        Some(value) => Duration::from_millis(parse_config(
            SEARCH_DEBOUNCE_MS_VAR,
            value,
            "a number of milliseconds",
        )?),
        None => debounce::DEFAULT_DELAY,
    };
    let log_level = match lookup(LOG_LEVEL_VAR) {
        Some(value) => parse_config(
            LOG_LEVEL_VAR,
            value,
            "one of trace, debug, info, warn, error",
        )?,
        None => Level::TRACE,
    };

    Ok(Config {
        data_dir,
        search_debounce,
        log_level,
    })
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn parse_config<T: FromStr>(
    name: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        })
}
