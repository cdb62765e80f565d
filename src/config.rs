//! Runtime configuration of the command line front end.
//!
//! Values come from the environment, optionally loaded from a `.env` file
//! with `dotenv`. Command line flags override them.

use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}', expected text or json")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file (`NETCALC_LOG_CONFIG`).
    pub log_config: PathBuf,
    /// Reject discontiguous masks (`NETCALC_STRICT_MASK`).
    pub strict_mask: bool,
    /// `NETCALC_OUTPUT`
    pub output: OutputFormat,
    /// `.env` file that was loaded, if any.
    pub env_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            strict_mask: false,
            output: OutputFormat::Text,
            env_file: None,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    ///
    /// Runs before logging is set up, so the loaded file is only recorded
    /// in [`Config::env_file`] for the caller to log.
    pub fn from_env() -> Config {
        let env_file = dotenv::dotenv().ok();
        Config {
            env_file,
            ..Config::from_vars(|key| std::env::var(key).ok())
        }
    }

    /// Build from any variable lookup; unknown or malformed values keep the default.
    pub fn from_vars<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup("NETCALC_LOG_CONFIG").filter(|p| !p.trim().is_empty()) {
            config.log_config = PathBuf::from(path);
        }

        if let Some(value) = lookup("NETCALC_STRICT_MASK") {
            match parse_bool(&value) {
                Some(strict) => config.strict_mask = strict,
                None => log::warn!("Ignoring NETCALC_STRICT_MASK={value}, expected true/false"),
            }
        }

        if let Some(value) = lookup("NETCALC_OUTPUT") {
            match value.parse() {
                Ok(output) => config.output = output,
                Err(e) => log::warn!("Ignoring NETCALC_OUTPUT: {e}"),
            }
        }

        config
    }
}
