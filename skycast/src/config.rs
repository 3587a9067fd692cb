//! Command-line and environment configuration

use std::path::PathBuf;

use clap::Parser;

use crate::api::{DEFAULT_BASE_URL, ProviderConfig, Units};

pub const DEFAULT_CITY: &str = "Jakarta";

/// Terminal weather lookup
#[derive(Parser, Debug, Clone)]
#[command(name = "skycast")]
#[command(about = "Search a city and see its current weather")]
pub struct Args {
    /// City looked up on startup
    #[arg(long, short, default_value = DEFAULT_CITY)]
    pub city: String,

    /// Provider API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Provider base URL
    #[arg(long, env = "SKYCAST_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Unit system for temperatures
    #[arg(long, value_enum, default_value_t = Units::Metric)]
    pub units: Units,

    /// Directory for log files
    #[arg(long, env = "SKYCAST_LOG_DIR", default_value = "logs")]
    pub log_dir: PathBuf,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API key is empty; set --api-key or OPENWEATHER_API_KEY")]
    MissingApiKey,
    #[error("startup city is empty")]
    MissingCity,
    #[error("base URL {0:?} must be an http:// or https:// URL with a host")]
    InvalidBaseUrl(String),
}

/// Validated settings
#[derive(Debug, Clone)]
pub struct Config {
    pub default_city: String,
    pub provider: ProviderConfig,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let api_key = args.api_key.trim();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let default_city = args.city.trim();
        if default_city.is_empty() {
            return Err(ConfigError::MissingCity);
        }

        let base_url = args.base_url.trim();
        let valid = reqwest::Url::parse(base_url).is_ok_and(|url| {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        });
        if !valid {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            default_city: default_city.to_string(),
            provider: ProviderConfig::new(base_url, api_key).with_units(args.units),
            log_dir: args.log_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["skycast", "--api-key", "secret"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).expect("valid args")
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(parse(&[])).expect("valid config");

        assert_eq!(config.default_city, "Jakarta");
        assert_eq!(config.provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.provider.api_key, "secret");
        assert_eq!(config.provider.units, Units::Metric);
        assert_eq!(config.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_args(parse(&[
            "--city",
            " London ",
            "--base-url",
            "http://localhost:8080/",
            "--units",
            "imperial",
        ]))
        .expect("valid config");

        assert_eq!(config.default_city, "London");
        assert_eq!(config.provider.base_url, "http://localhost:8080");
        assert_eq!(config.provider.units, Units::Imperial);
    }

    #[test]
    fn test_rejects_blank_values() {
        let mut args = parse(&[]);
        args.api_key = "  ".into();
        assert_eq!(
            Config::from_args(args).unwrap_err(),
            ConfigError::MissingApiKey
        );

        let mut args = parse(&[]);
        args.city = "".into();
        assert_eq!(
            Config::from_args(args).unwrap_err(),
            ConfigError::MissingCity
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        for url in ["ftp://example.com", "http://", "https://", "example.com", "not a url"] {
            let args = parse(&["--base-url", url]);
            assert!(
                matches!(Config::from_args(args), Err(ConfigError::InvalidBaseUrl(_))),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepts_host_with_port() {
        let config = Config::from_args(parse(&["--base-url", "http://127.0.0.1:9000"]))
            .expect("valid config");
        assert_eq!(config.provider.base_url, "http://127.0.0.1:9000");
    }
}
