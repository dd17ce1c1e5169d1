//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and output directories are not here: they come from
//! `[package.metadata.leptos]` through `leptos::config::get_configuration`.

use crate::core::error::ConfigError;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directive, e.g. `info` or `marquesa_express=debug`
    pub log_filter: Option<String>,

    /// Whether responses are Brotli/Gzip compressed (`SITE_COMPRESSION`)
    pub compression: bool,

    /// `Cache-Control` max-age for `/pkg` assets in seconds (`SITE_ASSET_MAX_AGE`)
    pub asset_max_age: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: None,
            compression: true,
            asset_max_age: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let compression = match lookup("SITE_COMPRESSION") {
            Some(value) => parse_bool("SITE_COMPRESSION", &value)?,
            None => true,
        };

        let asset_max_age = lookup("SITE_ASSET_MAX_AGE")
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: "SITE_ASSET_MAX_AGE",
                        value,
                    })
            })
            .transpose()?;

        Ok(Self {
            log_filter: lookup("RUST_LOG").filter(|v| !v.trim().is_empty()),
            compression,
            asset_max_age,
        })
    }

    /// Filter directive to hand to `EnvFilter`, defaulting to `info`
    pub fn log_filter_or_default(&self) -> &str {
        self.log_filter.as_deref().unwrap_or("info")
    }

    /// `Cache-Control` header value for static assets, if caching is configured
    pub fn cache_control(&self) -> Option<String> {
        self.asset_max_age
            .map(|secs| format!("public, max-age={secs}"))
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.compression);
        assert!(config.asset_max_age.is_none());
        assert_eq!(config.log_filter_or_default(), "info");
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup_from(&[
            ("RUST_LOG", "marquesa_express=debug"),
            ("SITE_COMPRESSION", "off"),
            ("SITE_ASSET_MAX_AGE", "86400"),
        ]))
        .unwrap();

        assert_eq!(config.log_filter.as_deref(), Some("marquesa_express=debug"));
        assert!(!config.compression);
        assert_eq!(config.asset_max_age, Some(86400));
        assert_eq!(
            config.cache_control().as_deref(),
            Some("public, max-age=86400")
        );
    }

    #[test]
    fn test_blank_log_filter_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("RUST_LOG", "  ")])).unwrap();
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_invalid_compression_flag() {
        let err = Config::from_lookup(lookup_from(&[("SITE_COMPRESSION", "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "SITE_COMPRESSION",
                value: "maybe".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_max_age() {
        let err =
            Config::from_lookup(lookup_from(&[("SITE_ASSET_MAX_AGE", "-5")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "SITE_ASSET_MAX_AGE",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_bool_variants() {
        for truthy in ["1", "true", "YES", " On "] {
            assert!(parse_bool("K", truthy).unwrap(), "{truthy}");
        }
        for falsy in ["0", "false", "No", "off"] {
            assert!(!parse_bool("K", falsy).unwrap(), "{falsy}");
        }
    }
}
