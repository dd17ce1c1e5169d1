//! Error types shared by the content tables and the server binary.

use thiserror::Error;

/// Errors raised while interpreting static content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// A testimonial date was not in `YYYY-MM` form or named an impossible month
    #[error("invalid year-month `{0}`, expected YYYY-MM")]
    InvalidYearMonth(String),
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("environment variable {key} has invalid value `{value}`")]
    InvalidValue { key: &'static str, value: String },
}

/// Errors that stop the server from starting or serving.
#[cfg(feature = "ssr")]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `[package.metadata.leptos]` could not be loaded
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_error_message() {
        let err = ContentError::InvalidYearMonth("2024/11".to_string());
        assert_eq!(err.to_string(), "invalid year-month `2024/11`, expected YYYY-MM");
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::InvalidValue {
            key: "SITE_COMPRESSION",
            value: "maybe".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "environment variable SITE_COMPRESSION has invalid value `maybe`"
        );
    }
}
