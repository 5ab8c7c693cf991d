use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for graph-preview operations
pub type Result<T> = std::result::Result<T, PreviewError>;

/// Errors raised while configuring or running the preview gateway.
///
/// Failures of the content fetch itself are not represented here; those are
/// [`GraphFailure`](crate::graph::GraphFailure) values that end up in a report.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("{var} environment variable is not set")]
    MissingEnv { var: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Server error: {message}")]
    Server { message: String },
}

impl PreviewError {
    /// Create a new missing environment variable error
    pub fn missing_env<S: Into<String>>(var: S) -> Self {
        Self::MissingEnv { var: var.into() }
    }

    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new server error
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_message() {
        let error = PreviewError::missing_env("OPTIMIZELY_GRAPH_GATEWAY");
        assert_eq!(
            error.to_string(),
            "OPTIMIZELY_GRAPH_GATEWAY environment variable is not set"
        );
    }

    #[test]
    fn test_invalid_config_message() {
        let error = PreviewError::invalid_config("retry.max_attempts must be positive");
        assert!(error.to_string().contains("Invalid configuration"));
    }
}
