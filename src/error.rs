//! Error types for repolens

use std::time::Duration;
use thiserror::Error;

/// Result type alias for repolens operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for a single outbound provider call
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The mandatory metadata lookup failed; nothing can be analyzed.
    #[error("Repository not found: {repository} ({source})")]
    RepositoryNotFound {
        repository: String,
        #[source]
        source: ApiError,
    },

    #[error("Invalid repository '{0}'. Expected the form <owner>/<repo>.")]
    InvalidIdentity(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors from outbound HTTP providers (GitHub and the insight provider)
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check GITHUB_TOKEN or the configured API key.")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_api_error_not_found() {
        let err = ApiError::NotFound("repos/octocat/missing".to_string());
        assert!(err.to_string().contains("octocat/missing"));
    }

    #[test]
    fn test_api_error_rate_limit() {
        let err = ApiError::RateLimit(Duration::from_secs(30));
        let msg = err.to_string();
        assert!(msg.contains("Rate limit"));
        assert!(msg.contains("30"));
    }

    #[test]
    fn test_repository_not_found_keeps_source() {
        let err = Error::RepositoryNotFound {
            repository: "octocat/missing".to_string(),
            source: ApiError::NotFound("Not Found".to_string()),
        };
        assert!(err.to_string().contains("octocat/missing"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_repository_not_found_names_the_cause() {
        let err = Error::RepositoryNotFound {
            repository: "octocat/Hello-World".to_string(),
            source: ApiError::Unauthorized,
        };
        assert_eq!(
            err.to_string(),
            "Repository not found: octocat/Hello-World (Authentication failed. Check GITHUB_TOKEN or the configured API key.)"
        );
    }

    #[test]
    fn test_invalid_identity_message() {
        let err = Error::InvalidIdentity("octocat".to_string());
        assert!(err.to_string().contains("<owner>/<repo>"));
    }

    #[test]
    fn test_error_from_api_error() {
        let err: Error = ApiError::Unauthorized.into();
        match err {
            Error::Api(ApiError::Unauthorized) => (),
            _ => panic!("Expected Error::Api(ApiError::Unauthorized)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("invalid: [yaml: content")
            .unwrap_err();
        let config_err: ConfigError = yaml_err.into();
        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
