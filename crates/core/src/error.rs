// crates/core/src/error.rs
use thiserror::Error;

/// Errors that can occur while collecting statistics from GitHub.
#[derive(Debug, Error)]
pub enum GithubError {
    /// The mandatory repository metadata call returned a non-success status.
    #[error("API error: {status}")]
    Api { status: u16 },

    /// Network failure, or a response body that could not be decoded.
    #[error("{0}")]
    Transport(String),
}

impl GithubError {
    pub fn api(status: u16) -> Self {
        Self::Api { status }
    }
}

impl From<reqwest::Error> for GithubError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GithubError::api(404);
        assert_eq!(err.to_string(), "API error: 404");
        assert!(matches!(err, GithubError::Api { status: 404 }));

        let err = GithubError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }
}
