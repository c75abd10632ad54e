use thiserror::Error;

/// Result type for vsview operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced while browsing the tree.
///
/// `FetchFailed` and `DecodeFailed` are recoverable and end up in the data
/// pane; `DisplaySurfaceFailed` terminates the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("request to {url} failed: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("decode failed: {0}")]
    DecodeFailed(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("display surface failed: {0}")]
    DisplaySurfaceFailed(String),
}

impl Error {
    pub fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        Error::FetchFailed {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message_names_url() {
        let err = Error::fetch("https://host/children/published", "connection refused");
        assert_eq!(
            err.to_string(),
            "request to https://host/children/published failed: connection refused"
        );
    }
}
