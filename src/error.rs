use thiserror::Error;

/// Unified error type for git-wayback operations
#[derive(Error, Debug)]
pub enum WaybackError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Time parsing error: {0}")]
    Time(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-wayback
pub type Result<T> = std::result::Result<T, WaybackError>;

impl WaybackError {
    /// Create a time parsing error with context
    pub fn time(msg: impl Into<String>) -> Self {
        WaybackError::Time(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        WaybackError::Tag(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        WaybackError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WaybackError::time("bad layout");
        assert_eq!(err.to_string(), "Time parsing error: bad layout");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WaybackError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(WaybackError::tag("test").to_string().contains("Tag"));
        assert!(WaybackError::config("test")
            .to_string()
            .contains("Configuration"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (WaybackError::time("x"), "Time parsing error"),
            (WaybackError::tag("x"), "Tag error"),
            (WaybackError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
