use std::path::{Path, PathBuf};
use thiserror::Error;

/// Unified error type for add-ticket operations
#[derive(Error, Debug)]
pub enum AddTicketError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error on '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not valid UTF-8", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Branch resolution failed: {0}")]
    Resolution(String),

    #[error("Branch '{branch}' does not match pattern '{pattern}'")]
    NoMatch { branch: String, pattern: String },

    /// Raised when the omit policy swallows a missing ticket. Never shown to the user.
    #[error("no ticket found, commit message left untouched")]
    Silent,
}

/// Convenience type alias for Results in add-ticket
pub type Result<T> = std::result::Result<T, AddTicketError>;

impl AddTicketError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AddTicketError::Config(msg.into())
    }

    /// Create a branch resolution error with context
    pub fn resolution(msg: impl Into<String>) -> Self {
        AddTicketError::Resolution(msg.into())
    }

    /// Create an I/O error tied to the file it happened on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        AddTicketError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True for failures the configured error policy decides about
    pub fn is_policy_handled(&self) -> bool {
        matches!(
            self,
            AddTicketError::Resolution(_) | AddTicketError::NoMatch { .. }
        )
    }

    /// True for the quiet failure that must not reach the terminal
    pub fn is_silent(&self) -> bool {
        matches!(self, AddTicketError::Silent)
    }
}

impl From<git2::Error> for AddTicketError {
    fn from(err: git2::Error) -> Self {
        AddTicketError::Resolution(err.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AddTicketError::config("pattern has no capture group");
        assert_eq!(
            err.to_string(),
            "Configuration error: pattern has no capture group"
        );
    }

    #[test]
    fn test_io_error_names_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AddTicketError::io("/tmp/COMMIT_EDITMSG", io_err);
        let msg = err.to_string();
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("/tmp/COMMIT_EDITMSG"));

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "file not found");
    }

    #[test]
    fn test_encoding_error_names_path() {
        let source = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = AddTicketError::Encoding {
            path: PathBuf::from("msg.txt"),
            source,
        };
        assert_eq!(err.to_string(), "'msg.txt' is not valid UTF-8");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_no_match_display() {
        let err = AddTicketError::NoMatch {
            branch: "feature/no-ticket-here".to_string(),
            pattern: r"\b(ch\d+)\b".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r"Branch 'feature/no-ticket-here' does not match pattern '\b(ch\d+)\b'"
        );
    }

    #[test]
    fn test_policy_handled_variants() {
        assert!(AddTicketError::resolution("not a git repository").is_policy_handled());
        assert!(AddTicketError::NoMatch {
            branch: "main".to_string(),
            pattern: "(x)".to_string(),
        }
        .is_policy_handled());

        assert!(!AddTicketError::config("bad regex").is_policy_handled());
        assert!(!AddTicketError::Silent.is_policy_handled());
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!AddTicketError::io("x", io_err).is_policy_handled());
    }

    #[test]
    fn test_only_silent_is_silent() {
        assert!(AddTicketError::Silent.is_silent());
        assert!(!AddTicketError::resolution("x").is_silent());
        assert!(!AddTicketError::config("x").is_silent());
    }

    #[test]
    fn test_git_error_becomes_resolution() {
        let git_err = git2::Error::from_str("could not find repository");
        let err: AddTicketError = git_err.into();
        assert!(matches!(err, AddTicketError::Resolution(_)));
        assert!(err.to_string().contains("could not find repository"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (AddTicketError::config("x"), "Configuration error"),
            (AddTicketError::resolution("x"), "Branch resolution failed"),
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
