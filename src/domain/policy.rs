use crate::error::{AddTicketError, Result};
use std::fmt;

/// What to do when the branch yields no ticket
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Fail the hook with the underlying error
    Abort,
    /// Leave the message alone and exit quietly
    #[default]
    Omit,
    /// Use the given text as the ticket id
    Placeholder(String),
}

impl ErrorPolicy {
    /// Build a policy from the mutually exclusive CLI flags
    ///
    /// Returns `None` when no flag was given so the caller can fall back to
    /// configuration.
    pub fn from_flags(abort: bool, omit: bool, placeholder: Option<String>) -> Option<Self> {
        if abort {
            Some(ErrorPolicy::Abort)
        } else if omit {
            Some(ErrorPolicy::Omit)
        } else {
            placeholder.map(ErrorPolicy::Placeholder)
        }
    }

    /// Apply the policy to a failed ticket lookup
    pub fn handle(&self, err: AddTicketError) -> Result<String> {
        match self {
            ErrorPolicy::Abort => Err(err),
            ErrorPolicy::Omit => Err(AddTicketError::Silent),
            ErrorPolicy::Placeholder(text) => Ok(text.clone()),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Abort => write!(f, "abort"),
            ErrorPolicy::Omit => write!(f, "omit"),
            ErrorPolicy::Placeholder(text) => write!(f, "placeholder '{}'", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_match() -> AddTicketError {
        AddTicketError::NoMatch {
            branch: "feature/no-ticket-here".to_string(),
            pattern: r"\b(ch\d+)\b".to_string(),
        }
    }

    #[test]
    fn test_default_is_omit() {
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::Omit);
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(
            ErrorPolicy::from_flags(true, false, None),
            Some(ErrorPolicy::Abort)
        );
        assert_eq!(
            ErrorPolicy::from_flags(false, true, None),
            Some(ErrorPolicy::Omit)
        );
        assert_eq!(
            ErrorPolicy::from_flags(false, false, Some("No ticket".to_string())),
            Some(ErrorPolicy::Placeholder("No ticket".to_string()))
        );
        assert_eq!(ErrorPolicy::from_flags(false, false, None), None);
    }

    #[test]
    fn test_abort_propagates_error() {
        let err = ErrorPolicy::Abort.handle(no_match()).unwrap_err();
        assert!(matches!(err, AddTicketError::NoMatch { .. }));
    }

    #[test]
    fn test_omit_is_silent() {
        let err = ErrorPolicy::Omit
            .handle(AddTicketError::resolution("not a git repository"))
            .unwrap_err();
        assert!(err.is_silent());
    }

    #[test]
    fn test_placeholder_substitutes() {
        let policy = ErrorPolicy::Placeholder("No ticket".to_string());
        assert_eq!(policy.handle(no_match()).unwrap(), "No ticket");
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorPolicy::Abort.to_string(), "abort");
        assert_eq!(
            ErrorPolicy::Placeholder("TBD".to_string()).to_string(),
            "placeholder 'TBD'"
        );
    }
}
