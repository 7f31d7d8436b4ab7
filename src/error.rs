//! Error types for lotkeeper
//!
//! One crate-wide enum covers the two domain failures plus the boundary
//! errors of the CLI surface. The domain messages are stable and surfaced
//! to users verbatim, so they live in the `#[error]` attributes and
//! nowhere else.

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, LotKeeperError>;

/// All errors lotkeeper can produce
#[derive(Error, Debug)]
pub enum LotKeeperError {
    /// Every position in the lot is taken
    #[error("No available position.")]
    NoAvailablePosition,

    /// The presented ticket is not currently active: forged, stale, or
    /// issued by another lot. The allocator cannot distinguish these
    #[error("Unrecognized parking ticket.")]
    UnrecognizedTicket,

    /// A lot was configured with an unusable capacity
    #[error("Invalid lot capacity: {value}. Capacity must be a positive integer.")]
    InvalidCapacity {
        /// The rejected value
        value: u32,
    },

    /// A manually entered plate did not look like a plate
    #[error("Invalid plate number: {0}")]
    InvalidPlate(String),

    /// Configuration loading failed
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// An interactive prompt failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Catch-all for one-off failures
    #[error("{0}")]
    Custom(String),
}

impl LotKeeperError {
    /// Create a custom error from any message
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// The message shown to users
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Hints for getting past the error, empty when there are none
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoAvailablePosition => vec![
                "Fetch a parked vehicle to free a position".to_string(),
                "Configure a larger capacity for the lot".to_string(),
            ],
            Self::UnrecognizedTicket => vec![
                "Check that the ticket was issued by this lot".to_string(),
                "A ticket that was already fetched cannot be used again".to_string(),
            ],
            Self::InvalidCapacity { .. } => {
                vec!["Set capacity to a positive integer".to_string()]
            },
            Self::InvalidPlate(_) => {
                vec!["Plates look like two letters and four digits, e.g. AB-1234".to_string()]
            },
            _ => vec![],
        }
    }

    /// Whether retrying can succeed after some other operation changes
    /// the lot's state
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoAvailablePosition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_messages_are_verbatim() {
        assert_eq!(
            LotKeeperError::NoAvailablePosition.user_message(),
            "No available position."
        );
        assert_eq!(
            LotKeeperError::UnrecognizedTicket.user_message(),
            "Unrecognized parking ticket."
        );
    }

    #[test]
    fn test_full_lot_is_recoverable_bad_ticket_is_not() {
        assert!(LotKeeperError::NoAvailablePosition.is_recoverable());
        assert!(!LotKeeperError::UnrecognizedTicket.is_recoverable());
    }

    #[test]
    fn test_suggestions_exist_for_domain_errors() {
        assert!(!LotKeeperError::NoAvailablePosition.suggestions().is_empty());
        assert!(!LotKeeperError::UnrecognizedTicket.suggestions().is_empty());
        assert!(LotKeeperError::custom("boom").suggestions().is_empty());
    }
}
