//! Error types for pfcgen

use thiserror::Error;

/// Result type alias for pfcgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pfcgen
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter error
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// No egress interface was given
    #[error("Egress interface must be specified")]
    MissingInterface,

    /// Interface not found
    #[error("Interface '{0}' not found")]
    InterfaceNotFound(String),

    /// Interface error
    #[error("Interface error: {0}")]
    Interface(String),

    /// Insufficient privileges
    #[error("Insufficient privileges: {0}")]
    InsufficientPrivileges(String),

    /// Packet construction error
    #[error("Packet construction error: {0}")]
    PacketConstruction(String),

    /// A write failed part-way through the send loop
    #[error("Transmission failed after {sent} frame(s): {source}")]
    Transmission {
        sent: u64,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an invalid parameter error
    pub fn invalid_parameter<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        Error::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a packet construction error with a custom message
    pub fn packet_construction<S: Into<String>>(msg: S) -> Self {
        Error::PacketConstruction(msg.into())
    }

    /// Whether the error was caused by bad user input rather than the system
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidParameter { .. } | Error::MissingInterface
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = Error::invalid_parameter("q3", "must be in the range 0-65535");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'q3': must be in the range 0-65535"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_transmission_message() {
        let err = Error::Transmission {
            sent: 2,
            source: std::io::Error::new(std::io::ErrorKind::Other, "link down"),
        };
        assert_eq!(
            err.to_string(),
            "Transmission failed after 2 frame(s): link down"
        );
        assert!(!err.is_validation());
    }
}
