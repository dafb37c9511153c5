//! Error types for chain operations.

use thiserror::Error;

/// Result type alias for chain operations.
pub type Result<T> = std::result::Result<T, ChainError>;

/// Errors that can occur while talking to the launchpad chain backend.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Invalid address format.
    #[error("invalid address: {message}")]
    InvalidAddress {
        /// Description of the address error.
        message: String,
    },

    /// Keypair decoding or generation failed.
    #[error("invalid keypair: {message}")]
    Keypair {
        /// Description of the keypair error.
        message: String,
    },

    /// Transaction was rejected during submission.
    #[error("submission failed: {reason}")]
    Submission {
        /// Reason for the rejection.
        reason: String,
    },

    /// A required signature was missing from the submission.
    #[error("missing signer: {address}")]
    MissingSigner {
        /// Address that was required to sign.
        address: String,
    },

    /// Payer balance is too low for the requested operation.
    #[error("insufficient balance: have {have} lamports, need {need} lamports")]
    InsufficientBalance {
        /// Current balance in lamports.
        have: u64,
        /// Required balance in lamports.
        need: u64,
    },

    /// Buy output fell below the caller's slippage floor.
    #[error("slippage exceeded: would receive {available} base units, floor is {minimum_out}")]
    SlippageExceeded {
        /// Minimum acceptable output in token base units.
        minimum_out: u64,
        /// Output the curve would actually produce.
        available: u64,
    },

    /// No launch exists for the given mint.
    #[error("launch not found for mint {mint}")]
    LaunchNotFound {
        /// Mint address that was queried.
        mint: String,
    },

    /// A launch already exists for the given mint.
    #[error("launch already exists for mint {mint}")]
    LaunchExists {
        /// Mint address that collided.
        mint: String,
    },

    /// No transaction was submitted with the given ID.
    #[error("transaction not found: {id}")]
    TransactionNotFound {
        /// Transaction ID that was queried.
        id: String,
    },

    /// Metadata hosting failed.
    #[error("metadata hosting failed: {message}")]
    Metadata {
        /// Description of the hosting failure.
        message: String,
    },

    /// Invalid amount.
    #[error("invalid amount: {message}")]
    InvalidAmount {
        /// Description of the amount error.
        message: String,
    },

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChainError {
    /// Create an invalid address error.
    #[must_use]
    pub fn invalid_address(message: impl Into<String>) -> Self {
        Self::InvalidAddress {
            message: message.into(),
        }
    }

    /// Create a keypair error.
    #[must_use]
    pub fn keypair(message: impl Into<String>) -> Self {
        Self::Keypair {
            message: message.into(),
        }
    }

    /// Create a submission error.
    #[must_use]
    pub fn submission(reason: impl Into<String>) -> Self {
        Self::Submission {
            reason: reason.into(),
        }
    }

    /// Create a metadata hosting error.
    #[must_use]
    pub fn metadata(message: impl Into<String>) -> Self {
        Self::Metadata {
            message: message.into(),
        }
    }

    /// Create an invalid amount error.
    #[must_use]
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slippage_display_carries_both_quantities() {
        let err = ChainError::SlippageExceeded {
            minimum_out: 1_000,
            available: 800,
        };
        let text = err.to_string();
        assert!(text.contains("800"));
        assert!(text.contains("1000"));
    }

    #[test]
    fn test_insufficient_balance_display() {
        let err = ChainError::InsufficientBalance {
            have: 5,
            need: 10,
        };
        assert!(err.to_string().contains("5"));
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_helper_constructors() {
        assert!(matches!(
            ChainError::keypair("bad"),
            ChainError::Keypair { .. }
        ));
        assert!(matches!(
            ChainError::submission("rejected"),
            ChainError::Submission { .. }
        ));
    }
}
