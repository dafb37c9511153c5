//! Error taxonomy for the launch workflow.
//!
//! Every variant here is fatal to the workflow: it aborts before Phase 2
//! and the caller-facing boundary renders it as a single error line. A
//! failed buy is deliberately *not* an error — it is carried in
//! [`crate::outcome::BuyOutcome`] so the type system keeps the non-fatal
//! path separate from these.

use thiserror::Error;

/// Result type alias for launch operations.
pub type Result<T> = std::result::Result<T, LaunchError>;

/// Fatal launch workflow errors, ordered by the stage that raises them.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Required input is missing or malformed. Raised before any
    /// collaborator call.
    #[error("{message}")]
    Validation {
        /// Description of the invalid input.
        message: String,
    },

    /// No funding identity is configured. Checked before any expensive
    /// network work.
    #[error("no funding identity configured: {message}")]
    Configuration {
        /// What the caller must provide.
        message: String,
    },

    /// A funding identity is configured but cannot be decoded.
    #[error("invalid funding identity: {message}")]
    Identity {
        /// Underlying decode error.
        message: String,
    },

    /// Metadata preparation failed or returned nothing. Aborts before
    /// Phase 1.
    #[error("failed to prepare metadata: {message}")]
    Metadata {
        /// Underlying failure.
        message: String,
    },

    /// Phase 1 failed: the creation transaction errored or did not
    /// confirm. Phase 2 is never attempted.
    #[error("token creation failed: {reason}")]
    Creation {
        /// Underlying failure.
        reason: String,
    },
}

impl LaunchError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an identity error.
    #[must_use]
    pub fn identity(message: impl Into<String>) -> Self {
        Self::Identity {
            message: message.into(),
        }
    }

    /// Create a metadata error.
    #[must_use]
    pub fn metadata(message: impl Into<String>) -> Self {
        Self::Metadata {
            message: message.into(),
        }
    }

    /// Create a creation error.
    #[must_use]
    pub fn creation(reason: impl Into<String>) -> Self {
        Self::Creation {
            reason: reason.into(),
        }
    }
}
