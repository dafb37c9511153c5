//! Launchpad transaction model.
//!
//! A [`Transaction`] is the unit handed from the builders to the submitter.
//! Only the two operations the launchpad client performs are modeled:
//! registering a new token and buying from its bonding curve.

use crate::amount::Amount;
use crate::keys::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique transaction identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a new random transaction ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The ID as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transaction status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Built but not yet submitted.
    Pending,
    /// Submitted to the network.
    Submitted,
    /// Confirmed on-chain.
    Confirmed,
    /// Rejected or dropped.
    Failed,
}

impl TransactionStatus {
    /// Whether the transaction reached a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Failed)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Submitted => write!(f, "submitted"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// The operation a transaction performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Register a new token and its bonding curve pool.
    CreateToken {
        /// Token name.
        name: String,
        /// Token symbol.
        symbol: String,
        /// Hosted metadata URI.
        uri: String,
    },
    /// Buy tokens from a bonding curve.
    Buy {
        /// SOL spent.
        amount_in: Amount,
        /// Slippage floor in token base units.
        minimum_out: u64,
    },
}

/// A launchpad transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction ID.
    pub id: TransactionId,
    /// The operation performed.
    pub kind: TransactionKind,
    /// Fee payer (and buyer, for buys).
    pub payer: Address,
    /// Token mint the transaction targets.
    pub mint: Address,
    /// Transaction status.
    pub status: TransactionStatus,
    /// Network signature, set on submission.
    pub signature: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Error message, set on failure.
    pub error: Option<String>,
}

impl Transaction {
    /// Build a token creation transaction.
    #[must_use]
    pub fn create_token(
        payer: Address,
        mint: Address,
        name: impl Into<String>,
        symbol: impl Into<String>,
        uri: impl Into<String>,
    ) -> Self {
        Self::new(
            payer,
            mint,
            TransactionKind::CreateToken {
                name: name.into(),
                symbol: symbol.into(),
                uri: uri.into(),
            },
        )
    }

    /// Build a buy transaction.
    #[must_use]
    pub fn buy(payer: Address, mint: Address, amount_in: Amount, minimum_out: u64) -> Self {
        Self::new(
            payer,
            mint,
            TransactionKind::Buy {
                amount_in,
                minimum_out,
            },
        )
    }

    fn new(payer: Address, mint: Address, kind: TransactionKind) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            payer,
            mint,
            status: TransactionStatus::Pending,
            signature: None,
            created_at: Utc::now(),
            error: None,
        }
    }

    /// Mark the transaction as submitted with its network signature.
    pub fn mark_submitted(&mut self, signature: String) {
        self.status = TransactionStatus::Submitted;
        self.signature = Some(signature);
    }

    /// Mark the transaction as confirmed.
    pub fn mark_confirmed(&mut self) {
        self.status = TransactionStatus::Confirmed;
    }

    /// Mark the transaction as failed.
    pub fn mark_failed(&mut self, error: String) {
        self.status = TransactionStatus::Failed;
        self.error = Some(error);
    }
}
