//! Phase outcomes.

use lift_chain::{Address, Amount, DerivedAddresses};
use serde::{Deserialize, Serialize};

/// Result of a successful Phase 1 (token creation).
///
/// Carries everything the report needs; the workflow never constructs one
/// for a failed creation, so holding a `LaunchOutcome` is itself the
/// success signal that gates Phase 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchOutcome {
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Mint address of the new token.
    pub mint: Address,
    /// Addresses derived from the mint.
    pub addresses: DerivedAddresses,
    /// Hosted metadata URI.
    pub uri: String,
    /// Image reference from the request.
    pub image: String,
    /// The funding account that paid for the launch.
    pub funder: Address,
}

/// Result of Phase 2 (the optional initial buy).
///
/// Never an error: a failed buy is a recoverable, reportable outcome that
/// must not invalidate the already-confirmed creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "result")]
pub enum BuyOutcome {
    /// The buy confirmed.
    Succeeded {
        /// SOL spent (the requested amount; the protocol does not report
        /// the actual fill).
        spent: Amount,
    },
    /// The buy failed.
    Failed {
        /// Collaborator error message, when one was raised. `None` means
        /// the submission completed but did not confirm.
        reason: Option<String>,
    },
}

impl BuyOutcome {
    /// Whether the buy confirmed.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}
