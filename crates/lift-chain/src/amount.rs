//! SOL amount representation.
//!
//! Amounts are stored as lamports internally so balance arithmetic in the
//! simulated backend never accumulates float error; the decimal SOL view is
//! only used at the reporting boundary.

use crate::LAMPORTS_PER_SOL;
use crate::error::{ChainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of SOL, stored as lamports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount {
    lamports: u64,
}

impl Amount {
    /// Zero SOL.
    pub const ZERO: Self = Self { lamports: 0 };

    /// Create an amount from lamports.
    #[must_use]
    pub const fn from_lamports(lamports: u64) -> Self {
        Self { lamports }
    }

    /// Create an amount from a decimal SOL value.
    ///
    /// # Errors
    ///
    /// Returns error if the value is negative, non-finite, or overflows.
    pub fn try_sol(sol: f64) -> Result<Self> {
        if !sol.is_finite() || sol < 0.0 {
            return Err(ChainError::invalid_amount(format!(
                "amount must be a non-negative number, got {sol}"
            )));
        }
        let lamports = sol * LAMPORTS_PER_SOL as f64;
        if lamports > u64::MAX as f64 {
            return Err(ChainError::invalid_amount(format!("amount too large: {sol}")));
        }
        Ok(Self {
            lamports: lamports.round() as u64,
        })
    }

    /// The amount in lamports.
    #[must_use]
    pub const fn lamports(&self) -> u64 {
        self.lamports
    }

    /// The amount as decimal SOL.
    #[must_use]
    pub fn as_sol(&self) -> f64 {
        self.lamports as f64 / LAMPORTS_PER_SOL as f64
    }

    /// Whether the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.lamports == 0
    }

    /// Saturating addition.
    #[must_use]
    pub const fn saturating_add(&self, other: Self) -> Self {
        Self {
            lamports: self.lamports.saturating_add(other.lamports),
        }
    }

    /// Saturating subtraction.
    #[must_use]
    pub const fn saturating_sub(&self, other: Self) -> Self {
        Self {
            lamports: self.lamports.saturating_sub(other.lamports),
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} SOL", self.as_sol())
    }
}
