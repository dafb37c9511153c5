//! Constant-product bonding curve pricing.
//!
//! Each launch opens with virtual reserves so the first buy has a finite
//! price. Buys move along `x * y = k`: SOL paid in raises the quote reserve
//! and the token output is whatever keeps the product constant. All math is
//! in base units over `u128` intermediates.

use crate::{BASE_UNITS_PER_TOKEN, LAMPORTS_PER_SOL};
use serde::{Deserialize, Serialize};

/// Virtual SOL reserve a fresh curve opens with (30 SOL).
pub const INITIAL_VIRTUAL_SOL: u64 = 30 * LAMPORTS_PER_SOL;

/// Virtual token reserve a fresh curve opens with (1,073,000,000 tokens).
pub const INITIAL_VIRTUAL_TOKENS: u64 = 1_073_000_000 * BASE_UNITS_PER_TOKEN;

/// Bonding curve state for one launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondingCurve {
    /// Quote-side reserve in lamports (virtual + paid in).
    pub virtual_sol: u64,
    /// Base-side reserve in token base units.
    pub virtual_tokens: u64,
    /// Token base units sold so far.
    pub sold: u64,
}

impl BondingCurve {
    /// A fresh curve with the launchpad's opening reserves.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            virtual_sol: INITIAL_VIRTUAL_SOL,
            virtual_tokens: INITIAL_VIRTUAL_TOKENS,
            sold: 0,
        }
    }

    /// Token base units a buy of `lamports_in` would currently produce.
    ///
    /// Returns 0 for a zero-lamport buy.
    #[must_use]
    pub fn quote_buy(&self, lamports_in: u64) -> u64 {
        if lamports_in == 0 {
            return 0;
        }
        let k = u128::from(self.virtual_sol) * u128::from(self.virtual_tokens);
        let new_sol = u128::from(self.virtual_sol) + u128::from(lamports_in);
        // Ceiling division keeps the invariant k <= new_sol * new_tokens.
        let new_tokens = k.div_ceil(new_sol);
        u128::from(self.virtual_tokens)
            .saturating_sub(new_tokens)
            .min(u128::from(u64::MAX)) as u64
    }

    /// Apply a buy, moving both reserves along the curve.
    ///
    /// Returns the token base units produced.
    pub fn apply_buy(&mut self, lamports_in: u64) -> u64 {
        let tokens_out = self.quote_buy(lamports_in);
        self.virtual_sol = self.virtual_sol.saturating_add(lamports_in);
        self.virtual_tokens = self.virtual_tokens.saturating_sub(tokens_out);
        self.sold = self.sold.saturating_add(tokens_out);
        tokens_out
    }
}

impl Default for BondingCurve {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a decimal token quantity to base units, saturating on overflow.
///
/// Negative and non-finite inputs clamp to 0; callers validate upstream.
#[must_use]
pub fn tokens_to_base_units(tokens: f64) -> u64 {
    if !tokens.is_finite() || tokens <= 0.0 {
        return 0;
    }
    let base = tokens * BASE_UNITS_PER_TOKEN as f64;
    if base >= u64::MAX as f64 {
        u64::MAX
    } else {
        base.round() as u64
    }
}
