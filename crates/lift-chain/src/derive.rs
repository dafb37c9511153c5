//! Deterministic derived-address computation.
//!
//! The launchpad program owns one pool-state account and two vaults per
//! mint. Their addresses are pure functions of the mint: seed bytes and the
//! program identifier hashed with SHA-256, truncated to a 32-byte address.
//! No network access is involved.

use crate::LAUNCHPAD_PROGRAM;
use crate::keys::Address;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Seed for the pool-state account.
const POOL_STATE_SEED: &[u8] = b"pool_state";
/// Seed for the base (token) vault.
const BASE_VAULT_SEED: &[u8] = b"base_vault";
/// Seed for the quote (SOL) vault.
const QUOTE_VAULT_SEED: &[u8] = b"quote_vault";
/// Seed for a user's associated token account.
const TOKEN_ACCOUNT_SEED: &[u8] = b"token_account";

/// Program-derived addresses that depend on a mint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedAddresses {
    /// Bonding curve pool state account.
    pub pool_state: Address,
    /// Vault holding the unsold token supply.
    pub base_vault: Address,
    /// Vault holding SOL paid into the curve.
    pub quote_vault: Address,
}

impl DerivedAddresses {
    /// Iterate over the addresses with their labels.
    #[must_use]
    pub fn labeled(&self) -> [(&'static str, &Address); 3] {
        [
            ("pool_state", &self.pool_state),
            ("base_vault", &self.base_vault),
            ("quote_vault", &self.quote_vault),
        ]
    }
}

/// Derive the launchpad accounts for a mint.
#[must_use]
pub fn derive_addresses(mint: &Address) -> DerivedAddresses {
    DerivedAddresses {
        pool_state: hash_seeds(&[POOL_STATE_SEED, &mint.to_bytes()]),
        base_vault: hash_seeds(&[BASE_VAULT_SEED, &mint.to_bytes()]),
        quote_vault: hash_seeds(&[QUOTE_VAULT_SEED, &mint.to_bytes()]),
    }
}

/// Derive the token account that holds `owner`'s balance of `mint`.
#[must_use]
pub fn derive_token_account(owner: &Address, mint: &Address) -> Address {
    hash_seeds(&[TOKEN_ACCOUNT_SEED, &owner.to_bytes(), &mint.to_bytes()])
}

#[allow(clippy::expect_used)]
fn hash_seeds(seeds: &[&[u8]]) -> Address {
    let mut hasher = Sha256::new();
    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update(LAUNCHPAD_PROGRAM.as_bytes());
    let digest = hasher.finalize();
    // SHA-256 output is exactly 32 bytes.
    Address::from_bytes(&digest).expect("sha256 digest is 32 bytes")
}
