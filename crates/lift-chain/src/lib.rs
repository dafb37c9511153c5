//! # lift-chain
//!
//! Chain-facing primitives for the Liftoff launchpad client.
//!
//! This crate provides:
//! - Ed25519 keypairs and base58 addresses (Solana-compatible)
//! - Lamport-backed SOL amounts
//! - The launchpad transaction model (create / buy)
//! - Deterministic derived-address computation (pool state, vaults)
//! - A simulated launchpad backend ([`ChainClient`]) with a
//!   constant-product bonding curve for development and tests
//!
//! ## Example
//!
//! ```rust,no_run
//! use lift_chain::{Amount, ChainClient, Keypair};
//!
//! # async fn example() -> lift_chain::Result<()> {
//! let payer = Keypair::generate()?;
//! let client = ChainClient::devnet();
//! client.airdrop(payer.address(), Amount::try_sol(10.0)?).await?;
//!
//! let balance = client.balance(payer.address()).await?;
//! println!("Balance: {balance}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod amount;
pub mod client;
pub mod curve;
pub mod derive;
pub mod error;
pub mod keys;
pub mod transaction;

pub use amount::Amount;
pub use client::{ChainClient, LaunchSummary, Network};
pub use curve::{BondingCurve, tokens_to_base_units};
pub use derive::{DerivedAddresses, derive_addresses, derive_token_account};
pub use error::{ChainError, Result};
pub use keys::{Address, Keypair};
pub use transaction::{Transaction, TransactionId, TransactionKind, TransactionStatus};

/// One SOL in base units (lamports).
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Decimals used by launchpad tokens.
pub const TOKEN_DECIMALS: u8 = 6;

/// One launchpad token in base units.
pub const BASE_UNITS_PER_TOKEN: u64 = 1_000_000;

/// Launchpad program identifier used when deriving dependent addresses.
pub const LAUNCHPAD_PROGRAM: &str = "LiFTPadProgram11111111111111111111111111111";
