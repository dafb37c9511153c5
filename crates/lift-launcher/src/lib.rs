//! # lift-launcher
//!
//! The Launch-and-Buy Orchestrator: create a token on the launchpad, then
//! optionally buy it with the same funding identity, and report exactly
//! what happened — including the partially-completed case where creation
//! confirmed but the buy did not.
//!
//! Phases run in strict sequence:
//!
//! 1. Validate input and resolve identities (no network work).
//! 2. Prepare metadata and submit the creation transaction. Any failure
//!    here is fatal.
//! 3. If a positive `initial_buy_amount` was requested, buy from the fresh
//!    curve. Failure here is non-fatal and is surfaced as its own report
//!    line.
//!
//! Collaborators ([`MetadataPreparer`], [`TransactionBuilder`],
//! [`Submitter`]) are trait seams; [`ChainBackend`] wires them to a
//! [`lift_chain::ChainClient`] and tests substitute fakes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod backend;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod identity;
pub mod orchestrator;
pub mod outcome;
pub mod report;
pub mod request;

pub use backend::ChainBackend;
pub use collaborators::{
    BuyPlan, CreationPlan, MetadataFields, MetadataPreparer, Submitter, TransactionBuilder,
};
pub use config::LauncherConfig;
pub use error::{LaunchError, Result};
pub use orchestrator::{BuyStrategy, Launcher};
pub use outcome::{BuyOutcome, LaunchOutcome};
pub use report::WorkflowReport;
pub use request::LaunchRequest;
