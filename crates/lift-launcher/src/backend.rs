//! Chain-backed collaborator implementations.
//!
//! [`ChainBackend`] wires the collaborator seams to a [`ChainClient`]. The
//! same backend value serves all three capabilities, so a launcher is
//! typically constructed with three clones of one backend.

use crate::collaborators::{
    BuyPlan, CreationPlan, MetadataFields, MetadataPreparer, Submitter, TransactionBuilder,
};
use lift_chain::{
    Address, Amount, ChainClient, ChainError, Keypair, Transaction, derive_token_account,
};
use std::sync::Arc;

/// Collaborators backed by a launchpad chain client.
#[derive(Debug, Clone)]
pub struct ChainBackend {
    client: Arc<ChainClient>,
}

impl ChainBackend {
    /// Create a backend over a shared chain client.
    #[must_use]
    pub fn new(client: Arc<ChainClient>) -> Self {
        Self { client }
    }

    /// The underlying chain client.
    #[must_use]
    pub fn client(&self) -> &Arc<ChainClient> {
        &self.client
    }
}

impl MetadataPreparer for ChainBackend {
    async fn prepare(&self, fields: &MetadataFields) -> Result<String, ChainError> {
        self.client.host_metadata(&fields.to_document()).await
    }
}

impl TransactionBuilder for ChainBackend {
    async fn build_creation(
        &self,
        funder: &Address,
        mint: &Address,
        name: &str,
        symbol: &str,
        uri: &str,
    ) -> Result<CreationPlan, ChainError> {
        Ok(CreationPlan {
            transaction: Transaction::create_token(funder.clone(), mint.clone(), name, symbol, uri),
            base_token_account: derive_token_account(funder, mint),
        })
    }

    async fn build_buy(
        &self,
        funder: &Address,
        mint: &Address,
        amount_in: Amount,
        minimum_out: u64,
    ) -> Result<BuyPlan, ChainError> {
        Ok(BuyPlan {
            transaction: Transaction::buy(funder.clone(), mint.clone(), amount_in, minimum_out),
            // The simulated program needs no signers beyond the funder.
            extra_signers: Vec::new(),
        })
    }
}

impl Submitter for ChainBackend {
    async fn submit_and_confirm(
        &self,
        transaction: &Transaction,
        signers: &[&Keypair],
    ) -> Result<bool, ChainError> {
        self.client.submit_and_confirm(transaction, signers).await
    }
}
