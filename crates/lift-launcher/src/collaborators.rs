//! Collaborator seams for the launch workflow.
//!
//! The orchestrator never talks to the network directly; it goes through
//! these three capabilities so tests substitute fakes and production wires
//! in a chain backend. Trait methods return `impl Future` so implementors
//! stay object-free and `Send`.

use lift_chain::{Address, Amount, ChainError, Keypair, Transaction};
use serde_json::json;

use crate::request::LaunchRequest;

/// Metadata fields handed to the preparer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFields {
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Token description.
    pub description: String,
    /// Twitter handle or URL.
    pub twitter: String,
    /// Telegram group URL.
    pub telegram: String,
    /// Website URL.
    pub website: String,
    /// Image reference.
    pub image: String,
}

impl MetadataFields {
    /// Extract the metadata fields from a validated request.
    #[must_use]
    pub fn from_request(request: &LaunchRequest) -> Self {
        Self {
            name: request.name.clone(),
            symbol: request.symbol.clone(),
            description: request.description.clone(),
            twitter: request.twitter.clone(),
            telegram: request.telegram.clone(),
            website: request.website.clone(),
            image: request.image.clone(),
        }
    }

    /// Render the fields as the hosted metadata document.
    #[must_use]
    pub fn to_document(&self) -> serde_json::Value {
        json!({
            "name": self.name,
            "symbol": self.symbol,
            "description": self.description,
            "twitter": self.twitter,
            "telegram": self.telegram,
            "website": self.website,
            "image": self.image,
        })
    }
}

/// A built creation transaction and its dependent account.
#[derive(Debug, Clone)]
pub struct CreationPlan {
    /// The creation transaction, signed at submission by funder and mint.
    pub transaction: Transaction,
    /// The funder's token account for the new mint.
    pub base_token_account: Address,
}

/// A built buy transaction and any extra signers it needs.
#[derive(Debug)]
pub struct BuyPlan {
    /// The buy transaction, signed at submission by the funder.
    pub transaction: Transaction,
    /// Additional signers beyond the funder.
    pub extra_signers: Vec<Keypair>,
}

/// Hosts token metadata and returns its URI.
#[allow(async_fn_in_trait)]
pub trait MetadataPreparer: Send + Sync {
    /// Upload the metadata document; returns its URI.
    fn prepare(
        &self,
        fields: &MetadataFields,
    ) -> impl std::future::Future<Output = Result<String, ChainError>> + Send;
}

/// Builds creation and buy transactions.
#[allow(async_fn_in_trait)]
pub trait TransactionBuilder: Send + Sync {
    /// Build the token creation transaction.
    fn build_creation(
        &self,
        funder: &Address,
        mint: &Address,
        name: &str,
        symbol: &str,
        uri: &str,
    ) -> impl std::future::Future<Output = Result<CreationPlan, ChainError>> + Send;

    /// Build a buy transaction against an existing launch.
    fn build_buy(
        &self,
        funder: &Address,
        mint: &Address,
        amount_in: Amount,
        minimum_out: u64,
    ) -> impl std::future::Future<Output = Result<BuyPlan, ChainError>> + Send;

    /// Build the creation and buy transactions in one round trip.
    ///
    /// Default implementation chains the two single builders; backends with
    /// a combined helper can override it.
    fn build_creation_with_buy(
        &self,
        funder: &Address,
        mint: &Address,
        name: &str,
        symbol: &str,
        uri: &str,
        amount_in: Amount,
        minimum_out: u64,
    ) -> impl std::future::Future<Output = Result<(CreationPlan, BuyPlan), ChainError>> + Send
    {
        async move {
            let creation = self
                .build_creation(funder, mint, name, symbol, uri)
                .await?;
            let buy = self.build_buy(funder, mint, amount_in, minimum_out).await?;
            Ok((creation, buy))
        }
    }
}

/// Submits transactions and waits for confirmation.
#[allow(async_fn_in_trait)]
pub trait Submitter: Send + Sync {
    /// Submit a transaction signed by `signers`; `Ok(true)` means confirmed.
    fn submit_and_confirm(
        &self,
        transaction: &Transaction,
        signers: &[&Keypair],
    ) -> impl std::future::Future<Output = Result<bool, ChainError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn request() -> LaunchRequest {
        LaunchRequest {
            name: "Foo".to_string(),
            symbol: "FOO".to_string(),
            description: "d".to_string(),
            image: "http://x/i.png".to_string(),
            twitter: "@foo".to_string(),
            telegram: String::new(),
            website: String::new(),
            initial_buy_amount: 0.0,
            minimum_token_out: 0.0,
        }
    }

    #[test]
    fn test_fields_mirror_request() {
        let fields = MetadataFields::from_request(&request());
        assert_eq!(fields.name, "Foo");
        assert_eq!(fields.twitter, "@foo");
        assert_eq!(fields.telegram, "");
    }

    #[test]
    fn test_document_carries_all_fields() {
        let document = MetadataFields::from_request(&request()).to_document();
        assert_eq!(document["symbol"], Value::from("FOO"));
        assert_eq!(document["image"], Value::from("http://x/i.png"));
        assert_eq!(document["website"], Value::from(""));
    }
}
