//! Simulated launchpad backend.
//!
//! [`ChainClient`] stands in for the RPC node and launchpad program during
//! development and tests. It keeps account balances, hosted metadata, and
//! per-launch bonding curves in memory, and enforces the same rules the
//! on-chain program would: required signers, payer balance, and the
//! caller's slippage floor.

use crate::amount::Amount;
use crate::curve::BondingCurve;
use crate::error::{ChainError, Result};
use crate::keys::{Address, Keypair};
use crate::transaction::{Transaction, TransactionId, TransactionKind};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Network the client points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    /// Mainnet-beta (production).
    Mainnet,
    /// Devnet (testing).
    Devnet,
    /// Local validator.
    Localnet,
}

impl Network {
    /// Default RPC URL for this network.
    #[must_use]
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Self::Mainnet => "https://api.mainnet-beta.solana.com",
            Self::Devnet => "https://api.devnet.solana.com",
            Self::Localnet => "http://localhost:8899",
        }
    }
}

/// One registered launch.
#[derive(Debug, Clone)]
struct LaunchEntry {
    name: String,
    symbol: String,
    uri: String,
    curve: BondingCurve,
    /// Token base units held per owner address.
    holdings: HashMap<String, u64>,
}

/// Read-only view of a registered launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSummary {
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Hosted metadata URI.
    pub uri: String,
    /// Token base units sold so far.
    pub sold: u64,
}

#[derive(Debug, Default)]
struct SimulatedState {
    accounts: HashMap<String, Amount>,
    launches: HashMap<String, LaunchEntry>,
    metadata: HashMap<String, serde_json::Value>,
    transactions: HashMap<String, Transaction>,
}

/// Simulated launchpad client.
pub struct ChainClient {
    network: Network,
    state: Arc<Mutex<SimulatedState>>,
}

impl ChainClient {
    /// Create a client for the given network.
    #[must_use]
    pub fn new(network: Network) -> Self {
        Self {
            network,
            state: Arc::new(Mutex::new(SimulatedState::default())),
        }
    }

    /// Create a devnet client.
    #[must_use]
    pub fn devnet() -> Self {
        Self::new(Network::Devnet)
    }

    /// Create a mainnet client.
    #[must_use]
    pub fn mainnet() -> Self {
        Self::new(Network::Mainnet)
    }

    /// The network this client points at.
    #[must_use]
    pub fn network(&self) -> Network {
        self.network
    }

    /// Credit lamports to an address (devnet/localnet only).
    ///
    /// # Errors
    ///
    /// Returns error on mainnet.
    pub async fn airdrop(&self, address: &Address, amount: Amount) -> Result<()> {
        if self.network == Network::Mainnet {
            return Err(ChainError::submission("airdrop not available on mainnet"));
        }
        let mut state = self.state.lock().await;
        let balance = state
            .accounts
            .entry(address.as_str().to_string())
            .or_insert(Amount::ZERO);
        *balance = balance.saturating_add(amount);
        info!(address = %address, amount = %amount, "airdrop completed");
        Ok(())
    }

    /// SOL balance of an address.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn balance(&self, address: &Address) -> Result<Amount> {
        let state = self.state.lock().await;
        Ok(state
            .accounts
            .get(address.as_str())
            .copied()
            .unwrap_or(Amount::ZERO))
    }

    /// Token base units `owner` holds of `mint`.
    ///
    /// # Errors
    ///
    /// Returns error if no launch exists for `mint`.
    pub async fn token_balance(&self, owner: &Address, mint: &Address) -> Result<u64> {
        let state = self.state.lock().await;
        let launch = state
            .launches
            .get(mint.as_str())
            .ok_or_else(|| ChainError::LaunchNotFound {
                mint: mint.to_string(),
            })?;
        Ok(launch.holdings.get(owner.as_str()).copied().unwrap_or(0))
    }

    /// Host a metadata document and return its URI.
    ///
    /// The URI is content-addressed: the canonical JSON is hashed so the
    /// same document always maps to the same URI.
    ///
    /// # Errors
    ///
    /// Returns error if the document carries no image reference.
    pub async fn host_metadata(&self, document: &serde_json::Value) -> Result<String> {
        let image = document.get("image").and_then(serde_json::Value::as_str);
        if image.is_none_or(str::is_empty) {
            return Err(ChainError::metadata("document has no image reference"));
        }

        let canonical = serde_json::to_vec(document)?;
        let digest = Sha256::digest(&canonical);
        let uri = format!("ipfs://{}", bs58::encode(digest).into_string());

        let mut state = self.state.lock().await;
        state.metadata.insert(uri.clone(), document.clone());
        debug!(uri = %uri, "metadata hosted");
        Ok(uri)
    }

    /// Fetch a hosted metadata document.
    pub async fn metadata(&self, uri: &str) -> Option<serde_json::Value> {
        let state = self.state.lock().await;
        state.metadata.get(uri).cloned()
    }

    /// Token base units a buy would currently produce for `mint`.
    ///
    /// # Errors
    ///
    /// Returns error if no launch exists for `mint`.
    pub async fn quote_buy(&self, mint: &Address, amount_in: Amount) -> Result<u64> {
        let state = self.state.lock().await;
        let launch = state
            .launches
            .get(mint.as_str())
            .ok_or_else(|| ChainError::LaunchNotFound {
                mint: mint.to_string(),
            })?;
        Ok(launch.curve.quote_buy(amount_in.lamports()))
    }

    /// Summary of a registered launch, if any.
    pub async fn launch_summary(&self, mint: &Address) -> Option<LaunchSummary> {
        let state = self.state.lock().await;
        state.launches.get(mint.as_str()).map(|l| LaunchSummary {
            name: l.name.clone(),
            symbol: l.symbol.clone(),
            uri: l.uri.clone(),
            sold: l.curve.sold,
        })
    }

    /// Submit a transaction and wait for confirmation.
    ///
    /// Returns `Ok(true)` when the transaction confirms. Protocol-level
    /// rejections (missing launch, balance, slippage floor) surface as
    /// errors, matching how an RPC submission would fail.
    ///
    /// Every submission that clears the signer check is recorded with the
    /// payer's signature and its terminal status, queryable through
    /// [`get_transaction`](Self::get_transaction). A transaction missing a
    /// required signer is rejected outright and never reaches the ledger.
    ///
    /// # Errors
    ///
    /// Returns error if required signers are missing or the program rejects
    /// the operation.
    pub async fn submit_and_confirm(
        &self,
        transaction: &Transaction,
        signers: &[&Keypair],
    ) -> Result<bool> {
        let payer = require_signer(signers, &transaction.payer)?;

        let mut record = transaction.clone();
        let signature = payer.sign(record.id.as_str().as_bytes());
        record.mark_submitted(bs58::encode(signature.to_bytes()).into_string());

        let result = match &transaction.kind {
            TransactionKind::CreateToken { name, symbol, uri } => {
                // The mint keypair must co-sign its own creation.
                require_signer(signers, &transaction.mint)?;
                self.register_launch(transaction, name, symbol, uri).await
            }
            TransactionKind::Buy {
                amount_in,
                minimum_out,
            } => self.fill_buy(transaction, *amount_in, *minimum_out).await,
        };

        match &result {
            Ok(true) => record.mark_confirmed(),
            Ok(false) => {}
            Err(e) => record.mark_failed(e.to_string()),
        }

        let mut state = self.state.lock().await;
        state.transactions.insert(record.id.to_string(), record);

        result
    }

    /// Get a submitted transaction by ID.
    ///
    /// # Errors
    ///
    /// Returns error if no transaction with that ID was submitted.
    pub async fn get_transaction(&self, id: &TransactionId) -> Result<Transaction> {
        let state = self.state.lock().await;
        state
            .transactions
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| ChainError::TransactionNotFound { id: id.to_string() })
    }

    async fn register_launch(
        &self,
        transaction: &Transaction,
        name: &str,
        symbol: &str,
        uri: &str,
    ) -> Result<bool> {
        let mut state = self.state.lock().await;
        if state.launches.contains_key(transaction.mint.as_str()) {
            return Err(ChainError::LaunchExists {
                mint: transaction.mint.to_string(),
            });
        }
        state.launches.insert(
            transaction.mint.as_str().to_string(),
            LaunchEntry {
                name: name.to_string(),
                symbol: symbol.to_string(),
                uri: uri.to_string(),
                curve: BondingCurve::new(),
                holdings: HashMap::new(),
            },
        );
        info!(
            mint = %transaction.mint,
            name,
            symbol,
            "launch registered"
        );
        Ok(true)
    }

    async fn fill_buy(
        &self,
        transaction: &Transaction,
        amount_in: Amount,
        minimum_out: u64,
    ) -> Result<bool> {
        let mut state = self.state.lock().await;

        let balance = state
            .accounts
            .get(transaction.payer.as_str())
            .copied()
            .unwrap_or(Amount::ZERO);
        if balance < amount_in {
            return Err(ChainError::InsufficientBalance {
                have: balance.lamports(),
                need: amount_in.lamports(),
            });
        }

        let launch = state
            .launches
            .get_mut(transaction.mint.as_str())
            .ok_or_else(|| ChainError::LaunchNotFound {
                mint: transaction.mint.to_string(),
            })?;

        let quoted = launch.curve.quote_buy(amount_in.lamports());
        if quoted < minimum_out {
            return Err(ChainError::SlippageExceeded {
                minimum_out,
                available: quoted,
            });
        }

        let filled = launch.curve.apply_buy(amount_in.lamports());
        let holding = launch
            .holdings
            .entry(transaction.payer.as_str().to_string())
            .or_insert(0);
        *holding = holding.saturating_add(filled);

        if let Some(account) = state.accounts.get_mut(transaction.payer.as_str()) {
            *account = account.saturating_sub(amount_in);
        }

        info!(
            mint = %transaction.mint,
            buyer = %transaction.payer,
            amount = %amount_in,
            filled,
            "buy filled"
        );
        Ok(true)
    }
}

fn require_signer<'a>(signers: &[&'a Keypair], address: &Address) -> Result<&'a Keypair> {
    signers
        .iter()
        .find(|k| k.address() == address)
        .copied()
        .ok_or_else(|| ChainError::MissingSigner {
            address: address.to_string(),
        })
}

#[allow(clippy::missing_fields_in_debug)]
impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionStatus;
    use serde_json::json;

    async fn funded_client(sol: f64) -> (ChainClient, Keypair) {
        let client = ChainClient::devnet();
        let payer = Keypair::generate().expect("payer");
        let amount = Amount::try_sol(sol).expect("amount");
        client.airdrop(payer.address(), amount).await.expect("airdrop");
        (client, payer)
    }

    async fn launch_token(client: &ChainClient, payer: &Keypair) -> Keypair {
        let mint = Keypair::generate().expect("mint");
        let tx = Transaction::create_token(
            payer.address().clone(),
            mint.address().clone(),
            "Foo",
            "FOO",
            "ipfs://meta",
        );
        let confirmed = client
            .submit_and_confirm(&tx, &[payer, &mint])
            .await
            .expect("submit");
        assert!(confirmed);
        mint
    }

    #[tokio::test]
    async fn test_airdrop_and_balance() {
        let (client, payer) = funded_client(5.0).await;
        let balance = client.balance(payer.address()).await.expect("balance");
        assert_eq!(balance, Amount::try_sol(5.0).expect("amount"));
    }

    #[tokio::test]
    async fn test_airdrop_rejected_on_mainnet() {
        let client = ChainClient::mainnet();
        let payer = Keypair::generate().expect("payer");
        assert!(client.airdrop(payer.address(), Amount::ZERO).await.is_err());
    }

    #[tokio::test]
    async fn test_create_registers_launch() {
        let (client, payer) = funded_client(1.0).await;
        let mint = launch_token(&client, &payer).await;
        let summary = client.launch_summary(mint.address()).await.expect("summary");
        assert_eq!(summary.symbol, "FOO");
        assert_eq!(summary.sold, 0);
    }

    #[tokio::test]
    async fn test_create_requires_mint_signature() {
        let (client, payer) = funded_client(1.0).await;
        let mint = Keypair::generate().expect("mint");
        let tx = Transaction::create_token(
            payer.address().clone(),
            mint.address().clone(),
            "Foo",
            "FOO",
            "ipfs://meta",
        );
        let result = client.submit_and_confirm(&tx, &[&payer]).await;
        assert!(matches!(result, Err(ChainError::MissingSigner { .. })));
    }

    #[tokio::test]
    async fn test_duplicate_launch_rejected() {
        let (client, payer) = funded_client(1.0).await;
        let mint = launch_token(&client, &payer).await;
        let tx = Transaction::create_token(
            payer.address().clone(),
            mint.address().clone(),
            "Foo",
            "FOO",
            "ipfs://meta",
        );
        let result = client.submit_and_confirm(&tx, &[&payer, &mint]).await;
        assert!(matches!(result, Err(ChainError::LaunchExists { .. })));
    }

    #[tokio::test]
    async fn test_buy_moves_balances() {
        let (client, payer) = funded_client(10.0).await;
        let mint = launch_token(&client, &payer).await;

        let spend = Amount::try_sol(1.0).expect("amount");
        let tx = Transaction::buy(payer.address().clone(), mint.address().clone(), spend, 0);
        let confirmed = client.submit_and_confirm(&tx, &[&payer]).await.expect("buy");
        assert!(confirmed);

        let balance = client.balance(payer.address()).await.expect("balance");
        assert_eq!(balance, Amount::try_sol(9.0).expect("amount"));

        let holding = client
            .token_balance(payer.address(), mint.address())
            .await
            .expect("holding");
        assert!(holding > 0);
    }

    #[tokio::test]
    async fn test_buy_unknown_mint_rejected() {
        let (client, payer) = funded_client(10.0).await;
        let ghost = Keypair::generate().expect("ghost");
        let tx = Transaction::buy(
            payer.address().clone(),
            ghost.address().clone(),
            Amount::try_sol(1.0).expect("amount"),
            0,
        );
        let result = client.submit_and_confirm(&tx, &[&payer]).await;
        assert!(matches!(result, Err(ChainError::LaunchNotFound { .. })));
    }

    #[tokio::test]
    async fn test_buy_insufficient_balance_rejected() {
        let (client, payer) = funded_client(0.5).await;
        let mint = launch_token(&client, &payer).await;
        let tx = Transaction::buy(
            payer.address().clone(),
            mint.address().clone(),
            Amount::try_sol(1.0).expect("amount"),
            0,
        );
        let result = client.submit_and_confirm(&tx, &[&payer]).await;
        assert!(matches!(result, Err(ChainError::InsufficientBalance { .. })));
    }

    #[tokio::test]
    async fn test_slippage_floor_enforced() {
        let (client, payer) = funded_client(10.0).await;
        let mint = launch_token(&client, &payer).await;

        let spend = Amount::try_sol(1.0).expect("amount");
        let quoted = client.quote_buy(mint.address(), spend).await.expect("quote");

        let tx = Transaction::buy(
            payer.address().clone(),
            mint.address().clone(),
            spend,
            quoted + 1,
        );
        let result = client.submit_and_confirm(&tx, &[&payer]).await;
        assert!(matches!(result, Err(ChainError::SlippageExceeded { .. })));

        // Nothing moved.
        let balance = client.balance(payer.address()).await.expect("balance");
        assert_eq!(balance, Amount::try_sol(10.0).expect("amount"));
    }

    #[tokio::test]
    async fn test_confirmed_submission_is_recorded_with_signature() {
        let (client, payer) = funded_client(10.0).await;
        let mint = Keypair::generate().expect("mint");
        let tx = Transaction::create_token(
            payer.address().clone(),
            mint.address().clone(),
            "Foo",
            "FOO",
            "ipfs://meta",
        );
        client
            .submit_and_confirm(&tx, &[&payer, &mint])
            .await
            .expect("submit");

        let record = client.get_transaction(&tx.id).await.expect("record");
        assert_eq!(record.status, TransactionStatus::Confirmed);
        assert!(record.signature.is_some());
        assert!(record.error.is_none());
    }

    #[tokio::test]
    async fn test_rejected_submission_is_recorded_as_failed() {
        let (client, payer) = funded_client(10.0).await;
        let ghost = Keypair::generate().expect("ghost");
        let tx = Transaction::buy(
            payer.address().clone(),
            ghost.address().clone(),
            Amount::try_sol(1.0).expect("amount"),
            0,
        );
        assert!(client.submit_and_confirm(&tx, &[&payer]).await.is_err());

        let record = client.get_transaction(&tx.id).await.expect("record");
        assert_eq!(record.status, TransactionStatus::Failed);
        assert!(record.error.as_deref().is_some_and(|e| e.contains("not found")));
    }

    #[tokio::test]
    async fn test_unknown_transaction_id_not_found() {
        let client = ChainClient::devnet();
        let result = client.get_transaction(&TransactionId::new()).await;
        assert!(matches!(result, Err(ChainError::TransactionNotFound { .. })));
    }

    #[tokio::test]
    async fn test_unsigned_submission_is_not_recorded() {
        let (client, payer) = funded_client(1.0).await;
        let mint = Keypair::generate().expect("mint");
        let tx = Transaction::create_token(
            payer.address().clone(),
            mint.address().clone(),
            "Foo",
            "FOO",
            "ipfs://meta",
        );
        // Missing the mint co-signature.
        assert!(client.submit_and_confirm(&tx, &[&payer]).await.is_err());
        assert!(client.get_transaction(&tx.id).await.is_err());
    }

    #[tokio::test]
    async fn test_metadata_hosting_is_content_addressed() {
        let client = ChainClient::devnet();
        let document = json!({
            "name": "Foo",
            "symbol": "FOO",
            "description": "d",
            "image": "http://x/i.png",
        });
        let uri_a = client.host_metadata(&document).await.expect("host");
        let uri_b = client.host_metadata(&document).await.expect("host");
        assert_eq!(uri_a, uri_b);
        assert!(uri_a.starts_with("ipfs://"));
        assert_eq!(client.metadata(&uri_a).await, Some(document));
    }

    #[tokio::test]
    async fn test_metadata_without_image_rejected() {
        let client = ChainClient::devnet();
        let document = json!({ "name": "Foo", "image": "" });
        assert!(client.host_metadata(&document).await.is_err());
    }
}
