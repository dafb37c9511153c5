//! The launch tool: uniform error-to-text boundary over the orchestrator.
//!
//! `execute` never returns an error. Every failure — validation,
//! configuration, or a fatal phase — is rendered as a single text item, so
//! the host always receives a successful-shaped response whose *content*
//! encodes success or failure.

use crate::content::ToolContent;
use crate::descriptor::{ToolDescriptor, launch_descriptor};
use lift_chain::ChainClient;
use lift_launcher::{
    ChainBackend, Launcher, LaunchRequest, LauncherConfig, MetadataPreparer, Submitter,
    TransactionBuilder,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// Tool wrapper around the launch orchestrator.
pub struct LaunchTool<M, T, S> {
    launcher: Launcher<M, T, S>,
}

impl LaunchTool<ChainBackend, ChainBackend, ChainBackend> {
    /// Create a tool wired to a chain client.
    #[must_use]
    pub fn with_chain(config: LauncherConfig, client: Arc<ChainClient>) -> Self {
        let backend = ChainBackend::new(client);
        Self::new(Launcher::new(config, backend.clone(), backend.clone(), backend))
    }
}

impl<M, T, S> LaunchTool<M, T, S>
where
    M: MetadataPreparer,
    T: TransactionBuilder,
    S: Submitter,
{
    /// Wrap an already-constructed launcher.
    #[must_use]
    pub fn new(launcher: Launcher<M, T, S>) -> Self {
        Self { launcher }
    }

    /// The descriptor to register with the invocation host.
    #[must_use]
    pub fn descriptor(&self) -> ToolDescriptor {
        launch_descriptor()
    }

    /// Execute the tool with raw host arguments.
    ///
    /// Always returns at least one content item; never an error.
    pub async fn execute(&self, arguments: &Value) -> Vec<ToolContent> {
        let request = match LaunchRequest::from_value(arguments) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "launch request rejected");
                return vec![ToolContent::text(format!("Error: {e}"))];
            }
        };

        match self.launcher.execute(&request).await {
            Ok(report) => vec![ToolContent::text(report.render())],
            Err(e) => {
                warn!(error = %e, "launch workflow failed");
                vec![ToolContent::text(format!("Error: {e}"))]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lift_chain::{Amount, Keypair};
    use serde_json::json;

    fn text_of(items: &[ToolContent]) -> &str {
        assert_eq!(items.len(), 1, "expected a single content item");
        match &items[0] {
            ToolContent::Text { text } => text,
            ToolContent::Image { .. } => panic!("expected text content"),
        }
    }

    async fn funded_tool(sol: f64) -> LaunchTool<ChainBackend, ChainBackend, ChainBackend> {
        let client = Arc::new(ChainClient::devnet());
        let funder = Keypair::generate().expect("funder");
        client
            .airdrop(funder.address(), Amount::try_sol(sol).expect("amount"))
            .await
            .expect("airdrop");
        LaunchTool::with_chain(LauncherConfig::new(funder.to_base58()), client)
    }

    #[tokio::test]
    async fn test_missing_fields_yield_single_error_item() {
        let tool = funded_tool(1.0).await;
        let items = tool.execute(&json!({ "name": "Foo" })).await;
        let text = text_of(&items);
        assert!(text.starts_with("Error: "));
        assert!(text.contains("Missing required parameters"));
    }

    #[tokio::test]
    async fn test_no_funding_identity_yields_single_error_item() {
        let client = Arc::new(ChainClient::devnet());
        let tool = LaunchTool::with_chain(LauncherConfig::unfunded(), client);
        let items = tool
            .execute(&json!({
                "name": "Foo",
                "symbol": "FOO",
                "description": "d",
                "image": "http://x/i.png",
            }))
            .await;
        let text = text_of(&items);
        assert!(text.starts_with("Error: no funding identity configured"));
    }

    #[tokio::test]
    async fn test_malformed_funding_identity_yields_identity_error() {
        let client = Arc::new(ChainClient::devnet());
        let tool = LaunchTool::with_chain(LauncherConfig::new("garbage!!!"), client);
        let items = tool
            .execute(&json!({
                "name": "Foo",
                "symbol": "FOO",
                "description": "d",
                "image": "http://x/i.png",
            }))
            .await;
        assert!(text_of(&items).starts_with("Error: invalid funding identity"));
    }

    #[tokio::test]
    async fn test_launch_without_buy_reports_creation_only() {
        let tool = funded_tool(5.0).await;
        let items = tool
            .execute(&json!({
                "name": "Foo",
                "symbol": "FOO",
                "description": "d",
                "image": "http://x/i.png",
                "initial_buy_amount": 0,
            }))
            .await;
        let text = text_of(&items);
        assert!(text.starts_with("Successfully launched token: Foo (FOO)"));
        assert!(text.contains("Pool State: "));
        assert!(!text.contains("Initial buy"));
    }

    #[tokio::test]
    async fn test_launch_with_buy_reports_spend() {
        let tool = funded_tool(5.0).await;
        let items = tool
            .execute(&json!({
                "name": "Foo",
                "symbol": "FOO",
                "description": "d",
                "image": "http://x/i.png",
                "initial_buy_amount": 0.5,
                "minimum_token_out": 100,
            }))
            .await;
        let text = text_of(&items);
        assert!(text.contains("Initial buy succeeded: spent 0.5 SOL"));
    }

    #[tokio::test]
    async fn test_failed_buy_still_reports_launch_success() {
        // Underfunded for the buy but the creation itself is free.
        let tool = funded_tool(0.1).await;
        let items = tool
            .execute(&json!({
                "name": "Foo",
                "symbol": "FOO",
                "description": "d",
                "image": "http://x/i.png",
                "initial_buy_amount": 1.0,
            }))
            .await;
        let text = text_of(&items);
        assert!(text.starts_with("Successfully launched token"));
        assert!(text.contains("Token launched, but initial buy failed: "));
    }

    #[tokio::test]
    async fn test_malformed_amount_is_validation_error() {
        let tool = funded_tool(5.0).await;
        let items = tool
            .execute(&json!({
                "name": "Foo",
                "symbol": "FOO",
                "description": "d",
                "image": "http://x/i.png",
                "initial_buy_amount": "lots",
            }))
            .await;
        assert!(text_of(&items).starts_with("Error: "));
    }
}
