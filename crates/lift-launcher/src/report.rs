//! Workflow report assembly.
//!
//! A pure function from phase outcomes to the ordered, human-readable
//! lines the caller sees. The order never changes: creation details first,
//! then the buy status iff a buy was requested.

use crate::outcome::{BuyOutcome, LaunchOutcome};
use serde::{Deserialize, Serialize};

/// The final user-facing report for one workflow invocation.
///
/// Created fresh per invocation and immutable once assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowReport {
    lines: Vec<String>,
}

impl WorkflowReport {
    /// Assemble the report from a successful creation and, when a buy was
    /// requested, its outcome.
    #[must_use]
    pub fn assemble(launch: &LaunchOutcome, buy: Option<&BuyOutcome>) -> Self {
        let mut lines = vec![
            format!(
                "Successfully launched token: {} ({})",
                launch.name, launch.symbol
            ),
            String::new(),
            format!("Mint Address: {}", launch.mint),
            format!("Pool State: {}", launch.addresses.pool_state),
            format!("Token URI: {}", launch.uri),
            format!("Image URL: {}", launch.image),
            String::new(),
            format!("Funded from account: {}", launch.funder),
        ];

        if let Some(buy) = buy {
            lines.push(String::new());
            lines.push(match buy {
                BuyOutcome::Succeeded { spent } => {
                    format!("Initial buy succeeded: spent {} SOL", spent.as_sol())
                }
                BuyOutcome::Failed { reason: Some(msg) } => {
                    format!("Token launched, but initial buy failed: {msg}")
                }
                BuyOutcome::Failed { reason: None } => {
                    "Token launched, but initial buy failed.".to_string()
                }
            });
        }

        Self { lines }
    }

    /// The report lines in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render the report as a single newline-joined string.
    #[must_use]
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}
