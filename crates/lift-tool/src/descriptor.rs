//! Tool descriptor for registration with an invocation host.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Name the launch tool registers under.
pub const TOOL_NAME: &str = "launch-token-with-buy";

/// Descriptor handed to the host during registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Tool name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// JSON schema of the tool arguments.
    pub input_schema: Value,
}

/// The launch tool's descriptor.
#[must_use]
pub fn launch_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: "Launch a new token on the launchpad and optionally perform an \
                      initial buy of your own token."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "name": { "type": "string", "description": "Token name" },
                "symbol": { "type": "string", "description": "Token symbol/ticker" },
                "description": { "type": "string", "description": "Token description" },
                "twitter": { "type": "string", "description": "Twitter handle/URL (optional)" },
                "telegram": { "type": "string", "description": "Telegram group URL (optional)" },
                "website": { "type": "string", "description": "Website URL (optional)" },
                "image": { "type": "string", "description": "Image URL to use for the token" },
                "initial_buy_amount": {
                    "type": "number",
                    "description": "Amount of SOL to spend buying your own token. Use 0 to skip the initial buy.",
                    "minimum": 0,
                },
                "minimum_token_out": {
                    "type": "number",
                    "description": "Minimum number of tokens to receive from the initial buy (slippage floor).",
                    "minimum": 0,
                },
            },
            "required": ["name", "symbol", "description", "image"],
        }),
    }
}
