//! # lift-tool
//!
//! Caller-facing surface for the Liftoff launch-and-buy workflow.
//!
//! Exposes one operation, [`LaunchTool::execute`], which takes raw JSON
//! arguments and returns an ordered sequence of [`ToolContent`] items, plus
//! a [`descriptor`](LaunchTool::descriptor) for registering the tool with
//! an external invocation host. Errors never propagate to the host; the
//! response shape is uniform and failures are encoded in the text.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lift_chain::ChainClient;
//! use lift_launcher::LauncherConfig;
//! use lift_tool::LaunchTool;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let client = Arc::new(ChainClient::devnet());
//! let tool = LaunchTool::with_chain(LauncherConfig::from_env(), client);
//! let items = tool
//!     .execute(&json!({
//!         "name": "MyToken",
//!         "symbol": "MYT",
//!         "description": "My first token",
//!         "image": "https://example.com/token.png",
//!         "initial_buy_amount": 0.1,
//!     }))
//!     .await;
//! # let _ = items;
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod content;
pub mod descriptor;
pub mod tool;

pub use content::ToolContent;
pub use descriptor::{TOOL_NAME, ToolDescriptor, launch_descriptor};
pub use tool::LaunchTool;
