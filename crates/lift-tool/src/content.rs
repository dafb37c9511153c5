//! Result items returned to the invoking host.

use serde::{Deserialize, Serialize};

/// One item in a tool response.
///
/// The launch tool only ever emits text today; the image variant is
/// reserved for hosts that accept richer content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ToolContent {
    /// Plain text.
    Text {
        /// The text body.
        text: String,
    },
    /// Base64-encoded image (reserved, unused).
    Image {
        /// Base64 payload.
        data: String,
        /// MIME type of the payload.
        mime_type: String,
    },
}

impl ToolContent {
    /// Create a text item.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}
