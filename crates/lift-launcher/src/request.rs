//! Launch request validation.
//!
//! Raw tool arguments arrive as untyped JSON. [`LaunchRequest::from_value`]
//! normalizes them into a validated request or fails with
//! [`LaunchError::Validation`] before any collaborator is touched.
//!
//! Numeric fields are coerced the way the tool schema promises: absent,
//! null, `false`, and the empty string all mean exactly 0, while a string
//! that does not parse as a number is rejected outright rather than
//! silently zeroed. Fund-moving input has to be auditable.

use crate::error::{LaunchError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A validated, normalized launch request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRequest {
    /// Token name.
    pub name: String,
    /// Token symbol/ticker.
    pub symbol: String,
    /// Token description.
    pub description: String,
    /// Image reference for the token.
    pub image: String,
    /// Twitter handle or URL. Empty when not provided.
    pub twitter: String,
    /// Telegram group URL. Empty when not provided.
    pub telegram: String,
    /// Website URL. Empty when not provided.
    pub website: String,
    /// SOL to spend buying the token right after launch. 0 skips the buy.
    pub initial_buy_amount: f64,
    /// Minimum tokens to accept from the buy (slippage floor).
    pub minimum_token_out: f64,
}

impl LaunchRequest {
    /// Validate raw tool arguments into a request.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Validation`] when a required field is missing
    /// or empty, or a numeric field cannot be coerced.
    pub fn from_value(arguments: &Value) -> Result<Self> {
        let name = required_string(arguments, "name")?;
        let symbol = required_string(arguments, "symbol")?;
        let description = required_string(arguments, "description")?;
        let image = required_string(arguments, "image")?;

        let request = Self {
            name,
            symbol,
            description,
            image,
            twitter: optional_string(arguments, "twitter"),
            telegram: optional_string(arguments, "telegram"),
            website: optional_string(arguments, "website"),
            initial_buy_amount: non_negative_number(arguments, "initial_buy_amount")?,
            minimum_token_out: non_negative_number(arguments, "minimum_token_out")?,
        };
        Ok(request)
    }

    /// Whether the caller asked for an initial buy.
    #[must_use]
    pub fn buy_requested(&self) -> bool {
        self.initial_buy_amount > 0.0
    }
}

fn required_string(arguments: &Value, key: &str) -> Result<String> {
    match arguments.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(Value::Null) | None | Some(Value::String(_)) => Err(LaunchError::validation(
            "Missing required parameters. Please provide name, symbol, description, and image.",
        )),
        Some(_) => Err(LaunchError::validation(format!(
            "field '{key}' must be a string"
        ))),
    }
}

fn optional_string(arguments: &Value, key: &str) -> String {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

fn non_negative_number(arguments: &Value, key: &str) -> Result<f64> {
    let value = match arguments.get(key) {
        // Absent and falsy inputs coerce to exactly 0.
        None | Some(Value::Null) | Some(Value::Bool(false)) => return Ok(0.0),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
            LaunchError::validation(format!("field '{key}' is not a representable number"))
        })?,
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0.0);
            }
            trimmed.parse::<f64>().map_err(|_| {
                LaunchError::validation(format!("field '{key}' must be a number, got '{s}'"))
            })?
        }
        Some(_) => {
            return Err(LaunchError::validation(format!(
                "field '{key}' must be a number"
            )));
        }
    };

    if !value.is_finite() || value < 0.0 {
        return Err(LaunchError::validation(format!(
            "field '{key}' must be a non-negative number, got {value}"
        )));
    }
    Ok(value)
}
