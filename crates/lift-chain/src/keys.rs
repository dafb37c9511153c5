//! Signing identities for launchpad operations.
//!
//! Two identities participate in a launch: the funding identity that pays
//! fees and the initial buy, and the single-use asset identity whose public
//! key becomes the token's mint address. Both are Ed25519 keypairs
//! compatible with Solana's encoding conventions.

use crate::error::{ChainError, Result};
use ed25519_dalek::{Signature, Signer, SigningKey};
use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A base58-encoded 32-byte public key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Parse an address from a base58 string.
    ///
    /// # Errors
    ///
    /// Returns error if the string is not base58 or does not decode to
    /// 32 bytes.
    pub fn from_base58(s: &str) -> Result<Self> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| ChainError::invalid_address(format!("invalid base58: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Create an address from raw public key bytes.
    ///
    /// # Errors
    ///
    /// Returns error if `bytes` is not exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 32 {
            return Err(ChainError::invalid_address(format!(
                "address must be 32 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self(bs58::encode(bytes).into_string()))
    }

    /// The base58 string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The raw 32 public key bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        bs58::decode(&self.0).into_vec().unwrap_or_default()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An Ed25519 signing identity.
pub struct Keypair {
    signing_key: SigningKey,
    address: Address,
}

impl Keypair {
    /// Generate a fresh keypair from the operating system CSPRNG.
    ///
    /// Key material comes straight from `OsRng`; asset identities must never
    /// be derived from user-controlled input.
    ///
    /// # Errors
    ///
    /// Returns error if the derived public key cannot be encoded.
    pub fn generate() -> Result<Self> {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);
        Self::from_seed(&seed)
    }

    /// Reconstruct a keypair from a 32-byte seed.
    ///
    /// # Errors
    ///
    /// Returns error if `seed` is not exactly 32 bytes.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        let seed: [u8; 32] = seed
            .try_into()
            .map_err(|_| ChainError::keypair(format!("seed must be 32 bytes, got {}", seed.len())))?;
        let signing_key = SigningKey::from_bytes(&seed);
        let address = Address::from_bytes(signing_key.verifying_key().as_bytes())?;
        Ok(Self {
            signing_key,
            address,
        })
    }

    /// Decode a keypair from base58.
    ///
    /// Accepts either the 64-byte Solana keypair encoding (seed followed by
    /// public key) or a bare 32-byte seed.
    ///
    /// # Errors
    ///
    /// Returns error on invalid base58, unexpected length, or a 64-byte
    /// encoding whose trailing public key does not match the seed.
    pub fn from_base58(encoded: &str) -> Result<Self> {
        let bytes = bs58::decode(encoded.trim())
            .into_vec()
            .map_err(|e| ChainError::keypair(format!("invalid base58: {e}")))?;

        match bytes.len() {
            32 => Self::from_seed(&bytes),
            64 => {
                let keypair = Self::from_seed(&bytes[..32])?;
                if keypair.address.to_bytes() != bytes[32..] {
                    return Err(ChainError::keypair(
                        "public key does not match secret key",
                    ));
                }
                Ok(keypair)
            }
            n => Err(ChainError::keypair(format!(
                "keypair must decode to 32 or 64 bytes, got {n}"
            ))),
        }
    }

    /// Encode the keypair in the 64-byte Solana base58 format.
    #[must_use]
    pub fn to_base58(&self) -> String {
        let mut bytes = Vec::with_capacity(64);
        bytes.extend_from_slice(self.signing_key.as_bytes());
        bytes.extend_from_slice(self.signing_key.verifying_key().as_bytes());
        bs58::encode(bytes).into_string()
    }

    /// The public address of this keypair.
    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Sign a message.
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.signing_key.sign(message)
    }
}

#[allow(clippy::missing_fields_in_debug)]
impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("address", &self.address)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_produces_distinct_addresses() {
        let a = Keypair::generate().expect("generate");
        let b = Keypair::generate().expect("generate");
        assert_ne!(a.address(), b.address());
    }

    #[test]
    fn test_base58_roundtrip() {
        let original = Keypair::generate().expect("generate");
        let decoded = Keypair::from_base58(&original.to_base58()).expect("decode");
        assert_eq!(original.address(), decoded.address());
    }

    #[test]
    fn test_seed_only_encoding_accepted() {
        let original = Keypair::generate().expect("generate");
        let seed_b58 = bs58::encode(original.signing_key.as_bytes()).into_string();
        let decoded = Keypair::from_base58(&seed_b58).expect("decode seed");
        assert_eq!(original.address(), decoded.address());
    }

    #[test]
    fn test_mismatched_public_half_rejected() {
        let a = Keypair::generate().expect("generate");
        let b = Keypair::generate().expect("generate");
        let mut bytes = Vec::with_capacity(64);
        bytes.extend_from_slice(a.signing_key.as_bytes());
        bytes.extend_from_slice(&b.address().to_bytes());
        let forged = bs58::encode(bytes).into_string();
        assert!(Keypair::from_base58(&forged).is_err());
    }

    #[test]
    fn test_invalid_base58_rejected() {
        assert!(Keypair::from_base58("not base58 0OIl").is_err());
    }

    #[test]
    fn test_wrong_length_rejected() {
        let short = bs58::encode([0u8; 16]).into_string();
        assert!(Keypair::from_base58(&short).is_err());
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let original = Keypair::generate().expect("generate");
        let padded = format!("  {}\n", original.to_base58());
        let decoded = Keypair::from_base58(&padded).expect("decode");
        assert_eq!(original.address(), decoded.address());
    }

    #[test]
    fn test_signature_verifies() {
        let keypair = Keypair::generate().expect("generate");
        let message = b"launch it";
        let signature = keypair.sign(message);
        let verifying = keypair.signing_key.verifying_key();
        assert!(verifying.verify_strict(message, &signature).is_ok());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let keypair = Keypair::generate().expect("generate");
        let debug = format!("{keypair:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(&keypair.to_base58()));
    }

    #[test]
    fn test_address_roundtrip() {
        let keypair = Keypair::generate().expect("generate");
        let parsed = Address::from_base58(keypair.address().as_str()).expect("parse");
        assert_eq!(keypair.address(), &parsed);
    }

    #[test]
    fn test_address_wrong_length() {
        assert!(Address::from_base58("abc").is_err());
    }
}
