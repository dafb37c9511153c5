//! Funding and asset identity resolution.

use crate::config::LauncherConfig;
use crate::error::{LaunchError, Result};
use lift_chain::Keypair;
use tracing::debug;

/// Resolve the funding identity from configuration.
///
/// Checked before any expensive network work: a missing key fails with
/// [`LaunchError::Configuration`], an undecodable one with
/// [`LaunchError::Identity`].
///
/// # Errors
///
/// Returns error when no funding key is configured or it fails to decode.
pub fn resolve_funding(config: &LauncherConfig) -> Result<Keypair> {
    let encoded = config
        .funding_key
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            LaunchError::configuration(format!(
                "set {} to a base58 keypair",
                crate::config::FUNDING_KEY_ENV
            ))
        })?;

    let funder =
        Keypair::from_base58(encoded).map_err(|e| LaunchError::identity(e.to_string()))?;
    debug!(funder = %funder.address(), "funding identity resolved");
    Ok(funder)
}

/// Generate the single-use asset identity for a new launch.
///
/// One fresh keypair per invocation from the OS CSPRNG; its public key
/// becomes the token's mint address once creation confirms. Never derived
/// from user input.
///
/// # Errors
///
/// Returns error if key generation fails.
pub fn generate_asset() -> Result<Keypair> {
    Keypair::generate().map_err(|e| LaunchError::identity(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_configuration_error() {
        let config = LauncherConfig::unfunded();
        let result = resolve_funding(&config);
        assert!(matches!(result, Err(LaunchError::Configuration { .. })));
    }

    #[test]
    fn test_blank_key_is_configuration_error() {
        let config = LauncherConfig::new("   ");
        let result = resolve_funding(&config);
        assert!(matches!(result, Err(LaunchError::Configuration { .. })));
    }

    #[test]
    fn test_malformed_key_is_identity_error() {
        let config = LauncherConfig::new("not-a-keypair!!!");
        let result = resolve_funding(&config);
        assert!(matches!(result, Err(LaunchError::Identity { .. })));
    }

    #[test]
    fn test_valid_key_resolves() {
        let keypair = Keypair::generate().expect("generate");
        let config = LauncherConfig::new(keypair.to_base58());
        let funder = resolve_funding(&config).expect("resolve");
        assert_eq!(funder.address(), keypair.address());
    }

    #[test]
    fn test_asset_identities_are_unique() {
        let a = generate_asset().expect("a");
        let b = generate_asset().expect("b");
        assert_ne!(a.address(), b.address());
    }
}
