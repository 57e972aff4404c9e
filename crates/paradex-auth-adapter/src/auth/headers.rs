/*
[INPUT]:  Signature, account identifiers, and timestamps
[OUTPUT]: Exact header sets for the onboarding and auth requests
[POS]:    Auth layer - protocol header assembly
[UPDATE]: When the remote header contract changes
*/

use crate::auth::{ParadexAccount, StarkSignature};

// Header names are protocol contract; case and spelling exact.
pub const HEADER_ETHEREUM_ACCOUNT: &str = "PARADEX-ETHEREUM-ACCOUNT";
pub const HEADER_STARKNET_ACCOUNT: &str = "PARADEX-STARKNET-ACCOUNT";
pub const HEADER_STARKNET_SIGNATURE: &str = "PARADEX-STARKNET-SIGNATURE";
pub const HEADER_TIMESTAMP: &str = "PARADEX-TIMESTAMP";
pub const HEADER_SIGNATURE_EXPIRATION: &str = "PARADEX-SIGNATURE-EXPIRATION";

/// Headers for POST /onboarding; timestamp is milliseconds since epoch.
///
/// Carries both the source-chain and target-chain account identifiers.
pub fn onboarding_headers(
    account: &ParadexAccount,
    signature: &StarkSignature,
    timestamp_ms: u64,
) -> Vec<(&'static str, String)> {
    vec![
        ("Content-Type", "application/json".to_string()),
        ("Accept", "application/json".to_string()),
        (HEADER_ETHEREUM_ACCOUNT, account.eth_address().to_string()),
        (HEADER_STARKNET_ACCOUNT, account.address().to_string()),
        (HEADER_STARKNET_SIGNATURE, signature.to_header_value()),
        (HEADER_TIMESTAMP, timestamp_ms.to_string()),
    ]
}

/// Headers for POST /auth; timestamp and expiration are Unix seconds.
///
/// Only the target-chain account identifier appears here.
pub fn auth_headers(
    account: &ParadexAccount,
    signature: &StarkSignature,
    timestamp: u64,
    expiration: u64,
) -> Vec<(&'static str, String)> {
    vec![
        ("Content-Type", "application/json".to_string()),
        ("Accept", "application/json".to_string()),
        (HEADER_STARKNET_ACCOUNT, account.address().to_string()),
        (HEADER_STARKNET_SIGNATURE, signature.to_header_value()),
        (HEADER_TIMESTAMP, timestamp.to_string()),
        (HEADER_SIGNATURE_EXPIRATION, expiration.to_string()),
    ]
}
