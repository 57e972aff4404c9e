/*
[INPUT]:  Ethereum address, Stark private key, Paradex account address
[OUTPUT]: Immutable account value with cached derived public key
[POS]:    Auth layer - account identity and key derivation
[UPDATE]: When key normalization or derivation changes
*/

use starknet_core::types::Felt;
use starknet_crypto::get_public_key;

use crate::http::{ParadexError, Result};

/// Account identity used throughout the auth flow
///
/// Constructed once, read-only afterwards. The Stark public key is derived at
/// construction and cached for the account's lifetime.
#[derive(Debug, Clone)]
pub struct ParadexAccount {
    eth_address: String,
    address: String,
    address_felt: Felt,
    private_key: Felt,
    public_key: String,
}

impl ParadexAccount {
    /// Create an account from configured identifiers.
    ///
    /// The private key accepts hex with or without a `0x` prefix; a malformed
    /// or zero scalar is rejected with `InvalidKey`.
    pub fn new(eth_address: &str, private_key_hex: &str, paradex_address: &str) -> Result<Self> {
        let private_key = parse_key_scalar(private_key_hex)?;
        if private_key == Felt::ZERO {
            return Err(ParadexError::InvalidKey(
                "private key scalar is zero".to_string(),
            ));
        }

        let address_felt = parse_key_scalar(paradex_address)
            .map_err(|e| ParadexError::InvalidKey(format!("account address: {e}")))?;

        let public_key = format!("{:#x}", get_public_key(&private_key));

        Ok(Self {
            eth_address: eth_address.trim().to_string(),
            address: paradex_address.trim().to_string(),
            address_felt,
            private_key,
            public_key,
        })
    }

    /// The source-chain (Ethereum) account address
    pub fn eth_address(&self) -> &str {
        &self.eth_address
    }

    /// The Paradex (Starknet) account address as configured
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The account address as a field element, for typed-data binding
    pub(crate) fn address_felt(&self) -> Felt {
        self.address_felt
    }

    pub(crate) fn private_key(&self) -> &Felt {
        &self.private_key
    }

    /// Derived Stark public key, 0x-prefixed hex (exactly one prefix)
    pub fn public_key(&self) -> &str {
        &self.public_key
    }
}

/// Normalize a hex scalar: strip at most one `0x`/`0X` prefix, then parse
fn parse_key_scalar(hex: &str) -> Result<Felt> {
    let trimmed = hex.trim();
    let stripped = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    Felt::from_hex(&format!("0x{stripped}"))
        .map_err(|e| ParadexError::InvalidKey(format!("not a valid hex scalar: {e}")))
}
