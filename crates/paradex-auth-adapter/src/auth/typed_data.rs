/*
[INPUT]:  Account, chain id, and message variant
[OUTPUT]: Stark ECDSA signature over the domain-separated message hash
[POS]:    Auth layer - typed-data hashing and signing
[UPDATE]: When the signed schemas or hash construction change
*/

use starknet_core::crypto::{compute_hash_on_elements, ecdsa_sign};
use starknet_core::types::Felt;
use starknet_core::utils::{cairo_short_string_to_felt, starknet_keccak};

use crate::auth::ParadexAccount;
use crate::http::{ParadexError, Result};

/// Domain parameters shared by both signed schemas
const DOMAIN_NAME: &str = "Paradex";
const DOMAIN_TYPE: &str = "StarkNetDomain(name:felt,chainId:felt,version:felt)";

/// Prefix binding the hash to the Starknet off-chain message convention
const MESSAGE_PREFIX: &str = "StarkNet Message";

const ONBOARDING_TYPE: &str = "Constant(action:felt)";
const ONBOARDING_ACTION: &str = "Onboarding";

const AUTH_REQUEST_TYPE: &str =
    "Request(method:felt,path:felt,body:felt,timestamp:felt,expiration:felt)";
/// Protocol constants for the auth request: the server reconstructs the same
/// message from the HTTP request it receives, so these are not caller-supplied
const AUTH_METHOD: &str = "POST";
const AUTH_PATH: &str = "/v1/auth";

/// The two signed message variants; each has a fixed field set and ordering
/// because the hash is sensitive to structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedMessage {
    /// One-time account registration: `{action: "Onboarding"}`
    Onboarding,
    /// Session-token request bound to a validity window (Unix seconds)
    AuthRequest { timestamp: u64, expiration: u64 },
}

/// Stark ECDSA signature as the wire protocol expects it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarkSignature {
    r: Felt,
    s: Felt,
}

impl StarkSignature {
    pub fn r(&self) -> Felt {
        self.r
    }

    pub fn s(&self) -> Felt {
        self.s
    }

    /// Serialize as a JSON array of two decimal strings, e.g. `["123","456"]`
    pub fn to_header_value(&self) -> String {
        serde_json::json!([self.r.to_string(), self.s.to_string()]).to_string()
    }
}

/// Sign a typed message with the account's private key.
///
/// Produced fresh per request; never cached, since timestamps make every hash
/// distinct.
pub fn sign(
    account: &ParadexAccount,
    chain_id: Felt,
    message: &TypedMessage,
) -> Result<StarkSignature> {
    let hash = message_hash(account.address_felt(), chain_id, message)?;
    let signature = ecdsa_sign(account.private_key(), &hash)
        .map_err(|e| ParadexError::Signing(e.to_string()))?;
    Ok(StarkSignature {
        r: signature.r,
        s: signature.s,
    })
}

/// Domain-separated message hash, bound to the signer's account address
pub(crate) fn message_hash(
    account_address: Felt,
    chain_id: Felt,
    message: &TypedMessage,
) -> Result<Felt> {
    // The domain version is the numeric string "1", encoded as one, not as a
    // short string.
    let domain_hash = struct_hash(
        DOMAIN_TYPE,
        &[short_string(DOMAIN_NAME)?, chain_id, Felt::ONE],
    );

    let body_hash = match message {
        TypedMessage::Onboarding => {
            struct_hash(ONBOARDING_TYPE, &[short_string(ONBOARDING_ACTION)?])
        }
        TypedMessage::AuthRequest {
            timestamp,
            expiration,
        } => struct_hash(
            AUTH_REQUEST_TYPE,
            &[
                short_string(AUTH_METHOD)?,
                short_string(AUTH_PATH)?,
                Felt::ZERO, // empty request body encodes to zero
                Felt::from(*timestamp),
                Felt::from(*expiration),
            ],
        ),
    };

    Ok(compute_hash_on_elements(&[
        short_string(MESSAGE_PREFIX)?,
        domain_hash,
        account_address,
        body_hash,
    ]))
}

/// Pedersen chain over the type hash followed by the encoded field values
fn struct_hash(type_string: &str, fields: &[Felt]) -> Felt {
    let mut elements = Vec::with_capacity(fields.len() + 1);
    elements.push(starknet_keccak(type_string.as_bytes()));
    elements.extend_from_slice(fields);
    compute_hash_on_elements(&elements)
}

fn short_string(value: &str) -> Result<Felt> {
    cairo_short_string_to_felt(value)
        .map_err(|e| ParadexError::Signing(format!("short string {value:?}: {e}")))
}
