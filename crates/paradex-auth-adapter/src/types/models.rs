/*
[INPUT]:  Remote chain parameters
[OUTPUT]: Domain models used across the auth flow
[POS]:    Data layer - internal models
[UPDATE]: When signing parameters change
*/

use starknet_core::types::Felt;

/// Chain parameters fetched per authentication attempt; not persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig {
    /// Short-string felt encoding of the remote chain id
    pub chain_id: Felt,
}
