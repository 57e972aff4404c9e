/*
[INPUT]:  Account identifiers and derived keys
[OUTPUT]: Serializable request bodies
[POS]:    Data layer - outbound wire types
[UPDATE]: When request schemas change
*/

use serde::{Deserialize, Serialize};

/// Body of POST /onboarding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingRequest {
    /// Derived Stark public key, 0x-prefixed hex
    pub public_key: String,
}
