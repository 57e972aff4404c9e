/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Paradex auth adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    AuthFlow,
    AuthOutcome,
    ParadexAccount,
    SessionToken,
    StarkSignature,
    TokenStore,
    TypedMessage,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    ParadexClient,
    ParadexError,
    Result,
};

// Re-export all wire types
pub use types::*;
