/*
[INPUT]:  Account configuration and chain parameters
[OUTPUT]: Typed-data signatures, protocol headers, and session tokens
[POS]:    Auth layer - handles Paradex API authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod account;
pub mod flow;
pub mod headers;
pub mod token;
pub mod typed_data;

pub use account::ParadexAccount;
pub use flow::{AuthFlow, AuthOutcome};
pub use token::{SessionToken, TokenStore};
pub use typed_data::{StarkSignature, TypedMessage};
