/*
[INPUT]:  Account credentials and HTTP client
[OUTPUT]: Session token or a definitive failure
[POS]:    Auth layer - orchestrates the onboarding + auth handshake
[UPDATE]: When auth endpoints or flow steps change
*/

use chrono::Utc;
use reqwest::Method;
use tracing::{error, info, warn};

use crate::auth::token::TOKEN_EXPIRY_SECONDS;
use crate::auth::{ParadexAccount, SessionToken, TokenStore, TypedMessage, headers, typed_data};
use crate::http::{ParadexClient, ParadexError, Result};
use crate::types::{AuthResponse, OnboardingRequest};

/// Terminal outcomes of a successful flow invocation; failures are `Err`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// A usable session token was obtained
    Success(SessionToken),
    /// The venue does not know this account; caller should restart the flow
    /// from onboarding if a retry is desired (never looped internally)
    NeedsOnboarding,
}

/// Drives the two-step handshake: onboard-if-needed, then obtain a token.
///
/// Each invocation is stateless apart from the immutable account; the flow
/// terminates in at most two network round-trips per phase.
#[derive(Debug)]
pub struct AuthFlow {
    client: ParadexClient,
    account: ParadexAccount,
    tokens: TokenStore,
}

impl AuthFlow {
    /// Create a flow over an explicit configuration; the flow itself never
    /// reads ambient environment
    pub fn new(client: ParadexClient, account: ParadexAccount) -> Self {
        Self {
            client,
            account,
            tokens: TokenStore::new(),
        }
    }

    pub fn account(&self) -> &ParadexAccount {
        &self.account
    }

    pub fn token_store(&self) -> &TokenStore {
        &self.tokens
    }

    /// Register the account's public key with the venue.
    ///
    /// POST /onboarding
    ///
    /// Re-onboarding an already-registered account is harmless; the remote's
    /// "already registered" rejection is treated as success.
    pub async fn onboard(&self) -> Result<()> {
        let config = self.client.get_system_config().await?;

        let timestamp_ms = Utc::now().timestamp_millis() as u64;
        let signature = typed_data::sign(&self.account, config.chain_id, &TypedMessage::Onboarding)?;

        let body = OnboardingRequest {
            public_key: self.account.public_key().to_string(),
        };

        let mut builder = self.client.api_request(Method::POST, "/onboarding")?;
        for (name, value) in headers::onboarding_headers(&self.account, &signature, timestamp_ms) {
            builder = builder.header(name, value);
        }

        match self.client.send_ok(builder.json(&body)).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_already_onboarded() => {
                info!(account = %self.account.address(), "account already onboarded");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Obtain a short-lived session token.
    ///
    /// POST /auth (empty body)
    ///
    /// A rejection meaning "account unknown" is classified here, once, into
    /// `ParadexError::NeedsOnboarding`.
    pub async fn request_token(&self) -> Result<SessionToken> {
        let config = self.client.get_system_config().await?;

        let timestamp = Utc::now().timestamp() as u64;
        let expiration = timestamp + TOKEN_EXPIRY_SECONDS as u64;
        let signature = typed_data::sign(
            &self.account,
            config.chain_id,
            &TypedMessage::AuthRequest {
                timestamp,
                expiration,
            },
        )?;

        let mut builder = self.client.api_request(Method::POST, "/auth")?;
        for (name, value) in
            headers::auth_headers(&self.account, &signature, timestamp, expiration)
        {
            builder = builder.header(name, value);
        }

        let response: AuthResponse = match self.client.send_json(builder).await {
            Ok(response) => response,
            Err(e) if e.is_not_onboarded() => return Err(ParadexError::NeedsOnboarding),
            Err(e) => return Err(e),
        };

        Ok(self.tokens.set_token(response.jwt_token, expiration))
    }

    /// Run the full handshake.
    ///
    /// Onboarding failure is non-fatal (the account may already be onboarded
    /// from a prior run) except for cryptographic and config errors, which
    /// cannot succeed on the next phase either.
    pub async fn authenticate(&self) -> Result<AuthOutcome> {
        info!(transition = "Start", account = %self.account.address());

        match self.onboard().await {
            Ok(()) => info!(transition = "OnboardingAttempted", outcome = "ok"),
            Err(e) if e.is_fatal() => {
                error!(transition = "Failed", phase = "onboarding", error = %e);
                return Err(e);
            }
            Err(e @ ParadexError::ConfigUnavailable(_)) => {
                error!(transition = "Failed", phase = "onboarding", error = %e);
                return Err(e);
            }
            Err(e) => {
                warn!(
                    transition = "OnboardingAttempted",
                    outcome = "error",
                    error = %e,
                    "onboarding failed, attempting authentication regardless"
                );
            }
        }

        info!(transition = "TokenRequested");
        match self.request_token().await {
            Ok(session) => {
                info!(
                    transition = "Success",
                    usable_until = %session.usable_until
                );
                Ok(AuthOutcome::Success(session))
            }
            Err(ParadexError::NeedsOnboarding) => {
                warn!(transition = "TokenRequested", outcome = "needs_onboarding");
                Ok(AuthOutcome::NeedsOnboarding)
            }
            Err(e) => {
                error!(transition = "Failed", phase = "auth", error = %e);
                Err(e)
            }
        }
    }
}
