/**
 * Token Issuance and Verification
 *
 * This module binds a user identity into a signed JWT and recovers it later.
 * The signing secret is always passed in by the caller; nothing here reads
 * process-wide state.
 *
 * # Token Format
 *
 * HS256 JWT whose payload is `{"id": <user id>}`, plus `exp` when a
 * time-to-live was requested. Without a TTL the same identity and secret
 * always produce the same token.
 */

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::shared::UserId;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User the token was issued to
    pub id: UserId,
    /// Expiration time (Unix timestamp), absent for non-expiring tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

/// Token failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The input is not a token of the expected shape
    #[error("malformed token")]
    MalformedToken,
    /// The token was not signed with the given secret
    #[error("token signature mismatch")]
    SignatureMismatch,
    /// The token carried an `exp` that has passed
    #[error("token expired")]
    Expired,
    /// Encoding failed while issuing a token
    #[error("failed to sign token: {0}")]
    Signing(String),
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    // `exp` is optional; it is still checked when present.
    validation.required_spec_claims = HashSet::new();
    validation
}

fn sign(claims: &Claims, secret: &str) -> Result<String, TokenError> {
    let key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::new(Algorithm::HS256), claims, &key)
        .map_err(|e| TokenError::Signing(e.to_string()))
}

/// Issue a non-expiring token for a user
///
/// # Arguments
/// * `user_id` - Identity to bind
/// * `secret` - Server signing secret
pub fn issue_token(user_id: UserId, secret: &str) -> Result<String, TokenError> {
    sign(&Claims { id: user_id, exp: None }, secret)
}

/// Issue a token that stops verifying after `ttl`
pub fn issue_token_with_ttl(
    user_id: UserId,
    secret: &str,
    ttl: Duration,
) -> Result<String, TokenError> {
    let exp = jsonwebtoken::get_current_timestamp()
        .checked_add(ttl.as_secs())
        .ok_or_else(|| TokenError::Signing(format!("expiry out of range: {}s", ttl.as_secs())))?;
    sign(&Claims { id: user_id, exp: Some(exp) }, secret)
}

/// Verify and decode a token
///
/// Never panics on caller-supplied input; every failure is a `TokenError`.
pub fn decode_claims(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    decode::<Claims>(token, &key, &validation())
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => TokenError::SignatureMismatch,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::MalformedToken,
        })
}

/// Verify a token and return the identity it was issued to
pub fn verify_token(token: &str, secret: &str) -> Result<UserId, TokenError> {
    decode_claims(token, secret).map(|claims| claims.id)
}

/// Signing secret and expiry policy shared by the handlers and the gate
#[derive(Clone)]
pub struct TokenSettings {
    secret: Arc<str>,
    ttl: Option<Duration>,
}

impl TokenSettings {
    /// Settings that issue non-expiring tokens
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Arc::from(secret.into()),
            ttl: None,
        }
    }

    /// Issue tokens that expire `ttl` after issuance
    pub fn with_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    pub fn issue(&self, user_id: UserId) -> Result<String, TokenError> {
        match self.ttl {
            Some(ttl) => issue_token_with_ttl(user_id, &self.secret, ttl),
            None => issue_token(user_id, &self.secret),
        }
    }

    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        verify_token(token, &self.secret)
    }
}

impl std::fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}
