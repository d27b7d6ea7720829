// --- File: crates/consultify_admin/src/token.rs ---
//! Stateless admin session tokens.
//!
//! A token is the expiry instant (unix seconds) joined with an HMAC-SHA256
//! signature over it: `<expiry>.<base64url(signature)>`. Verification
//! recomputes the signature, so no server-side session table is needed.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

#[derive(Error, Debug, PartialEq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Token expired")]
    Expired,
}

/// Issues a signed token valid until `now + ttl`.
pub fn issue_token(secret: &str, ttl: Duration, now: DateTime<Utc>) -> (String, DateTime<Utc>) {
    let expires_at = now + ttl;
    let payload = expires_at.timestamp().to_string();
    let signature = sign(secret, &payload);
    (format!("{}.{}", payload, signature), expires_at)
}

/// Checks signature and expiry of a presented token.
pub fn verify_token(secret: &str, token: &str, now: DateTime<Utc>) -> Result<(), TokenError> {
    let (payload, signature) = token.split_once('.').ok_or(TokenError::Malformed)?;
    let expires_at: i64 = payload.parse().map_err(|_| TokenError::Malformed)?;

    // Compare signatures before looking at the expiry
    let expected = sign(secret, payload);
    if !constant_time_eq(signature.as_bytes(), expected.as_bytes()) {
        return Err(TokenError::InvalidSignature);
    }

    if now.timestamp() >= expires_at {
        return Err(TokenError::Expired);
    }
    Ok(())
}

fn sign(secret: &str, payload: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}
