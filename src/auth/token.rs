/**
 * JWT Issuance and Verification
 *
 * This module builds and validates the signed bearer tokens returned by
 * login. Tokens are HS256 JWTs carrying a typed claims structure; the
 * signing secret is loaded once at startup into `AuthKeys` and shared
 * read-only across requests.
 *
 * # Verification Order
 *
 * Verification is strictly parse -> signature -> expiry. jsonwebtoken checks
 * the signature before decoding the payload, and its own expiry validation
 * is disabled so the expiry check runs against the caller-supplied clock
 * after the signature has been trusted. No claim field is read from a token
 * whose signature has not been verified.
 *
 * # Clock
 *
 * `issue_at` / `verify_at` take an explicit timestamp. The `issue` and
 * `verify` wrappers use the real clock; tests and expiry simulations pass
 * their own. There is no clock-skew leeway: a token is valid for
 * `iat <= t < iat + 24h`.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long an issued token stays valid.
pub const TOKEN_VALIDITY_HOURS: i64 = 24;

/// JWT claims structure.
///
/// Tokens whose payload does not deserialize into exactly this shape are
/// rejected as malformed; claims are never read into an untyped map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identity: the user id, stringified
    pub sub: String,
    /// Issued-at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds), always `iat` + 24h
    pub exp: i64,
}

/// Token verification and signing failures.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token could not be parsed into header, claims, and signature,
    /// or its claims do not match the expected shape
    #[error("token is not a well-formed JWT")]
    Malformed,

    /// The signature does not match the claims
    #[error("token signature mismatch")]
    BadSignature,

    /// The token was valid once but its expiry has passed
    #[error("token has expired")]
    Expired,

    /// The signing primitive itself failed; a server fault, not a property
    /// of the presented token
    #[error("token signing failed: {0}")]
    Signing(jsonwebtoken::errors::Error),
}

/// Process-wide signing material, built once at startup from the configured
/// secret. Immutable afterwards, so it is safe to clone into every request
/// handler without synchronization. Rotating the secret invalidates all
/// previously issued tokens.
#[derive(Clone)]
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl AuthKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed token for `subject` as of `now`.
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let iat = now.timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iat,
            exp: iat + Duration::hours(TOKEN_VALIDITY_HOURS).num_seconds(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(TokenError::Signing)
    }

    /// Issue a signed token for `subject` as of the current time.
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Verify a token as of `now` and return its claims.
    ///
    /// # Errors
    ///
    /// * `Malformed` - not parseable as a JWT, or claims of the wrong shape
    /// * `BadSignature` - signature does not match the payload
    /// * `Expired` - signature is valid but `now` is at or past `exp`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against the caller's clock, after the
        // signature has been verified.
        validation.validate_exp = false;

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|err| {
            match err.kind() {
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::Malformed,
            }
        })?;

        if now.timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }

    /// Verify a token as of the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now())
    }
}
