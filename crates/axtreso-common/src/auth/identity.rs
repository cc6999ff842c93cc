//! Identity tokens from the external identity provider
//!
//! Administrators sign in through an external provider that hands the
//! client an HS256 JWT signed with a secret shared with this service.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Claims asserted by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub open_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub exp: i64,
}

/// Verifies (and, for tooling, signs) identity tokens
#[derive(Clone)]
pub struct IdentityTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl IdentityTokens {
    #[must_use]
    pub fn new(provider_secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(provider_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(provider_secret.as_bytes()),
        }
    }

    /// Verify a provider token
    ///
    /// # Errors
    /// Returns `TokenExpired` or `InvalidToken`; an empty `open_id` is invalid
    pub fn verify(&self, token: &str) -> Result<IdentityClaims, AppError> {
        let claims = decode::<IdentityClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })?;

        if claims.open_id.trim().is_empty() {
            return Err(AppError::InvalidToken);
        }
        Ok(claims)
    }

    /// Sign an identity token valid for `ttl_seconds`
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn sign(
        &self,
        open_id: &str,
        name: Option<&str>,
        email: Option<&str>,
        ttl_seconds: i64,
    ) -> Result<String, AppError> {
        let claims = IdentityClaims {
            open_id: open_id.to_string(),
            name: name.map(String::from),
            email: email.map(String::from),
            exp: (Utc::now() + Duration::seconds(ttl_seconds)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode identity token: {e}")))
    }
}

impl std::fmt::Debug for IdentityTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityTokens").finish_non_exhaustive()
    }
}
