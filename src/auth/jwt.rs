use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::state::AuthState;

/// Tokens expire 24 hours after issuance; there is no revocation state,
/// a leaked token stays valid until then.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Signed claim set: subject identifier plus expiry (unix seconds).
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub exp: usize,
}

/// HMAC-SHA256 signing and verification keys derived from the configured
/// secret. Obtained from state via `FromRef`, never from a global.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl FromRef<AuthState> for JwtKeys {
    fn from_ref(state: &AuthState) -> Self {
        Self::from_secret(&state.config.jwt_secret)
    }
}

impl JwtKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn sign(&self, user_id: i64) -> anyhow::Result<String> {
        let exp = OffsetDateTime::now_utc() + Duration::hours(TOKEN_TTL_HOURS);
        let claims = Claims {
            user_id,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id, "jwt signed");
        Ok(token)
    }

    /// Rejects bad signatures, expired tokens, malformed structure and
    /// non-numeric subjects. The distinct causes matter only for logging;
    /// the HTTP layer collapses them all into one 401.
    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        debug!(user_id = data.claims.user_id, "jwt verified");
        Ok(data.claims)
    }
}
