use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use super::jwt::JwtKeys;
use crate::error::ApiError;

/// Extracts and verifies the bearer token, yielding the authenticated
/// user ID. Authentication only; no role checks.
#[derive(Debug)]
pub struct AuthUser(pub i64);

/// Accepts exactly `Bearer <token>`: literal scheme, single space, two
/// parts, non-empty token.
fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                warn!("missing Authorization header");
                ApiError::Unauthorized
            })?;

        let token = bearer_token(header).ok_or_else(|| {
            warn!("malformed Authorization header");
            ApiError::Unauthorized
        })?;

        // Cause stays in the log; the client sees the same 401 as any
        // other auth failure.
        let claims = keys.verify(token).map_err(|e| {
            warn!(error = %e, "token rejected");
            ApiError::Unauthorized
        })?;

        Ok(AuthUser(claims.user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AuthState;
    use axum::http::{header, Request};

    #[test]
    fn bearer_token_requires_exact_shape() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("bearer abc"), None);
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Bearer a b"), None);
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token(""), None);
    }

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/users/1");
        if let Some(v) = value {
            builder = builder.header(header::AUTHORIZATION, v);
        }
        builder.body(()).expect("request").into_parts().0
    }

    #[tokio::test]
    async fn extracts_subject_from_valid_token() {
        let state = AuthState::fake();
        let keys = JwtKeys::from_ref(&state);
        let token = keys.sign(42).expect("sign");
        let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));
        let AuthUser(user_id) = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .expect("extract");
        assert_eq!(user_id, 42);
    }

    #[tokio::test]
    async fn rejects_missing_header() {
        let state = AuthState::fake();
        let mut parts = parts_with_auth(None);
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn rejects_wrong_scheme() {
        let state = AuthState::fake();
        let keys = JwtKeys::from_ref(&state);
        let token = keys.sign(42).expect("sign");
        let mut parts = parts_with_auth(Some(&format!("Token {token}")));
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn rejects_token_signed_with_other_secret() {
        let state = AuthState::fake();
        let token = JwtKeys::from_secret("another-secret").sign(42).expect("sign");
        let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }
}
