use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, PublicUser, RegisterRequest, TokenResponse},
        extractors::AuthUser,
        jwt::JwtKeys,
        password::{hash_password, verify_dummy, verify_password},
        repo::User,
    },
    error::ApiError,
    state::AuthState,
};

pub fn auth_routes() -> Router<AuthState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/users/:id", get(get_user))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AuthState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    if payload.name.is_empty() || payload.email.is_empty() || payload.password.is_empty() {
        warn!("register with missing fields");
        return Err(ApiError::Validation(
            "name, email, and password are required".into(),
        ));
    }

    let hash = hash_password(&payload.password).map_err(|e| {
        error!(error = %e, "hash_password failed");
        ApiError::Internal(e)
    })?;

    // Duplicate email surfaces as a store error; it is deliberately not
    // distinguished from any other persistence failure.
    let user = User::create(&state.db, &payload.name, &payload.email, &hash)
        .await
        .map_err(|e| {
            error!(error = %e, "create user failed");
            ApiError::Internal(e)
        })?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(PublicUser {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AuthState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation("email and password are required".into()));
    }

    // Unknown email, store failure and wrong password all collapse into
    // the same opaque 401 so emails cannot be enumerated. The no-user
    // branches still pay for a hash verification to keep latency level.
    let user = match User::find_by_email(&state.db, &payload.email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            warn!(email = %payload.email, "login unknown email");
            verify_dummy(&payload.password);
            return Err(ApiError::Unauthorized);
        }
        Err(e) => {
            warn!(error = %e, "find_by_email failed during login");
            verify_dummy(&payload.password);
            return Err(ApiError::Unauthorized);
        }
    };

    if !verify_password(&payload.password, &user.password_hash) {
        warn!(user_id = user.id, "login invalid password");
        return Err(ApiError::Unauthorized);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id).map_err(|e| {
        error!(error = %e, "jwt sign failed");
        ApiError::Internal(e)
    })?;

    info!(user_id = user.id, "user logged in");
    Ok(Json(TokenResponse { token }))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AuthState>,
    AuthUser(_caller_id): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    // Non-numeric IDs get the same 404 as a missing row.
    let id: i64 = id.parse().map_err(|_| ApiError::NotFound("user"))?;
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AuthState;

    #[tokio::test]
    async fn register_rejects_empty_fields_before_touching_the_store() {
        let state = AuthState::fake();
        for (name, email, password) in [
            ("", "ann@x.com", "secret123"),
            ("Ann", "", "secret123"),
            ("Ann", "ann@x.com", ""),
        ] {
            let err = register(
                State(state.clone()),
                Json(RegisterRequest {
                    name: name.into(),
                    email: email.into(),
                    password: password.into(),
                }),
            )
            .await
            .unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn login_rejects_empty_fields() {
        let state = AuthState::fake();
        let err = login(
            State(state),
            Json(LoginRequest {
                email: String::new(),
                password: String::new(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn login_store_failure_is_an_opaque_401() {
        // The fake state's lazy pool cannot reach a database, so the
        // lookup errors; that path runs the dummy hash verification and
        // must still look exactly like bad credentials.
        let state = AuthState::fake();
        let err = login(
            State(state),
            Json(LoginRequest {
                email: "ann@x.com".into(),
                password: "secret123".into(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }
}
