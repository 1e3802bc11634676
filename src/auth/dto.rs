use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Transient login credentials; never persisted, never logged.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Public part of the user returned to clients. No password material.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
