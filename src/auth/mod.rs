use crate::state::AuthState;
use axum::Router;

pub mod dto;
pub(crate) mod extractors;
pub mod handlers;
pub mod jwt;
pub mod password;
pub mod repo;

pub fn router() -> Router<AuthState> {
    handlers::auth_routes()
}
