use crate::state::JobState;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<JobState> {
    handlers::job_routes()
}
