use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::{info, instrument};

use super::{dto::JobInput, repo};
use crate::{error::ApiError, state::JobState};

pub fn job_routes() -> Router<JobState> {
    Router::new()
        .route("/jobs", get(list_jobs).post(create_job))
        .route(
            "/jobs/:id",
            get(get_job).put(update_job).delete(delete_job),
        )
        .route("/jobs/category/:category_id", get(list_jobs_by_category))
}

#[instrument(skip(state))]
pub async fn list_jobs(State(state): State<JobState>) -> Result<Json<Vec<repo::Job>>, ApiError> {
    let jobs = repo::list(&state.db).await?;
    Ok(Json(jobs))
}

#[instrument(skip(state))]
pub async fn get_job(
    State(state): State<JobState>,
    Path(id): Path<i64>,
) -> Result<Json<repo::Job>, ApiError> {
    let job = repo::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("job"))?;
    Ok(Json(job))
}

#[instrument(skip(state, payload))]
pub async fn create_job(
    State(state): State<JobState>,
    Json(payload): Json<JobInput>,
) -> Result<(StatusCode, Json<repo::Job>), ApiError> {
    payload.validate()?;
    let job = repo::create(&state.db, &payload).await?;
    info!(job_id = job.id, company = %job.company, "job created");
    Ok((StatusCode::CREATED, Json(job)))
}

#[instrument(skip(state, payload))]
pub async fn update_job(
    State(state): State<JobState>,
    Path(id): Path<i64>,
    Json(payload): Json<JobInput>,
) -> Result<Json<repo::Job>, ApiError> {
    payload.validate()?;
    let job = repo::update(&state.db, id, &payload)
        .await?
        .ok_or(ApiError::NotFound("job"))?;
    info!(job_id = job.id, "job updated");
    Ok(Json(job))
}

#[instrument(skip(state))]
pub async fn delete_job(
    State(state): State<JobState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !repo::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("job"));
    }
    info!(job_id = id, "job deleted");
    Ok(Json(json!({ "message": "job deleted" })))
}

#[instrument(skip(state))]
pub async fn list_jobs_by_category(
    State(state): State<JobState>,
    Path(category_id): Path<i64>,
) -> Result<Json<Vec<repo::Job>>, ApiError> {
    let jobs = repo::list_by_category(&state.db, category_id).await?;
    Ok(Json(jobs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn job_serializes_optional_columns_as_null() {
        let job = repo::Job {
            id: 3,
            title: "Backend Engineer".into(),
            description: "Build APIs".into(),
            company: "Acme".into(),
            location: None,
            salary: None,
            category_id: Some(2),
            created_by: None,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["location"], serde_json::Value::Null);
        assert_eq!(json["category_id"], 2);
        assert_eq!(json["id"], 3);
    }
}
