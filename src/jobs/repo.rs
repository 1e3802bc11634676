use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use super::dto::JobInput;

/// Job posting row. Optional columns serialize as JSON null.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub category_id: Option<i64>,
    pub created_by: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

pub async fn list(db: &PgPool) -> anyhow::Result<Vec<Job>> {
    let jobs = sqlx::query_as::<_, Job>(
        r#"
        SELECT id, title, description, company, location, salary,
               category_id, created_by, created_at, updated_at
        FROM jobs
        ORDER BY id DESC
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(jobs)
}

pub async fn find_by_id(db: &PgPool, id: i64) -> anyhow::Result<Option<Job>> {
    let job = sqlx::query_as::<_, Job>(
        r#"
        SELECT id, title, description, company, location, salary,
               category_id, created_by, created_at, updated_at
        FROM jobs
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(job)
}

pub async fn create(db: &PgPool, input: &JobInput) -> anyhow::Result<Job> {
    let job = sqlx::query_as::<_, Job>(
        r#"
        INSERT INTO jobs (title, description, company, location, salary, category_id, created_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, title, description, company, location, salary,
                  category_id, created_by, created_at, updated_at
        "#,
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.company)
    .bind(&input.location)
    .bind(&input.salary)
    .bind(input.category_id)
    .bind(input.created_by)
    .fetch_one(db)
    .await?;
    Ok(job)
}

/// Full replace; `created_by` is immutable after creation. Returns `None`
/// when no row has that id.
pub async fn update(db: &PgPool, id: i64, input: &JobInput) -> anyhow::Result<Option<Job>> {
    let job = sqlx::query_as::<_, Job>(
        r#"
        UPDATE jobs
        SET title = $1, description = $2, company = $3, location = $4,
            salary = $5, category_id = $6, updated_at = NOW()
        WHERE id = $7
        RETURNING id, title, description, company, location, salary,
                  category_id, created_by, created_at, updated_at
        "#,
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.company)
    .bind(&input.location)
    .bind(&input.salary)
    .bind(input.category_id)
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(job)
}

/// Returns whether a row was actually deleted.
pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<bool> {
    let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_by_category(db: &PgPool, category_id: i64) -> anyhow::Result<Vec<Job>> {
    let jobs = sqlx::query_as::<_, Job>(
        r#"
        SELECT id, title, description, company, location, salary,
               category_id, created_by, created_at, updated_at
        FROM jobs
        WHERE category_id = $1
        ORDER BY id DESC
        "#,
    )
    .bind(category_id)
    .fetch_all(db)
    .await?;
    Ok(jobs)
}
