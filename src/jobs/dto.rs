use serde::Deserialize;

use crate::error::ApiError;

/// Request body for creating or replacing a job posting.
#[derive(Debug, Deserialize)]
pub struct JobInput {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub category_id: Option<i64>,
    pub created_by: Option<i64>,
}

impl JobInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.is_empty() || self.description.is_empty() || self.company.is_empty() {
            return Err(ApiError::Validation(
                "title, description, and company are required".into(),
            ));
        }
        Ok(())
    }
}
