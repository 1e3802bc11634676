use anyhow::Context;

/// Configuration for the auth service. `DATABASE_URL` and `JWT_SECRET`
/// are required; startup aborts without them (no silent dev fallback).
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
}

impl AuthConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL not set")?;
        let jwt_secret = std::env::var("JWT_SECRET").context("JWT_SECRET not set")?;
        let port = std::env::var("AUTH_SERVICE_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8001);
        Ok(Self {
            database_url,
            jwt_secret,
            port,
        })
    }
}

/// Configuration for the job service.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub database_url: String,
    pub port: u16,
}

impl JobConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL not set")?;
        let port = std::env::var("JOB_SERVICE_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8002);
        Ok(Self { database_url, port })
    }
}
