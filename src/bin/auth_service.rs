use kerjadiluar::{app, state::AuthState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    app::init_tracing();

    let state = AuthState::init().await?;

    if let Err(e) = sqlx::migrate!("./migrations").run(&state.db).await {
        tracing::warn!(error = %e, "migration failed; continuing with existing schema");
    }

    let port = state.config.port;
    tracing::info!(port, "starting auth service");
    app::serve(app::auth_app(state), port).await
}
