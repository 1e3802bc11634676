use std::net::SocketAddr;
use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::state::{AuthState, JobState};
use crate::{auth, jobs};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "kerjadiluar=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

pub fn auth_app(state: AuthState) -> Router {
    with_layers(
        Router::new()
            .merge(auth::router())
            .route("/ping", get(ping))
            .with_state(state),
    )
}

pub fn job_app(state: JobState) -> Router {
    with_layers(
        Router::new()
            .merge(jobs::router())
            .route("/ping", get(ping))
            .with_state(state),
    )
}

async fn ping() -> &'static str {
    "pong"
}

fn with_layers(router: Router) -> Router {
    router
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri, status = tracing::field::Empty)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
}

pub async fn serve(app: Router, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
