pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;
use progress_core::SrsConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub config: SrsConfig,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Connect to database
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set");

    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let state = AppState {
        db: Arc::new(db),
        config: SrsConfig::default(),
    };

    // Build router with protected routes
    let protected_routes = Router::new()
        // Identity
        .route("/api/auth/me", get(routes::users::me))
        // Progress routes
        .route("/api/progress/my-progress", get(routes::progress::my_progress))
        .route("/api/progress/stats", get(routes::progress::stats))
        .route(
            "/api/progress/practice-words/:unit_number",
            get(routes::progress::practice_words),
        )
        .route(
            "/api/progress/submit-practice",
            post(routes::progress::submit_practice),
        )
        .route(
            "/api/progress/complete-unit",
            post(routes::progress::complete_unit),
        )
        .route(
            "/api/progress/word-progress/:word_id",
            get(routes::progress::word_progress),
        )
        .route("/api/progress/reset-daily", post(routes::progress::reset_daily))
        // History routes
        .route("/api/history", get(routes::history::list))
        .route("/api/history/submit", post(routes::history::submit))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            routes::auth::auth_middleware,
        ));

    // Build full router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/auth/register", post(routes::users::register))
        // Vocabulary content is public; only progress and history are per-user
        .route("/api/vocab/units", get(routes::vocab::list_units))
        .route("/api/vocab/unit/:number", get(routes::vocab::get_unit))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
