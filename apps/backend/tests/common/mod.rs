//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up test environment with database
//! - Helper functions for creating test users and seeding vocabulary
//! - Authentication helpers
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL env var).

pub mod fixtures;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::types::Json;
use uuid::Uuid;

use ielts_practice_backend::db::Database;
use ielts_practice_backend::models::VocabWord;
use ielts_practice_backend::routes;
use ielts_practice_backend::AppState;
use progress_core::SrsConfig;

/// Test context containing database connection and test server.
///
/// Use this to set up integration tests with a real database connection.
/// Requires DATABASE_URL environment variable to be set.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);

        let state = AppState {
            db: db.clone(),
            config: SrsConfig::default(),
        };

        let app = build_test_router(state);

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Create a test user and return its ID and token.
    pub async fn create_test_user(&self, username: Option<&str>) -> (Uuid, String) {
        let user = self
            .db
            .create_user(username)
            .await
            .expect("Failed to create test user");
        (user.id, user.token)
    }

    /// Format authorization header value.
    pub fn auth_header_value(token: &str) -> String {
        format!("Bearer {}", token)
    }

    /// Seed a vocabulary unit with the given words.
    pub async fn seed_unit(&self, unit_number: u32, title: &str, words: &[VocabWord]) {
        sqlx::query(
            r#"
            INSERT INTO vocab_units (unit_number, title, words)
            VALUES ($1, $2, $3)
            ON CONFLICT (unit_number) DO UPDATE SET
                title = EXCLUDED.title,
                words = EXCLUDED.words,
                updated_at = NOW()
            "#,
        )
        .bind(unit_number as i32)
        .bind(title)
        .bind(Json(words))
        .execute(self.db.pool())
        .await
        .expect("Failed to seed vocab unit");
    }

    /// Remove a seeded vocabulary unit.
    pub async fn cleanup_unit(&self, unit_number: u32) {
        let _ = sqlx::query("DELETE FROM vocab_units WHERE unit_number = $1")
            .bind(unit_number as i32)
            .execute(self.db.pool())
            .await;
    }

    /// Clean up test data for a user.
    ///
    /// Call this after tests to remove test data.
    pub async fn cleanup_user(&self, user_id: Uuid) {
        // Delete in order due to foreign keys
        let _ = sqlx::query("DELETE FROM practice_results WHERE user_id = $1")
            .bind(user_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM user_progress WHERE user_id = $1")
            .bind(user_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(self.db.pool())
            .await;
    }
}

/// Build the test router with all routes.
fn build_test_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/api/auth/me", get(routes::users::me))
        .route(
            "/api/progress/my-progress",
            get(routes::progress::my_progress),
        )
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
        .route(
            "/api/progress/reset-daily",
            post(routes::progress::reset_daily),
        )
        .route("/api/history", get(routes::history::list))
        .route("/api/history/submit", post(routes::history::submit))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            routes::auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/auth/register", post(routes::users::register))
        .route("/api/vocab/units", get(routes::vocab::list_units))
        .route("/api/vocab/unit/:number", get(routes::vocab::get_unit))
        .merge(protected_routes)
        .with_state(state)
}
