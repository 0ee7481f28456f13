//! PostgreSQL database operations
//!
//! The per-user progress document is stored whole as JSONB with a version
//! column; saves are optimistic and fail with a conflict when the version
//! moved underneath the writer.

use sqlx::{postgres::PgPoolOptions, types::Json, PgPool};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct ProgressRow {
    doc: Json<UserProgress>,
    version: i64,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === User Repository ===

    /// Create a new user with generated token
    pub async fn create_user(&self, username: Option<&str>) -> Result<User> {
        let token = Uuid::new_v4().to_string();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (token, username)
            VALUES ($1, $2)
            RETURNING id, token, username, created_at, last_seen_at
            "#,
        )
        .bind(&token)
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Get user by token
    pub async fn get_user_by_token(&self, token: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, token, username, created_at, last_seen_at
            FROM users
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Update user last_seen_at timestamp
    pub async fn update_last_seen(&self, user_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET last_seen_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // === Progress Document Repository ===

    /// Load a user's progress document with its version
    pub async fn load_progress(&self, user_id: Uuid) -> Result<Option<StoredProgress>> {
        let row = sqlx::query_as::<_, ProgressRow>(
            r#"
            SELECT doc, version
            FROM user_progress
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| StoredProgress {
            progress: r.doc.0,
            version: r.version,
        }))
    }

    /// Insert a fresh progress document at version 1.
    ///
    /// A concurrent first access may have inserted already; that is fine,
    /// the caller re-reads whatever won.
    pub async fn create_progress(&self, progress: &UserProgress) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_progress (user_id, doc)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(progress.user_id)
        .bind(Json(progress))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Save a progress document read at `expected_version`.
    ///
    /// Fails with a conflict when another submission committed in between;
    /// the caller must retry from a fresh read.
    pub async fn save_progress(&self, progress: &UserProgress, expected_version: i64) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE user_progress
            SET doc = $2, version = version + 1, updated_at = NOW()
            WHERE user_id = $1 AND version = $3
            "#,
        )
        .bind(progress.user_id)
        .bind(Json(progress))
        .bind(expected_version)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::Conflict(format!(
                "progress document for user {} changed since read",
                progress.user_id
            )));
        }

        Ok(())
    }

    // === Vocabulary Content Repository (read-only) ===

    /// List all units (number and title only)
    pub async fn list_units(&self) -> Result<Vec<UnitSummary>> {
        let units = sqlx::query_as::<_, UnitSummary>(
            r#"
            SELECT unit_number, title
            FROM vocab_units
            ORDER BY unit_number
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(units)
    }

    /// Get a unit with its full word list
    pub async fn get_unit(&self, unit_number: u32) -> Result<Option<DbVocabUnit>> {
        let unit = sqlx::query_as::<_, DbVocabUnit>(
            r#"
            SELECT unit_number, title, words
            FROM vocab_units
            WHERE unit_number = $1
            "#,
        )
        .bind(unit_number as i32)
        .fetch_optional(&self.pool)
        .await?;

        Ok(unit)
    }

    // === Practice History Repository ===

    /// Insert a practice-session result
    pub async fn insert_practice_result(
        &self,
        user_id: Uuid,
        result: &HistorySubmitRequest,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO practice_results (user_id, unit_number, total, correct, wrong, percentage)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user_id)
        .bind(result.unit_number as i32)
        .bind(result.total as i32)
        .bind(result.correct as i32)
        .bind(result.wrong as i32)
        .bind(result.percentage as i32)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get a user's most recent practice results, newest first
    pub async fn get_history(&self, user_id: Uuid, limit: i64) -> Result<Vec<DbPracticeResult>> {
        let results = sqlx::query_as::<_, DbPracticeResult>(
            r#"
            SELECT id, user_id, unit_number, total, correct, wrong, percentage, created_at
            FROM practice_results
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(results)
    }
}
