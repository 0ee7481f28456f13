//! User registration and identity endpoints

use axum::{extract::State, Extension, Json};

use crate::error::Result;
use crate::models::{MeResponse, RegisterRequest, RegisterResponse};
use crate::routes::auth::AuthenticatedUser;
use crate::AppState;

/// POST /api/auth/register
/// Creates a new user and returns the token
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<Option<RegisterRequest>>,
) -> Result<Json<RegisterResponse>> {
    let username = payload.and_then(|p| p.username);
    let user = state.db.create_user(username.as_deref()).await?;

    tracing::info!("Registered new user: {}", user.id);

    Ok(Json(RegisterResponse {
        user_id: user.id,
        token: user.token,
    }))
}

/// GET /api/auth/me
/// Returns the authenticated user's identity
pub async fn me(
    Extension(auth): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> Result<Json<MeResponse>> {
    let user = state
        .db
        .get_user_by_token(&auth.token)
        .await?
        .ok_or_else(|| crate::error::ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(MeResponse {
        user_id: user.id,
        username: user.username,
        last_seen_at: user.last_seen_at,
    }))
}
