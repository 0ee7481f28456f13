//! Practice history endpoints

use axum::{extract::State, Extension, Json};

use crate::error::Result;
use crate::models::{HistoryResponse, HistorySubmitRequest};
use crate::routes::auth::AuthenticatedUser;
use crate::AppState;

const HISTORY_LIMIT: i64 = 50;

/// POST /api/history/submit
pub async fn submit(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(payload): Json<HistorySubmitRequest>,
) -> Result<Json<serde_json::Value>> {
    state
        .db
        .insert_practice_result(auth.user_id, &payload)
        .await?;

    Ok(Json(serde_json::json!({ "saved": true })))
}

/// GET /api/history
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<HistoryResponse>> {
    let results = state.db.get_history(auth.user_id, HISTORY_LIMIT).await?;
    Ok(Json(HistoryResponse { results }))
}
