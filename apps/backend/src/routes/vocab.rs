//! Vocabulary content endpoints (read-only)

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{UnitSummary, VocabUnitResponse};
use crate::AppState;

/// GET /api/vocab/units
pub async fn list_units(State(state): State<AppState>) -> Result<Json<Vec<UnitSummary>>> {
    let units = state.db.list_units().await?;
    Ok(Json(units))
}

/// GET /api/vocab/unit/:number
pub async fn get_unit(
    State(state): State<AppState>,
    Path(number): Path<u32>,
) -> Result<Json<VocabUnitResponse>> {
    let unit = state
        .db
        .get_unit(number)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Unit {} not found", number)))?;

    Ok(Json(unit.to_api_unit()))
}
