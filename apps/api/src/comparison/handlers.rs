//! Axum route handler for the compare flow.

use axum::{extract::State, Json};

use crate::comparison::compare::{compare, CompareRequest, ComparisonResult};
use crate::errors::{AppError, AppJson};
use crate::state::AppState;

/// POST /api/analyze
///
/// Resolves both companies and returns them side by side with scorecards and
/// the per-category breakdown.
pub async fn handle_analyze(
    State(state): State<AppState>,
    AppJson(request): AppJson<CompareRequest>,
) -> Result<Json<ComparisonResult>, AppError> {
    let result = compare(&state.resolver, &request, state.config.cache_hit_delay).await?;
    Ok(Json(result))
}
