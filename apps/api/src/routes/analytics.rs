use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppJson;

/// POST /api/analytics
/// Logs an arbitrary client-side event. Nothing is stored.
pub async fn analytics_handler(AppJson(event): AppJson<Value>) -> Json<Value> {
    info!(received_at = %Utc::now().to_rfc3339(), "Analytics event received: {event}");
    Json(json!({ "success": true }))
}
