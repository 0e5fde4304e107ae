pub mod analytics;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::company::handlers as company;
use crate::comparison::handlers as comparison;
use crate::leads::handlers as leads;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Compare flow
        .route("/api/analyze", post(comparison::handle_analyze))
        .route("/api/analyze/refresh", post(company::handle_refresh_company))
        // Lead capture
        .route("/api/submit-form", post(leads::handle_submit_form))
        .route("/api/analytics", post(analytics::analytics_handler))
        // Stored data
        .route("/api/companies", get(company::handle_list_companies))
        .route("/api/submissions", get(company::handle_list_submissions))
        .with_state(state)
}
