//! Axum route handlers for the stored-company and submissions views.

use std::cmp::Reverse;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::company::models::CompanyRecord;
use crate::company::resolver::RecordSource;
use crate::errors::{AppError, AppJson};
use crate::state::AppState;

const NO_EMAIL: &str = "No email provided";

#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub company_name: String,
    pub email: String,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct SubmissionsResponse {
    pub submissions: Vec<Submission>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub company: CompanyRecord,
    pub source: RecordSource,
}

/// GET /api/companies
pub async fn handle_list_companies(State(state): State<AppState>) -> Json<CompanyListResponse> {
    let companies: Vec<String> = state.store.list().await.into_keys().collect();
    Json(CompanyListResponse {
        count: companies.len(),
        companies,
    })
}

/// GET /api/submissions
///
/// Every stored company with its contact email, newest first.
pub async fn handle_list_submissions(State(state): State<AppState>) -> Json<SubmissionsResponse> {
    let mut submissions: Vec<Submission> = state
        .store
        .list()
        .await
        .into_iter()
        .map(|(name, record)| Submission {
            company_name: name,
            email: record.email.unwrap_or_else(|| NO_EMAIL.to_string()),
            timestamp: record.timestamp,
        })
        .collect();
    submissions.sort_by_key(|s| Reverse(s.timestamp));

    Json(SubmissionsResponse {
        count: submissions.len(),
        submissions,
    })
}

/// POST /api/analyze/refresh
///
/// Re-runs the analysis for one company and overwrites the stored record.
pub async fn handle_refresh_company(
    State(state): State<AppState>,
    AppJson(request): AppJson<RefreshRequest>,
) -> Result<Json<RefreshResponse>, AppError> {
    let resolved = state
        .resolver
        .reanalyze(&request.company_name, request.email.as_deref())
        .await?;

    Ok(Json(RefreshResponse {
        company: resolved.record,
        source: resolved.source,
    }))
}
