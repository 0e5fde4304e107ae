//! Axum route handler for the lead form.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppJson};
use crate::leads::webhook::LeadSubmission;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFormRequest {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub competitor_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitFormResponse {
    pub success: bool,
}

/// POST /api/submit-form
///
/// Forwards the lead to the spreadsheet webhook in the background. Once the
/// input is valid the answer is always a success, whatever the webhook does.
pub async fn handle_submit_form(
    State(state): State<AppState>,
    AppJson(request): AppJson<SubmitFormRequest>,
) -> Result<Json<SubmitFormResponse>, AppError> {
    if request.company_name.trim().is_empty() || request.email.trim().is_empty() {
        return Err(AppError::Validation(
            "Company name and email are required".to_string(),
        ));
    }
    if !is_plausible_email(&request.email) {
        return Err(AppError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }

    state.leads.submit(LeadSubmission::new(
        &request.company_name,
        &request.email,
        request.competitor_name.as_deref(),
    ));

    Ok(Json(SubmitFormResponse { success: true }))
}

/// `local@domain.tld` with no whitespace.
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plausible_emails() {
        assert!(is_plausible_email("cmo@acme.com"));
        assert!(is_plausible_email(" first.last@mail.acme.co.uk "));
    }

    #[test]
    fn test_implausible_emails() {
        for email in ["", "acme.com", "@acme.com", "cmo@", "cmo@acme", "cmo@.com", "c mo@acme.com", "a@b@c.com"] {
            assert!(!is_plausible_email(email), "{email} accepted");
        }
    }
}
