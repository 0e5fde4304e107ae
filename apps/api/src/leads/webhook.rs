//! Fire-and-forget delivery of lead submissions to a spreadsheet webhook.
//!
//! Nothing here ever fails the caller: a missing URL, a transport error or a
//! non-2xx answer is logged and dropped.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

const NO_COMPETITOR: &str = "None";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub timestamp: String,
    pub company_name: String,
    pub email: String,
    pub competitor_name: String,
}

impl LeadSubmission {
    pub fn new(company_name: &str, email: &str, competitor_name: Option<&str>) -> Self {
        Self::at(Utc::now(), company_name, email, competitor_name)
    }

    fn at(
        now: DateTime<Utc>,
        company_name: &str,
        email: &str,
        competitor_name: Option<&str>,
    ) -> Self {
        let competitor_name = competitor_name
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(NO_COMPETITOR);
        Self {
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            company_name: company_name.trim().to_string(),
            email: email.trim().to_string(),
            competitor_name: competitor_name.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct LeadWebhook {
    client: reqwest::Client,
    url: Option<String>,
}

impl LeadWebhook {
    pub fn new(url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.filter(|u| !u.trim().is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// Spawns the POST and returns its handle, or `None` when no URL is set.
    pub fn submit(&self, submission: LeadSubmission) -> Option<JoinHandle<()>> {
        let Some(url) = self.url.clone() else {
            error!("Lead webhook URL is not configured; dropping submission");
            return None;
        };

        info!(
            "Submitting lead: {}, {}, {}",
            submission.company_name, submission.email, submission.competitor_name
        );

        let client = self.client.clone();
        Some(tokio::spawn(async move {
            deliver(&client, &url, &submission).await;
        }))
    }
}

async fn deliver(client: &reqwest::Client, url: &str, submission: &LeadSubmission) {
    let response = match client.post(url).json(submission).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Error submitting lead to webhook: {e}");
            return;
        }
    };

    let status = response.status();
    if status.is_success() {
        info!("Lead webhook accepted submission for {}", submission.company_name);
    } else {
        let body = response.text().await.unwrap_or_default();
        warn!("Lead webhook rejected submission ({status}): {body}");
    }
}
