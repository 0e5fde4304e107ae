//! Company Data Resolver: the only place that decides where a record comes from.
//!
//! Flow: reserved constant → store hit → analyze → normalize → write-through.
//!
//! Failed analyses never touch the store. A failed store write is logged and
//! swallowed; the caller still gets the freshly generated record.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{error, info};

use crate::company::analyzer::CompanyAnalyzer;
use crate::company::models::CompanyRecord;
use crate::company::normalizer::normalize;
use crate::company::reserved::reserved_company;
use crate::company::store::CompanyStore;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    Reserved,
    Cache,
    Generated,
}

#[derive(Debug, Clone)]
pub struct Resolved {
    pub record: CompanyRecord,
    pub source: RecordSource,
}

impl Resolved {
    pub fn from_cache(&self) -> bool {
        self.source == RecordSource::Cache
    }
}

pub struct CompanyResolver {
    store: Arc<dyn CompanyStore>,
    analyzer: Arc<dyn CompanyAnalyzer>,
}

impl CompanyResolver {
    pub fn new(store: Arc<dyn CompanyStore>, analyzer: Arc<dyn CompanyAnalyzer>) -> Self {
        Self { store, analyzer }
    }

    /// Resolves `name` to a record. `email` is stamped onto newly generated
    /// records only.
    pub async fn resolve(&self, name: &str, email: Option<&str>) -> Result<Resolved, AppError> {
        let name = require_name(name)?;

        if let Some(record) = reserved_company(name) {
            return Ok(Resolved {
                record,
                source: RecordSource::Reserved,
            });
        }

        if let Some(record) = self.store.get(name).await {
            info!("Found company data in store for: {name}");
            return Ok(Resolved {
                record,
                source: RecordSource::Cache,
            });
        }

        info!("Analyzing new company: {name}");
        let record = self.analyze_and_store(name, email).await?;
        Ok(Resolved {
            record,
            source: RecordSource::Generated,
        })
    }

    /// Forces a new analysis for `name`, replacing any stored record.
    /// Reserved companies are returned unchanged.
    pub async fn reanalyze(&self, name: &str, email: Option<&str>) -> Result<Resolved, AppError> {
        let name = require_name(name)?;

        if let Some(record) = reserved_company(name) {
            return Ok(Resolved {
                record,
                source: RecordSource::Reserved,
            });
        }

        info!("Re-analyzing company: {name}");
        let record = self.analyze_and_store(name, email).await?;
        Ok(Resolved {
            record,
            source: RecordSource::Generated,
        })
    }

    async fn analyze_and_store(
        &self,
        name: &str,
        email: Option<&str>,
    ) -> Result<CompanyRecord, AppError> {
        let email = email.map(str::trim).filter(|e| !e.is_empty());
        let analyzed = self.analyzer.analyze(name).await.map_err(|e| {
            error!("Failed to analyze company {name}: {e}");
            AppError::analysis_failed(name)
        })?;

        let previous_email = match email {
            Some(_) => None,
            None => self.store.get(name).await.and_then(|r| r.email),
        };

        let mut record = normalize(analyzed);
        record.email = email.map(str::to_string).or(previous_email);
        record.timestamp = Some(Utc::now());

        if let Err(e) = self.store.put(name, record.clone()).await {
            error!("Error saving company data for {name}: {e}");
        } else {
            info!("Saved company data for: {name}");
        }

        Ok(record)
    }
}

fn require_name(name: &str) -> Result<&str, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Company name is required".to_string()));
    }
    Ok(trimmed)
}
