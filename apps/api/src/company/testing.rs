//! Test doubles for the resolver's collaborators.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::company::analyzer::{AnalysisError, CompanyAnalyzer};
use crate::company::models::{
    Category, CategoryScores, CompanyAnalysis, CompanyRecord, SubcategoryScores,
};
use crate::company::store::{CompanyStore, StoreError};

/// A generated-looking record with every category at `category_score` and
/// sub-scores that sum to it.
pub fn sample_record(name: &str, category_score: u32) -> CompanyRecord {
    let mut subcategories = SubcategoryScores::default();
    for category in Category::ALL {
        subcategories.spread(&category.subcategories(), category_score);
    }
    CompanyRecord {
        scores: CategoryScores {
            brand_position_and_perception: category_score,
            compensation_and_benefits: category_score,
            growth_and_development: category_score,
            people_and_culture: category_score,
            innovation_and_products: category_score,
        },
        subcategories,
        glassdoor_score: 3.9,
        num_employees: 2500,
        linkedin_followers: 120_000,
        headquarters: "Springfield, IL, USA".to_string(),
        stock_ticker: None,
        stock_price: None,
        primary_color: Some("#336699".to_string()),
        top3_words: vec![
            "Reliable".to_string(),
            "Friendly".to_string(),
            "Slow".to_string(),
        ],
        evp_statement: format!("{name} offers steady careers."),
        analysis: CompanyAnalysis {
            overview: format!("{name} overview."),
            brand_position_and_perception: "Brand.".to_string(),
            compensation_and_benefits: "Compensation.".to_string(),
            growth_and_development: "Growth.".to_string(),
            people_and_culture: "People.".to_string(),
            innovation_and_products: "Innovation.".to_string(),
        },
        company_name: Some(name.to_string()),
        email: None,
        timestamp: None,
    }
}

/// Returns a canned record (or a failure) and records every call.
pub struct StubAnalyzer {
    result: Option<CompanyRecord>,
    calls: AtomicUsize,
    names: Mutex<Vec<String>>,
}

impl StubAnalyzer {
    pub fn succeeding(record: CompanyRecord) -> Self {
        Self {
            result: Some(record),
            calls: AtomicUsize::new(0),
            names: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: None,
            calls: AtomicUsize::new(0),
            names: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_name(&self) -> Option<String> {
        self.names.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompanyAnalyzer for StubAnalyzer {
    async fn analyze(&self, company_name: &str) -> Result<CompanyRecord, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.names.lock().unwrap().push(company_name.to_string());
        match &self.result {
            Some(record) => {
                let mut record = record.clone();
                record.company_name = Some(company_name.to_string());
                Ok(record)
            }
            None => Err(AnalysisError::EmptyContent),
        }
    }
}

/// A store whose writes always fail and which never finds anything.
pub struct FailingStore;

#[async_trait]
impl CompanyStore for FailingStore {
    async fn get(&self, _name: &str) -> Option<CompanyRecord> {
        None
    }

    async fn put(&self, _name: &str, _record: CompanyRecord) -> Result<(), StoreError> {
        Err(StoreError::Io {
            path: PathBuf::from("/dev/full/company-data.json"),
            source: std::io::Error::other("disk full"),
        })
    }

    async fn list(&self) -> BTreeMap<String, CompanyRecord> {
        BTreeMap::new()
    }
}

#[test]
fn test_sample_record_subscores_sum_to_categories() {
    for score in 0..=20 {
        let record = sample_record("Acme", score);
        for category in Category::ALL {
            assert_eq!(record.subcategories.sum_for(category), score, "{score}");
        }
    }
}
