//! Company Analyzer: pluggable, trait-based source of freshly generated records.
//!
//! Default: `LlmCompanyAnalyzer`, which asks the model for the scored rubric and
//! turns its loosely-typed JSON into a `CompanyRecord`.
//!
//! The model's output is untrusted: scores may be fractional, out of range, or
//! missing, and either category key scheme may appear. Everything is clamped and
//! defaulted here so callers only ever see well-formed records. Normalization
//! against the total ceiling is the resolver's job, not this module's.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::company::models::{
    Category, CategoryScores, CompanyAnalysis, CompanyRecord, SubCategory, SubcategoryScores,
    MAX_CATEGORY_SCORE, MAX_SUBSCORE,
};
use crate::company::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

/// Sub-score used when the model omits both it and its category score.
const DEFAULT_SUBSCORE: u32 = 3;
const DEFAULT_TOP3_WORDS: [&str; 3] = ["Professional", "Innovative", "Dedicated"];
const UNKNOWN_HEADQUARTERS: &str = "Unknown";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analysis returned no content")]
    EmptyContent,

    #[error("analysis content could not be parsed: {0}")]
    Unparseable(String),

    #[error("analysis contained no scores")]
    MissingScores,

    #[error("analysis provider failed: {0}")]
    Provider(String),
}

impl From<LlmError> for AnalysisError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::EmptyContent => AnalysisError::EmptyContent,
            LlmError::Parse(e) => AnalysisError::Unparseable(e.to_string()),
            other => AnalysisError::Provider(other.to_string()),
        }
    }
}

/// Produces a new record for a company that is neither reserved nor stored.
///
/// Carried in `CompanyResolver` as `Arc<dyn CompanyAnalyzer>`.
#[async_trait]
pub trait CompanyAnalyzer: Send + Sync {
    async fn analyze(&self, company_name: &str) -> Result<CompanyRecord, AnalysisError>;
}

pub struct LlmCompanyAnalyzer {
    llm: LlmClient,
}

impl LlmCompanyAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl CompanyAnalyzer for LlmCompanyAnalyzer {
    async fn analyze(&self, company_name: &str) -> Result<CompanyRecord, AnalysisError> {
        let prompt = ANALYSIS_PROMPT_TEMPLATE.replace("{company_name}", company_name);
        let system = format!("{ANALYSIS_SYSTEM}\n\n{JSON_ONLY_SYSTEM}");

        info!("Requesting analysis for {company_name}");
        let raw: RawAnalysis = self.llm.call_json(&prompt, &system).await?;
        raw.into_record(company_name)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Raw model output
// ────────────────────────────────────────────────────────────────────────────

/// The model's reply before validation. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    #[serde(alias = "interpersonalFit")]
    brand_position_and_perception: Option<f64>,
    #[serde(alias = "recognitionAndCompensation")]
    compensation_and_benefits: Option<f64>,
    #[serde(alias = "thrivingAtWork")]
    growth_and_development: Option<f64>,
    #[serde(alias = "experienceAndCompetency")]
    people_and_culture: Option<f64>,
    #[serde(alias = "purposeAndInvolvement")]
    innovation_and_products: Option<f64>,
    glassdoor_score: Option<f64>,
    num_employees: Option<f64>,
    linkedin_followers: Option<f64>,
    headquarters: Option<String>,
    stock_ticker: Option<String>,
    stock_price: Option<f64>,
    primary_color: Option<String>,
    top3_words: Option<Vec<String>>,
    evp_statement: Option<String>,
    subcategories: Option<HashMap<String, Option<f64>>>,
    analysis: Option<CompanyAnalysis>,
}

impl RawAnalysis {
    fn category_score(&self, category: Category) -> Option<f64> {
        match category {
            Category::BrandPositionAndPerception => self.brand_position_and_perception,
            Category::CompensationAndBenefits => self.compensation_and_benefits,
            Category::GrowthAndDevelopment => self.growth_and_development,
            Category::PeopleAndCulture => self.people_and_culture,
            Category::InnovationAndProducts => self.innovation_and_products,
        }
    }

    fn into_record(self, company_name: &str) -> Result<CompanyRecord, AnalysisError> {
        let has_category_scores = Category::ALL
            .into_iter()
            .any(|c| self.category_score(c).is_some());
        if !has_category_scores && self.subcategories.is_none() {
            return Err(AnalysisError::MissingScores);
        }

        let (scores, subcategories) = self.reconciled_scores(company_name);

        let top3_words = match self.top3_words {
            Some(words) if words.iter().any(|w| !w.trim().is_empty()) => words,
            _ => {
                info!("Adding default top3Words for {company_name}");
                DEFAULT_TOP3_WORDS.iter().map(|w| w.to_string()).collect()
            }
        };

        let evp_statement = match self.evp_statement {
            Some(evp) if !evp.trim().is_empty() => evp,
            _ => {
                info!("Adding default evpStatement for {company_name}");
                default_evp_statement(company_name)
            }
        };

        Ok(CompanyRecord {
            scores,
            subcategories,
            glassdoor_score: self.glassdoor_score.unwrap_or(0.0).clamp(0.0, 5.0),
            num_employees: to_count(self.num_employees),
            linkedin_followers: to_count(self.linkedin_followers),
            headquarters: non_blank(self.headquarters)
                .unwrap_or_else(|| UNKNOWN_HEADQUARTERS.to_string()),
            stock_ticker: non_blank(self.stock_ticker),
            stock_price: self.stock_price.filter(|p| p.is_finite() && *p > 0.0),
            primary_color: non_blank(self.primary_color),
            top3_words,
            evp_statement,
            analysis: complete_analysis(self.analysis, company_name),
            company_name: Some(company_name.to_string()),
            email: None,
            timestamp: None,
        })
    }

    /// Sub-scores the model actually supplied, rounded and clamped.
    fn reported_subscores(&self, company_name: &str) -> HashMap<SubCategory, u32> {
        let Some(raw) = &self.subcategories else {
            info!("No subcategories for {company_name}; deriving them from category scores");
            return HashMap::new();
        };

        let mut reported = HashMap::new();
        for (key, value) in raw {
            let Some(sub) = SubCategory::from_key(key) else {
                warn!("Ignoring unknown sub-score {key} for {company_name}");
                continue;
            };
            if let Some(value) = value {
                reported.insert(sub, to_score(*value, MAX_SUBSCORE));
            }
        }
        reported
    }

    /// Builds sub-scores and category scores that agree: every category is the
    /// sum of its four sub-scores.
    ///
    /// Missing sub-scores share whatever the stated category score leaves over,
    /// or take [`DEFAULT_SUBSCORE`] when the category was not stated either.
    fn reconciled_scores(&self, company_name: &str) -> (CategoryScores, SubcategoryScores) {
        let reported = self.reported_subscores(company_name);
        let mut subs = SubcategoryScores::default();
        let mut scores = CategoryScores::default();

        for category in Category::ALL {
            let mut missing = Vec::new();
            for sub in category.subcategories() {
                match reported.get(&sub) {
                    Some(value) => *subs.get_mut(sub) = *value,
                    None => missing.push(sub),
                }
            }

            let stated = self
                .category_score(category)
                .map(|v| to_score(v, MAX_CATEGORY_SCORE));
            match stated {
                Some(stated) => {
                    let leftover = stated.saturating_sub(subs.sum_for(category));
                    subs.spread(&missing, leftover);
                }
                None => {
                    for sub in missing {
                        *subs.get_mut(sub) = DEFAULT_SUBSCORE;
                    }
                }
            }

            let total = subs.sum_for(category);
            if let Some(stated) = stated.filter(|s| *s != total) {
                warn!(
                    "{company_name}: {category:?} reported as {stated} but sub-scores sum to {total}; using {total}"
                );
            }
            *scores.get_mut(category) = total;
        }

        (scores, subs)
    }
}

/// Rounds and clamps a model-supplied score into `0..=max`.
fn to_score(value: f64, max: u32) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, max as f64) as u32
}

fn to_count(value: Option<f64>) -> u64 {
    value
        .filter(|v| v.is_finite())
        .map(|v| v.max(0.0).round() as u64)
        .unwrap_or(0)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn default_evp_statement(company_name: &str) -> String {
    format!(
        "{company_name} is committed to creating a positive and supportive work environment \
         that enables employees to grow professionally while making meaningful contributions."
    )
}

/// Fills any blank analysis text with a generic sentence naming the company.
fn complete_analysis(analysis: Option<CompanyAnalysis>, company_name: &str) -> CompanyAnalysis {
    let mut analysis = analysis.unwrap_or_else(|| {
        info!("Creating default analysis for {company_name}");
        CompanyAnalysis::default()
    });

    if analysis.overview.trim().is_empty() {
        analysis.overview = format!(
            "{company_name} demonstrates a balanced approach to employer branding across key categories."
        );
    }

    for category in Category::ALL {
        let text = analysis.get_mut(category);
        if text.trim().is_empty() {
            *text = default_category_text(category, company_name);
        }
    }
    analysis
}

fn default_category_text(category: Category, company_name: &str) -> String {
    match category {
        Category::BrandPositionAndPerception => format!(
            "{company_name} promotes a collaborative work environment with opportunities for growth."
        ),
        Category::CompensationAndBenefits => format!(
            "{company_name} has a compensation structure designed to attract and retain talent."
        ),
        Category::GrowthAndDevelopment => format!(
            "{company_name} provides resources for employee development and well-being."
        ),
        Category::PeopleAndCulture => format!(
            "{company_name} offers a professional environment where skills can be utilized effectively."
        ),
        Category::InnovationAndProducts => format!(
            "{company_name} encourages employees to contribute to meaningful initiatives and projects."
        ),
    }
}
