//! Compare flow: resolve both companies, verify they can be rendered, derive
//! scorecards and the category breakdown.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::company::formatting::display_name;
use crate::company::models::CompanyRecord;
use crate::company::resolver::CompanyResolver;
use crate::comparison::breakdown::{category_breakdown, CategoryComparison};
use crate::comparison::scorecard::{scorecard, Scorecard};
use crate::errors::AppError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub competitor_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecards {
    pub user_company: Scorecard,
    pub competitor: Scorecard,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub user_company: CompanyRecord,
    pub competitor: CompanyRecord,
    pub competitor_name: String,
    /// True when the user company was served from the store.
    pub from_database: bool,
    pub user_company_display_name: String,
    pub competitor_display_name: String,
    pub scorecards: Scorecards,
    pub category_breakdown: Vec<CategoryComparison>,
}

pub async fn compare(
    resolver: &CompanyResolver,
    request: &CompareRequest,
    cache_hit_delay: Duration,
) -> Result<ComparisonResult, AppError> {
    let company_name = request.company_name.trim();
    let competitor_name = request.competitor_name.trim();
    if company_name.is_empty() || competitor_name.is_empty() {
        return Err(AppError::Validation(
            "Company name and competitor name are required".to_string(),
        ));
    }

    info!("Comparing {company_name} against {competitor_name}");

    let competitor = resolver.resolve(competitor_name, None).await?;
    verify_renderable(competitor_name, &competitor.record)?;

    let user = resolver
        .resolve(company_name, request.email.as_deref())
        .await?;
    verify_renderable(company_name, &user.record)?;

    let from_database = user.from_cache();
    if from_database && !cache_hit_delay.is_zero() {
        tokio::time::sleep(cache_hit_delay).await;
    }

    Ok(ComparisonResult {
        scorecards: Scorecards {
            user_company: scorecard(&user.record),
            competitor: scorecard(&competitor.record),
        },
        category_breakdown: category_breakdown(&user.record, &competitor.record),
        user_company_display_name: display_name(company_name),
        competitor_display_name: display_name(competitor_name),
        competitor_name: competitor_name.to_string(),
        from_database,
        user_company: user.record,
        competitor: competitor.record,
    })
}

/// A record missing its overview, descriptor words or EVP cannot be shown.
fn verify_renderable(name: &str, record: &CompanyRecord) -> Result<(), AppError> {
    let missing = if record.analysis.overview.trim().is_empty() {
        Some("analysis.overview")
    } else if record.top3_words.is_empty() {
        Some("top3Words")
    } else if record.evp_statement.trim().is_empty() {
        Some("evpStatement")
    } else {
        None
    };

    match missing {
        Some(field) => {
            error!("Record for {name} is missing {field}");
            Err(AppError::analysis_failed(name))
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::company::models::Category;
    use crate::company::store::{CompanyStore, MemoryStore};
    use crate::company::testing::{sample_record, StubAnalyzer};
    use crate::comparison::breakdown::Leader;
    use crate::comparison::scorecard::Grade;

    fn request(company: &str, competitor: &str, email: Option<&str>) -> CompareRequest {
        CompareRequest {
            company_name: company.to_string(),
            competitor_name: competitor.to_string(),
            email: email.map(str::to_string),
        }
    }

    fn setup(analyzer: StubAnalyzer) -> (CompanyResolver, Arc<MemoryStore>, Arc<StubAnalyzer>) {
        let store = Arc::new(MemoryStore::new());
        let analyzer = Arc::new(analyzer);
        let resolver = CompanyResolver::new(store.clone(), analyzer.clone());
        (resolver, store, analyzer)
    }

    #[tokio::test]
    async fn test_reserved_pair_needs_no_analysis() {
        let (resolver, store, analyzer) = setup(StubAnalyzer::failing());

        let result = compare(&resolver, &request("hubspot", "Google", None), Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(analyzer.calls(), 0);
        assert!(store.list().await.is_empty());
        assert!(!result.from_database);
        assert_eq!(result.user_company_display_name, "HubSpot");
        assert_eq!(result.competitor_display_name, "Google");
        assert_eq!(result.competitor_name, "Google");
        assert_eq!(result.scorecards.competitor.score, 95);
        assert_eq!(result.scorecards.competitor.grade, Grade::A);
        assert_eq!(result.category_breakdown.len(), Category::ALL.len());
    }

    #[tokio::test]
    async fn test_empty_names_rejected() {
        let (resolver, _, analyzer) = setup(StubAnalyzer::failing());

        for (company, competitor) in [("", "Google"), ("Acme", "  "), ("", "")] {
            let err = compare(&resolver, &request(company, competitor, None), Duration::ZERO)
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
        assert_eq!(analyzer.calls(), 0);
    }

    #[tokio::test]
    async fn test_generated_user_company_is_normalized_and_stamped() {
        let (resolver, store, analyzer) = setup(StubAnalyzer::succeeding(sample_record("x", 20)));

        let result = compare(
            &resolver,
            &request("Acme Corp", "walmart", Some("cmo@acme.com")),
            Duration::ZERO,
        )
        .await
        .unwrap();

        assert_eq!(analyzer.calls(), 1);
        assert_eq!(analyzer.last_name().as_deref(), Some("Acme Corp"));
        assert!(!result.from_database);
        assert_eq!(result.scorecards.user_company.score, 85);
        assert_eq!(result.scorecards.competitor.score, 80);
        assert_eq!(result.user_company.email.as_deref(), Some("cmo@acme.com"));
        assert!(store.get("acme corp").await.is_some());

        let brand = &result.category_breakdown[0];
        assert_eq!((brand.user_score, brand.competitor_score), (17, 16));
        assert_eq!(brand.leader, Leader::UserCompany);
    }

    #[tokio::test]
    async fn test_competitor_resolved_without_email() {
        let (resolver, store, _) = setup(StubAnalyzer::succeeding(sample_record("x", 12)));

        compare(
            &resolver,
            &request("Google", "Rival Inc", Some("cmo@google.com")),
            Duration::ZERO,
        )
        .await
        .unwrap();

        let stored = store.get("rival inc").await.unwrap();
        assert!(stored.email.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_hit_waits_before_answering() {
        let (resolver, store, analyzer) = setup(StubAnalyzer::failing());
        store.put("acme", sample_record("Acme", 14)).await.unwrap();

        let started = tokio::time::Instant::now();
        let result = compare(
            &resolver,
            &request("ACME", "nasdaq", None),
            Duration::from_millis(2000),
        )
        .await
        .unwrap();

        assert!(result.from_database);
        assert_eq!(analyzer.calls(), 0);
        assert!(started.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test]
    async fn test_failed_analysis_names_the_company() {
        let (resolver, store, _) = setup(StubAnalyzer::failing());

        let err = compare(&resolver, &request("google", "Unknown Co", None), Duration::ZERO)
            .await
            .unwrap_err();

        match err {
            AppError::Analysis(msg) => assert!(msg.contains("\"Unknown Co\"")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_unrenderable_record_is_an_analysis_failure() {
        let mut broken = sample_record("x", 12);
        broken.top3_words.clear();
        let (resolver, _, _) = setup(StubAnalyzer::succeeding(broken));

        let err = compare(&resolver, &request("Broken Co", "google", None), Duration::ZERO)
            .await
            .unwrap_err();

        match err {
            AppError::Analysis(msg) => assert!(msg.contains("\"Broken Co\"")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
