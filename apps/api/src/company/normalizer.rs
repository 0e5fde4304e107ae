//! Score Normalizer: caps the five-category total at [`TOTAL_SCORE_CEILING`].
//!
//! Algorithm:
//! 1. total = Σ category scores. total ≤ 85 → record returned unchanged.
//! 2. factor = 85 / total
//! 3. category := round(score × factor)
//! 4. sub-score := min(4, round(sub × factor))
//! 5. If rounding alone left the total above 85, remove one point at a time
//!    from the highest category until it fits.
//!
//! Rounding drift between a category and the sum of its sub-scores is accepted.

use tracing::info;

use crate::company::models::{Category, CategoryScores, CompanyRecord, SubCategory};

pub const TOTAL_SCORE_CEILING: u32 = 85;
/// Rescaled sub-scores never reach the 5-point maximum.
pub const RESCALED_SUBSCORE_CAP: u32 = 4;

/// Returns `record` rescaled so its category total does not exceed the ceiling.
/// Idempotent: a compliant record comes back untouched.
pub fn normalize(mut record: CompanyRecord) -> CompanyRecord {
    let total = record.scores.total();
    if total <= TOTAL_SCORE_CEILING {
        return record;
    }

    let factor = TOTAL_SCORE_CEILING as f64 / total as f64;
    info!(
        "Limiting total score from {} to {} (scaling factor: {:.2})",
        total, TOTAL_SCORE_CEILING, factor
    );

    for category in Category::ALL {
        let score = record.scores.get_mut(category);
        *score = rescale(*score, factor);
    }

    for sub in SubCategory::ALL {
        let score = record.subcategories.get_mut(sub);
        *score = rescale(*score, factor).min(RESCALED_SUBSCORE_CAP);
    }

    trim_to_ceiling(&mut record.scores);
    record
}

/// Half-up rounding; scores are never negative so `f64::round` agrees.
fn rescale(score: u32, factor: f64) -> u32 {
    (score as f64 * factor).round() as u32
}

fn trim_to_ceiling(scores: &mut CategoryScores) {
    while scores.total() > TOTAL_SCORE_CEILING {
        let highest = Category::ALL
            .into_iter()
            .max_by_key(|c| (scores.get(*c), std::cmp::Reverse(*c)))
            .unwrap_or(Category::BrandPositionAndPerception);
        *scores.get_mut(highest) -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::models::{CompanyAnalysis, SubcategoryScores};

    fn record_with(scores: [u32; 5], subs: SubcategoryScores) -> CompanyRecord {
        let mut category_scores = CategoryScores::default();
        for (category, score) in Category::ALL.into_iter().zip(scores) {
            *category_scores.get_mut(category) = score;
        }
        CompanyRecord {
            scores: category_scores,
            subcategories: subs,
            glassdoor_score: 4.0,
            num_employees: 1000,
            linkedin_followers: 5000,
            headquarters: "Austin, TX, USA".to_string(),
            stock_ticker: None,
            stock_price: None,
            primary_color: None,
            top3_words: vec!["Bold".to_string()],
            evp_statement: "Acme builds things.".to_string(),
            analysis: CompanyAnalysis::default(),
            company_name: Some("Acme".to_string()),
            email: None,
            timestamp: None,
        }
    }

    fn category_values(record: &CompanyRecord) -> Vec<u32> {
        Category::ALL
            .into_iter()
            .map(|c| record.scores.get(c))
            .collect()
    }

    #[test]
    fn test_compliant_record_is_unchanged() {
        let record = record_with([17, 17, 17, 17, 17], SubcategoryScores::uniform(4));
        assert_eq!(normalize(record.clone()), record);
    }

    #[test]
    fn test_sum_at_ceiling_is_unchanged() {
        let record = record_with([20, 20, 20, 20, 5], SubcategoryScores::uniform(5));
        assert_eq!(record.scores.total(), 85);
        assert_eq!(normalize(record.clone()), record);
    }

    #[test]
    fn test_full_marks_scale_to_seventeen_and_cap_subscores() {
        let record = record_with([20, 20, 20, 20, 20], SubcategoryScores::uniform(5));
        let normalized = normalize(record);
        assert_eq!(category_values(&normalized), vec![17, 17, 17, 17, 17]);
        for sub in SubCategory::ALL {
            assert_eq!(normalized.subcategories.get(sub), 4, "{sub:?}");
        }
    }

    #[test]
    fn test_subscore_cap_applies_even_when_rounding_allows_five() {
        // 5 × (85/86) = 4.94 would round to 5
        let record = record_with([18, 17, 17, 17, 17], SubcategoryScores::uniform(5));
        let normalized = normalize(record);
        assert!(SubCategory::ALL
            .into_iter()
            .all(|s| normalized.subcategories.get(s) == RESCALED_SUBSCORE_CAP));
    }

    #[test]
    fn test_low_subscores_rescale_proportionally() {
        let subs = SubcategoryScores::from_array([
            5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 1, 2, 3, 0,
        ]);
        let normalized = normalize(record_with([20, 20, 20, 20, 20], subs));
        assert_eq!(normalized.subcategories.social_responsibility, 1); // 0.85
        assert_eq!(normalized.subcategories.sustainability_initiatives, 2); // 1.7
        assert_eq!(normalized.subcategories.employee_engagement, 3); // 2.55
        assert_eq!(normalized.subcategories.meaningful_work, 0);
    }

    #[test]
    fn test_rounding_overshoot_is_trimmed_to_ceiling() {
        // factor 85/86: every score rounds back to itself, total stays 86
        let record = record_with([10, 16, 20, 20, 20], SubcategoryScores::uniform(4));
        let normalized = normalize(record);
        assert_eq!(normalized.scores.total(), TOTAL_SCORE_CEILING);
        assert_eq!(category_values(&normalized), vec![10, 16, 19, 20, 20]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for scores in [
            [20, 20, 20, 20, 20],
            [10, 16, 20, 20, 20],
            [19, 18, 19, 20, 19],
            [12, 13, 14, 15, 16],
        ] {
            let once = normalize(record_with(scores, SubcategoryScores::uniform(5)));
            let twice = normalize(once.clone());
            assert_eq!(once, twice, "not idempotent for {scores:?}");
            assert!(once.scores.total() <= TOTAL_SCORE_CEILING);
        }
    }

    #[test]
    fn test_metadata_is_preserved() {
        let record = record_with([20, 20, 20, 20, 20], SubcategoryScores::uniform(5));
        let normalized = normalize(record.clone());
        assert_eq!(normalized.headquarters, record.headquarters);
        assert_eq!(normalized.company_name, record.company_name);
        assert_eq!(normalized.top3_words, record.top3_words);
    }
}
