//! Per-category, per-sub-score comparison of two resolved records.
//!
//! Display consumers read values from here instead of re-deriving them from
//! the records.

use std::cmp::Ordering;

use serde::Serialize;

use crate::company::models::{Category, CompanyRecord, SubCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Leader {
    UserCompany,
    Competitor,
    Tie,
}

impl Leader {
    fn between(user_score: u32, competitor_score: u32) -> Self {
        match user_score.cmp(&competitor_score) {
            Ordering::Greater => Leader::UserCompany,
            Ordering::Less => Leader::Competitor,
            Ordering::Equal => Leader::Tie,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryComparison {
    pub subcategory: SubCategory,
    pub label: &'static str,
    pub user_score: u32,
    pub competitor_score: u32,
    pub leader: Leader,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryComparison {
    pub category: Category,
    pub label: &'static str,
    pub user_score: u32,
    pub competitor_score: u32,
    pub leader: Leader,
    pub user_analysis: String,
    pub competitor_analysis: String,
    pub subcategories: Vec<SubcategoryComparison>,
}

pub fn category_breakdown(
    user: &CompanyRecord,
    competitor: &CompanyRecord,
) -> Vec<CategoryComparison> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let user_score = user.scores.get(category);
            let competitor_score = competitor.scores.get(category);
            CategoryComparison {
                category,
                label: category.label(),
                user_score,
                competitor_score,
                leader: Leader::between(user_score, competitor_score),
                user_analysis: user.analysis.get(category).to_string(),
                competitor_analysis: competitor.analysis.get(category).to_string(),
                subcategories: category
                    .subcategories()
                    .into_iter()
                    .map(|sub| {
                        let user_score = user.subcategories.get(sub);
                        let competitor_score = competitor.subcategories.get(sub);
                        SubcategoryComparison {
                            subcategory: sub,
                            label: sub.label(),
                            user_score,
                            competitor_score,
                            leader: Leader::between(user_score, competitor_score),
                        }
                    })
                    .collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::reserved::reserved_company;

    #[test]
    fn test_breakdown_covers_all_categories_and_subscores() {
        let google = reserved_company("google").unwrap();
        let walmart = reserved_company("walmart").unwrap();
        let breakdown = category_breakdown(&google, &walmart);

        assert_eq!(breakdown.len(), 5);
        assert!(breakdown.iter().all(|c| c.subcategories.len() == 4));

        let brand = &breakdown[0];
        assert_eq!(brand.category, Category::BrandPositionAndPerception);
        assert_eq!(brand.label, "Brand Position & Perception");
        assert_eq!((brand.user_score, brand.competitor_score), (19, 16));
        assert_eq!(brand.leader, Leader::UserCompany);
        assert!(brand.user_analysis.starts_with("Google"));
        assert!(brand.competitor_analysis.starts_with("Walmart"));
    }

    #[test]
    fn test_subscore_leaders() {
        let google = reserved_company("google").unwrap();
        let walmart = reserved_company("walmart").unwrap();
        let breakdown = category_breakdown(&google, &walmart);

        let growth = breakdown
            .iter()
            .find(|c| c.category == Category::GrowthAndDevelopment)
            .unwrap();
        let wlb = growth
            .subcategories
            .iter()
            .find(|s| s.subcategory == SubCategory::WorkLifeBalance)
            .unwrap();
        // 4 vs 5
        assert_eq!(wlb.leader, Leader::Competitor);

        let advocacy = &breakdown[0].subcategories[2];
        assert_eq!(advocacy.subcategory, SubCategory::EmployeeAdvocacy);
        assert_eq!(advocacy.leader, Leader::Tie);
    }
}
