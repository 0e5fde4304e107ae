//! Employer-brand data model: five categories, twenty sub-scores, and the
//! per-company record built from them.
//!
//! Two key schemes exist for the categories. The current camelCase keys are the
//! canonical ones and are always used on output; the legacy keys
//! (`interpersonalFit`, `thrivingAtWork`, ...) are accepted on input through
//! serde aliases so they are resolved once, here, and nowhere else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound of a single category score.
pub const MAX_CATEGORY_SCORE: u32 = 20;
/// Upper bound of a single sub-score.
pub const MAX_SUBSCORE: u32 = 5;

// ────────────────────────────────────────────────────────────────────────────
// Categories
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    #[serde(alias = "interpersonalFit")]
    BrandPositionAndPerception,
    #[serde(alias = "recognitionAndCompensation")]
    CompensationAndBenefits,
    #[serde(alias = "thrivingAtWork")]
    GrowthAndDevelopment,
    #[serde(alias = "experienceAndCompetency")]
    PeopleAndCulture,
    #[serde(alias = "purposeAndInvolvement")]
    InnovationAndProducts,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::BrandPositionAndPerception,
        Category::CompensationAndBenefits,
        Category::GrowthAndDevelopment,
        Category::PeopleAndCulture,
        Category::InnovationAndProducts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::BrandPositionAndPerception => "Brand Position & Perception",
            Category::CompensationAndBenefits => "Compensation & Benefits",
            Category::GrowthAndDevelopment => "Growth & Development",
            Category::PeopleAndCulture => "People & Culture",
            Category::InnovationAndProducts => "Innovation & Products",
        }
    }

    /// The four sub-scores that sum to this category's score.
    pub fn subcategories(self) -> [SubCategory; 4] {
        use SubCategory::*;
        match self {
            Category::BrandPositionAndPerception => [
                DiversityAndInclusion,
                LeadershipEffectiveness,
                EmployeeAdvocacy,
                WorkplaceCulture,
            ],
            Category::CompensationAndBenefits => [
                CompensationCompetitiveness,
                TalentRetention,
                PerformanceRecognition,
                CompensationTransparency,
            ],
            Category::GrowthAndDevelopment => [
                EmployerValueProposition,
                CareerDevelopment,
                InnovationAdvancement,
                WorkLifeBalance,
            ],
            Category::PeopleAndCulture => [
                EmployeeExperience,
                CompetencyUtilization,
                ProfessionalGrowth,
                ResourceAccess,
            ],
            Category::InnovationAndProducts => [
                SocialResponsibility,
                SustainabilityInitiatives,
                EmployeeEngagement,
                MeaningfulWork,
            ],
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sub-categories
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubCategory {
    DiversityAndInclusion,
    LeadershipEffectiveness,
    EmployeeAdvocacy,
    WorkplaceCulture,
    CompensationCompetitiveness,
    TalentRetention,
    PerformanceRecognition,
    CompensationTransparency,
    EmployerValueProposition,
    CareerDevelopment,
    InnovationAdvancement,
    WorkLifeBalance,
    EmployeeExperience,
    CompetencyUtilization,
    ProfessionalGrowth,
    ResourceAccess,
    SocialResponsibility,
    SustainabilityInitiatives,
    EmployeeEngagement,
    MeaningfulWork,
}

impl SubCategory {
    /// Grouped by category, in `Category::ALL` order.
    pub const ALL: [SubCategory; 20] = [
        SubCategory::DiversityAndInclusion,
        SubCategory::LeadershipEffectiveness,
        SubCategory::EmployeeAdvocacy,
        SubCategory::WorkplaceCulture,
        SubCategory::CompensationCompetitiveness,
        SubCategory::TalentRetention,
        SubCategory::PerformanceRecognition,
        SubCategory::CompensationTransparency,
        SubCategory::EmployerValueProposition,
        SubCategory::CareerDevelopment,
        SubCategory::InnovationAdvancement,
        SubCategory::WorkLifeBalance,
        SubCategory::EmployeeExperience,
        SubCategory::CompetencyUtilization,
        SubCategory::ProfessionalGrowth,
        SubCategory::ResourceAccess,
        SubCategory::SocialResponsibility,
        SubCategory::SustainabilityInitiatives,
        SubCategory::EmployeeEngagement,
        SubCategory::MeaningfulWork,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SubCategory::DiversityAndInclusion => "diversityAndInclusion",
            SubCategory::LeadershipEffectiveness => "leadershipEffectiveness",
            SubCategory::EmployeeAdvocacy => "employeeAdvocacy",
            SubCategory::WorkplaceCulture => "workplaceCulture",
            SubCategory::CompensationCompetitiveness => "compensationCompetitiveness",
            SubCategory::TalentRetention => "talentRetention",
            SubCategory::PerformanceRecognition => "performanceRecognition",
            SubCategory::CompensationTransparency => "compensationTransparency",
            SubCategory::EmployerValueProposition => "employerValueProposition",
            SubCategory::CareerDevelopment => "careerDevelopment",
            SubCategory::InnovationAdvancement => "innovationAdvancement",
            SubCategory::WorkLifeBalance => "workLifeBalance",
            SubCategory::EmployeeExperience => "employeeExperience",
            SubCategory::CompetencyUtilization => "competencyUtilization",
            SubCategory::ProfessionalGrowth => "professionalGrowth",
            SubCategory::ResourceAccess => "resourceAccess",
            SubCategory::SocialResponsibility => "socialResponsibility",
            SubCategory::SustainabilityInitiatives => "sustainabilityInitiatives",
            SubCategory::EmployeeEngagement => "employeeEngagement",
            SubCategory::MeaningfulWork => "meaningfulWork",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SubCategory::DiversityAndInclusion => "Diversity, Equity, Inclusion, and Belonging",
            SubCategory::LeadershipEffectiveness => "Leadership Effectiveness and Alignment",
            SubCategory::EmployeeAdvocacy => "Employee Advocacy and Brand Ambassadorship",
            SubCategory::WorkplaceCulture => "Workplace Culture and Relationships",
            SubCategory::CompensationCompetitiveness => "Compensation and Benefits Competitiveness",
            SubCategory::TalentRetention => "Talent Attraction and Retention Rates",
            SubCategory::PerformanceRecognition => "Performance Recognition and Appreciation",
            SubCategory::CompensationTransparency => "Transparency in Compensation Structure",
            SubCategory::EmployerValueProposition => "Employer Value Proposition Strength",
            SubCategory::CareerDevelopment => "Career Development and Learning Opportunities",
            SubCategory::InnovationAdvancement => "Innovation and Technological Advancement",
            SubCategory::WorkLifeBalance => "Work-life Balance and Flexibility",
            SubCategory::EmployeeExperience => "Employee Experience Consistency",
            SubCategory::CompetencyUtilization => "Feeling of Competency and Skill Utilization",
            SubCategory::ProfessionalGrowth => "Professional Growth and Advancement Opportunities",
            SubCategory::ResourceAccess => "Access to Necessary Resources and Tools",
            SubCategory::SocialResponsibility => "Social Responsibility and Community Impact",
            SubCategory::SustainabilityInitiatives => "Corporate Sustainability Initiatives",
            SubCategory::EmployeeEngagement => "Employee Engagement in Company Goals",
            SubCategory::MeaningfulWork => "Opportunities for Meaningful Work",
        }
    }

    pub fn from_key(key: &str) -> Option<SubCategory> {
        SubCategory::ALL.into_iter().find(|s| s.key() == key)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Score containers
// ────────────────────────────────────────────────────────────────────────────

/// The five category scores, flattened into the record's top level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    #[serde(alias = "interpersonalFit")]
    pub brand_position_and_perception: u32,
    #[serde(alias = "recognitionAndCompensation")]
    pub compensation_and_benefits: u32,
    #[serde(alias = "thrivingAtWork")]
    pub growth_and_development: u32,
    #[serde(alias = "experienceAndCompetency")]
    pub people_and_culture: u32,
    #[serde(alias = "purposeAndInvolvement")]
    pub innovation_and_products: u32,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::BrandPositionAndPerception => self.brand_position_and_perception,
            Category::CompensationAndBenefits => self.compensation_and_benefits,
            Category::GrowthAndDevelopment => self.growth_and_development,
            Category::PeopleAndCulture => self.people_and_culture,
            Category::InnovationAndProducts => self.innovation_and_products,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut u32 {
        match category {
            Category::BrandPositionAndPerception => &mut self.brand_position_and_perception,
            Category::CompensationAndBenefits => &mut self.compensation_and_benefits,
            Category::GrowthAndDevelopment => &mut self.growth_and_development,
            Category::PeopleAndCulture => &mut self.people_and_culture,
            Category::InnovationAndProducts => &mut self.innovation_and_products,
        }
    }

    pub fn total(&self) -> u32 {
        Category::ALL.into_iter().map(|c| self.get(c)).sum()
    }

    /// Category scores as the sums of their sub-scores.
    pub fn from_subcategories(subs: &SubcategoryScores) -> Self {
        let mut scores = CategoryScores::default();
        for category in Category::ALL {
            *scores.get_mut(category) = subs.sum_for(category);
        }
        scores
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryScores {
    pub diversity_and_inclusion: u32,
    pub leadership_effectiveness: u32,
    pub employee_advocacy: u32,
    pub workplace_culture: u32,
    pub compensation_competitiveness: u32,
    pub talent_retention: u32,
    pub performance_recognition: u32,
    pub compensation_transparency: u32,
    pub employer_value_proposition: u32,
    pub career_development: u32,
    pub innovation_advancement: u32,
    pub work_life_balance: u32,
    pub employee_experience: u32,
    pub competency_utilization: u32,
    pub professional_growth: u32,
    pub resource_access: u32,
    pub social_responsibility: u32,
    pub sustainability_initiatives: u32,
    pub employee_engagement: u32,
    pub meaningful_work: u32,
}

impl SubcategoryScores {
    /// Builds from values listed in `SubCategory::ALL` order.
    pub fn from_array(values: [u32; 20]) -> Self {
        let mut subs = SubcategoryScores::default();
        for (sub, value) in SubCategory::ALL.into_iter().zip(values) {
            *subs.get_mut(sub) = value;
        }
        subs
    }

    pub fn uniform(value: u32) -> Self {
        Self::from_array([value; 20])
    }

    pub fn get(&self, sub: SubCategory) -> u32 {
        match sub {
            SubCategory::DiversityAndInclusion => self.diversity_and_inclusion,
            SubCategory::LeadershipEffectiveness => self.leadership_effectiveness,
            SubCategory::EmployeeAdvocacy => self.employee_advocacy,
            SubCategory::WorkplaceCulture => self.workplace_culture,
            SubCategory::CompensationCompetitiveness => self.compensation_competitiveness,
            SubCategory::TalentRetention => self.talent_retention,
            SubCategory::PerformanceRecognition => self.performance_recognition,
            SubCategory::CompensationTransparency => self.compensation_transparency,
            SubCategory::EmployerValueProposition => self.employer_value_proposition,
            SubCategory::CareerDevelopment => self.career_development,
            SubCategory::InnovationAdvancement => self.innovation_advancement,
            SubCategory::WorkLifeBalance => self.work_life_balance,
            SubCategory::EmployeeExperience => self.employee_experience,
            SubCategory::CompetencyUtilization => self.competency_utilization,
            SubCategory::ProfessionalGrowth => self.professional_growth,
            SubCategory::ResourceAccess => self.resource_access,
            SubCategory::SocialResponsibility => self.social_responsibility,
            SubCategory::SustainabilityInitiatives => self.sustainability_initiatives,
            SubCategory::EmployeeEngagement => self.employee_engagement,
            SubCategory::MeaningfulWork => self.meaningful_work,
        }
    }

    pub fn get_mut(&mut self, sub: SubCategory) -> &mut u32 {
        match sub {
            SubCategory::DiversityAndInclusion => &mut self.diversity_and_inclusion,
            SubCategory::LeadershipEffectiveness => &mut self.leadership_effectiveness,
            SubCategory::EmployeeAdvocacy => &mut self.employee_advocacy,
            SubCategory::WorkplaceCulture => &mut self.workplace_culture,
            SubCategory::CompensationCompetitiveness => &mut self.compensation_competitiveness,
            SubCategory::TalentRetention => &mut self.talent_retention,
            SubCategory::PerformanceRecognition => &mut self.performance_recognition,
            SubCategory::CompensationTransparency => &mut self.compensation_transparency,
            SubCategory::EmployerValueProposition => &mut self.employer_value_proposition,
            SubCategory::CareerDevelopment => &mut self.career_development,
            SubCategory::InnovationAdvancement => &mut self.innovation_advancement,
            SubCategory::WorkLifeBalance => &mut self.work_life_balance,
            SubCategory::EmployeeExperience => &mut self.employee_experience,
            SubCategory::CompetencyUtilization => &mut self.competency_utilization,
            SubCategory::ProfessionalGrowth => &mut self.professional_growth,
            SubCategory::ResourceAccess => &mut self.resource_access,
            SubCategory::SocialResponsibility => &mut self.social_responsibility,
            SubCategory::SustainabilityInitiatives => &mut self.sustainability_initiatives,
            SubCategory::EmployeeEngagement => &mut self.employee_engagement,
            SubCategory::MeaningfulWork => &mut self.meaningful_work,
        }
    }

    pub fn sum_for(&self, category: Category) -> u32 {
        category.subcategories().into_iter().map(|s| self.get(s)).sum()
    }

    /// Shares `points` as evenly as possible across `subs`, earlier ones
    /// taking the remainder. Each value is capped at [`MAX_SUBSCORE`].
    pub fn spread(&mut self, subs: &[SubCategory], points: u32) {
        if subs.is_empty() {
            return;
        }
        let count = subs.len() as u32;
        let (base, remainder) = (points / count, points % count);
        for (i, sub) in subs.iter().enumerate() {
            let extra = u32::from((i as u32) < remainder);
            *self.get_mut(*sub) = (base + extra).min(MAX_SUBSCORE);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Narrative analysis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAnalysis {
    #[serde(default)]
    pub overview: String,
    #[serde(default, alias = "interpersonalFit")]
    pub brand_position_and_perception: String,
    #[serde(default, alias = "recognitionAndCompensation")]
    pub compensation_and_benefits: String,
    #[serde(default, alias = "thrivingAtWork")]
    pub growth_and_development: String,
    #[serde(default, alias = "experienceAndCompetency")]
    pub people_and_culture: String,
    #[serde(default, alias = "purposeAndInvolvement")]
    pub innovation_and_products: String,
}

impl CompanyAnalysis {
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::BrandPositionAndPerception => &self.brand_position_and_perception,
            Category::CompensationAndBenefits => &self.compensation_and_benefits,
            Category::GrowthAndDevelopment => &self.growth_and_development,
            Category::PeopleAndCulture => &self.people_and_culture,
            Category::InnovationAndProducts => &self.innovation_and_products,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut String {
        match category {
            Category::BrandPositionAndPerception => &mut self.brand_position_and_perception,
            Category::CompensationAndBenefits => &mut self.compensation_and_benefits,
            Category::GrowthAndDevelopment => &mut self.growth_and_development,
            Category::PeopleAndCulture => &mut self.people_and_culture,
            Category::InnovationAndProducts => &mut self.innovation_and_products,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Company record
// ────────────────────────────────────────────────────────────────────────────

/// One organization's employer-brand assessment.
///
/// `email` and `timestamp` are bookkeeping stamped by the resolver when a
/// generated record is persisted; reserved records never carry them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    #[serde(flatten)]
    pub scores: CategoryScores,
    pub subcategories: SubcategoryScores,
    pub glassdoor_score: f64,
    pub num_employees: u64,
    pub linkedin_followers: u64,
    pub headquarters: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_ticker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    pub top3_words: Vec<String>,
    pub evp_statement: String,
    pub analysis: CompanyAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subcategory_belongs_to_exactly_one_category() {
        for sub in SubCategory::ALL {
            let owners = Category::ALL
                .iter()
                .filter(|c| c.subcategories().contains(&sub))
                .count();
            assert_eq!(owners, 1, "{sub:?} owned by {owners} categories");
        }
    }

    #[test]
    fn test_all_order_matches_category_grouping() {
        let grouped: Vec<SubCategory> = Category::ALL
            .into_iter()
            .flat_map(|c| c.subcategories())
            .collect();
        assert_eq!(grouped, SubCategory::ALL.to_vec());
    }

    #[test]
    fn test_subcategory_from_key() {
        assert_eq!(
            SubCategory::from_key("workLifeBalance"),
            Some(SubCategory::WorkLifeBalance)
        );
        assert_eq!(SubCategory::from_key("thrivingAtWork"), None);
    }

    #[test]
    fn test_category_serde_accepts_legacy_name() {
        let c: Category = serde_json::from_str(r#""recognitionAndCompensation""#).unwrap();
        assert_eq!(c, Category::CompensationAndBenefits);
        assert_eq!(
            serde_json::to_string(&c).unwrap(),
            r#""compensationAndBenefits""#
        );
    }

    #[test]
    fn test_category_scores_from_subcategories() {
        let subs = SubcategoryScores::from_array([
            5, 5, 4, 5, 5, 5, 4, 4, 5, 5, 5, 4, 5, 5, 5, 5, 5, 5, 4, 5,
        ]);
        let scores = CategoryScores::from_subcategories(&subs);
        assert_eq!(scores.brand_position_and_perception, 19);
        assert_eq!(scores.compensation_and_benefits, 18);
        assert_eq!(scores.growth_and_development, 19);
        assert_eq!(scores.people_and_culture, 20);
        assert_eq!(scores.innovation_and_products, 19);
        assert_eq!(scores.total(), 95);
    }

    #[test]
    fn test_spread_shares_points_and_caps() {
        let brand = Category::BrandPositionAndPerception.subcategories();
        let mut subs = SubcategoryScores::default();

        subs.spread(&brand, 18);
        assert_eq!(brand.map(|s| subs.get(s)), [5, 5, 4, 4]);

        subs.spread(&brand[1..], 7);
        assert_eq!(brand.map(|s| subs.get(s)), [5, 3, 2, 2]);

        subs.spread(&brand, 30);
        assert_eq!(subs.sum_for(Category::BrandPositionAndPerception), 20);
    }

    #[test]
    fn test_record_deserializes_legacy_keys_and_serializes_canonical() {
        let json = serde_json::json!({
            "interpersonalFit": 16,
            "thrivingAtWork": 17,
            "experienceAndCompetency": 16,
            "recognitionAndCompensation": 15,
            "purposeAndInvolvement": 16,
            "subcategories": SubcategoryScores::uniform(4),
            "glassdoorScore": 3.3,
            "numEmployees": 2300000,
            "linkedinFollowers": 13700000,
            "headquarters": "Bentonville, AR, USA",
            "top3Words": ["Stable", "Diverse", "Accessible"],
            "evpStatement": "Walmart offers associates a career.",
            "analysis": {
                "overview": "Overview.",
                "interpersonalFit": "Culture varies by location."
            }
        });

        let record: CompanyRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.scores.brand_position_and_perception, 16);
        assert_eq!(record.scores.growth_and_development, 17);
        assert_eq!(record.scores.compensation_and_benefits, 15);
        assert_eq!(
            record.analysis.get(Category::BrandPositionAndPerception),
            "Culture varies by location."
        );
        assert!(record.stock_ticker.is_none());

        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out["brandPositionAndPerception"], 16);
        assert!(out.get("interpersonalFit").is_none());
        assert!(out.get("email").is_none());
        assert_eq!(out["top3Words"][0], "Stable");
    }
}
