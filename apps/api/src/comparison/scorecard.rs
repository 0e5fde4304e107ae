use serde::Serialize;

use crate::company::models::{Category, CompanyRecord, MAX_CATEGORY_SCORE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// A ≥ 90, B ≥ 80, C ≥ 70, D ≥ 60, otherwise F.
    pub fn from_percentage(percentage: f64) -> Self {
        match percentage {
            p if p >= 90.0 => Grade::A,
            p if p >= 80.0 => Grade::B,
            p if p >= 70.0 => Grade::C,
            p if p >= 60.0 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Grade::A => "#22c55e",
            Grade::B => "#84cc16",
            Grade::C => "#eab308",
            Grade::D => "#f97316",
            Grade::F => "#ef4444",
        }
    }
}

/// Overall result for one company: category total out of 100 and a grade.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    pub score: u32,
    pub total_possible: u32,
    pub percentage: f64,
    pub grade: Grade,
    pub grade_color: &'static str,
}

pub fn scorecard(record: &CompanyRecord) -> Scorecard {
    let score = record.scores.total();
    let total_possible = Category::ALL.len() as u32 * MAX_CATEGORY_SCORE;
    let percentage = score as f64 / total_possible as f64 * 100.0;
    let grade = Grade::from_percentage(percentage);

    Scorecard {
        score,
        total_possible,
        percentage,
        grade,
        grade_color: grade.color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::reserved::reserved_company;
    use crate::company::testing::sample_record;

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_percentage(100.0), Grade::A);
        assert_eq!(Grade::from_percentage(90.0), Grade::A);
        assert_eq!(Grade::from_percentage(89.9), Grade::B);
        assert_eq!(Grade::from_percentage(80.0), Grade::B);
        assert_eq!(Grade::from_percentage(70.0), Grade::C);
        assert_eq!(Grade::from_percentage(60.0), Grade::D);
        assert_eq!(Grade::from_percentage(59.0), Grade::F);
        assert_eq!(Grade::from_percentage(0.0), Grade::F);
    }

    #[test]
    fn test_reserved_scorecards() {
        let google = scorecard(&reserved_company("google").unwrap());
        assert_eq!(google.score, 95);
        assert_eq!(google.total_possible, 100);
        assert_eq!(google.grade, Grade::A);

        let walmart = scorecard(&reserved_company("walmart").unwrap());
        assert_eq!(walmart.score, 80);
        assert_eq!(walmart.grade, Grade::B);
    }

    #[test]
    fn test_normalized_ceiling_grades_b() {
        let card = scorecard(&sample_record("Acme", 17));
        assert_eq!(card.score, 85);
        assert!((card.percentage - 85.0).abs() < f64::EPSILON);
        assert_eq!(card.grade, Grade::B);
        assert_eq!(card.grade_color, "#84cc16");
    }
}
