use super::domain::{CalculationResult, EducationPath, HORIZON_MONTHS};
use serde::{Deserialize, Serialize};

pub const COST_POINTS: f64 = 25.0;
pub const ROI_POINTS: f64 = 25.0;
pub const TIME_POINTS: f64 = 25.0;
pub const RISK_POINTS: f64 = 15.0;
pub const AI_RISK_POINTS: f64 = 10.0;

/// Total cost at which the cost sub-score saturates.
const COST_CEILING: f64 = 200_000.0;

/// Weighted 0-100 score; higher means worse value for money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScamScoreBreakdown {
    pub total_score: u8,
    pub cost: u8,
    pub roi: u8,
    pub time: u8,
    pub risk: u8,
    pub ai_risk: u8,
}

impl ScamScoreBreakdown {
    pub fn level(&self) -> ScamLevel {
        ScamLevel::from_score(self.total_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScamLevel {
    Legit,
    Questionable,
    Sketchy,
    Scam,
}

impl ScamLevel {
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..=29 => Self::Legit,
            30..=49 => Self::Questionable,
            50..=69 => Self::Sketchy,
            _ => Self::Scam,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Legit => "Legit",
            Self::Questionable => "Questionable",
            Self::Sketchy => "Sketchy",
            Self::Scam => "Total Scam",
        }
    }
}

/// Bound `value` to `[0, max]`; NaN counts as 0.
pub fn clamp_score(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

pub fn calculate_scam_score(path: &EducationPath, result: &CalculationResult) -> ScamScoreBreakdown {
    let cost = clamp_score(result.total_cost / COST_CEILING * COST_POINTS, COST_POINTS);
    let roi = clamp_score(ROI_POINTS - result.roi_percent / 4.0, ROI_POINTS);
    let time = clamp_score(
        f64::from(result.breakeven_months) / f64::from(HORIZON_MONTHS) * TIME_POINTS,
        TIME_POINTS,
    );
    let risk = clamp_score((1.0 - path.employment_rate) * RISK_POINTS, RISK_POINTS);
    let ai_risk = clamp_score(
        f64::from(path.ai_risk.unwrap_or(0)) / 10.0,
        AI_RISK_POINTS,
    );

    let total = clamp_score((cost + roi + time + risk + ai_risk).round(), 100.0);

    ScamScoreBreakdown {
        total_score: total as u8,
        cost: cost.round() as u8,
        roi: roi.round() as u8,
        time: time.round() as u8,
        risk: risk.round() as u8,
        ai_risk: ai_risk.round() as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::domain::PathCategory;

    fn path(employment_rate: f64, ai_risk: Option<u8>) -> EducationPath {
        EducationPath {
            id: "fixture".to_string(),
            name: "Fixture Path".to_string(),
            category: PathCategory::Degree,
            total_cost: 100_000.0,
            duration_months: 48,
            starting_salary: 60_000.0,
            employment_rate,
            ai_risk,
        }
    }

    fn result(total_cost: f64, roi_percent: f64, breakeven_months: u32) -> CalculationResult {
        CalculationResult {
            path_id: "fixture".to_string(),
            total_cost,
            scholarships_applied: 0.0,
            adjusted_cost: total_cost,
            monthly_salary: 5_000.0,
            breakeven_months,
            net_worth_10_years: 0.0,
            opportunity_cost: 0.0,
            roi_percent,
            doubt_score: 0,
        }
    }

    #[test]
    fn sub_scores_follow_weighting() {
        let breakdown = calculate_scam_score(&path(0.8, Some(40)), &result(100_000.0, 40.0, 60));

        assert_eq!(breakdown.cost, 13); // 12.5
        assert_eq!(breakdown.roi, 15);
        assert_eq!(breakdown.time, 13); // 12.5
        assert_eq!(breakdown.risk, 3);
        assert_eq!(breakdown.ai_risk, 4);
        // 12.5 + 15 + 12.5 + 3 + 4
        assert_eq!(breakdown.total_score, 47);
        assert_eq!(breakdown.level(), ScamLevel::Questionable);
    }

    #[test]
    fn extreme_inputs_saturate_each_range() {
        let worst = calculate_scam_score(&path(0.0, Some(100)), &result(1.0e9, -1.0e6, u32::MAX));
        assert_eq!(
            (worst.cost, worst.roi, worst.time, worst.risk, worst.ai_risk),
            (25, 25, 25, 15, 10)
        );
        assert_eq!(worst.total_score, 100);
        assert_eq!(worst.level(), ScamLevel::Scam);

        let best = calculate_scam_score(&path(1.0, None), &result(-5_000.0, 1.0e6, 0));
        assert_eq!(best.total_score, 0);
        assert_eq!(best.level(), ScamLevel::Legit);
    }

    #[test]
    fn nan_inputs_never_escape_bounds() {
        let breakdown =
            calculate_scam_score(&path(f64::NAN, None), &result(f64::NAN, f64::NAN, 12));
        assert_eq!(breakdown.cost, 0);
        assert_eq!(breakdown.roi, 0);
        assert_eq!(breakdown.risk, 0);
        assert!(breakdown.total_score <= 100);
    }

    #[test]
    fn employment_rate_above_one_does_not_go_negative() {
        let breakdown = calculate_scam_score(&path(1.4, None), &result(0.0, 100.0, 1));
        assert_eq!(breakdown.risk, 0);
    }

    #[test]
    fn levels_bucket_by_threshold() {
        assert_eq!(ScamLevel::from_score(29), ScamLevel::Legit);
        assert_eq!(ScamLevel::from_score(30), ScamLevel::Questionable);
        assert_eq!(ScamLevel::from_score(50), ScamLevel::Sketchy);
        assert_eq!(ScamLevel::from_score(70), ScamLevel::Scam);
        assert_eq!(ScamLevel::Sketchy.label(), "Sketchy");
    }
}
