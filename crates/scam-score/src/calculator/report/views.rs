use super::super::domain::{CalculationResult, EducationPath};
use super::super::scam_score::{ScamLevel, ScamScoreBreakdown};
use super::super::timeline::{NetWorthPoint, PayoffMonth};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScamReport {
    pub path: EducationPath,
    pub result: CalculationResult,
    pub scam_score: ScamScoreBreakdown,
    pub level: ScamLevel,
    pub level_label: &'static str,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shock_stats: Vec<String>,
    pub share_text: String,
    pub net_worth_timeline: Vec<NetWorthPoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payoff_schedule: Vec<PayoffMonth>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub first: ScamReport,
    pub second: ScamReport,
    /// `None` when both paths score the same.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    pub score_gap: u8,
    pub verdict: String,
}
