//! Education ROI calculator and Scam Score.
//!
//! Everything below is pure arithmetic over a [`ReferenceCatalog`](crate::catalog::ReferenceCatalog):
//! `validate` checks a form submission, `calculate_roi` derives the cost/benefit
//! figures and `calculate_scam_score` buckets them into weighted sub-scores.
//! [`ScamScoreEngine`] chains the three and decorates the result for display.

pub mod domain;
pub mod report;
pub mod roi;
pub mod router;
pub mod scam_score;
pub mod timeline;
pub mod validation;

pub use domain::{
    CalculationResult, CalculatorInputs, EducationPath, LivingCost, LocationProfile,
    PathCategory, SchoolTier,
};
pub use report::{
    comparison_verdict, format_currency, share_text, shock_stats, CalculationError,
    ComparisonReport, ScamReport, ScamScoreEngine,
};
pub use roi::calculate_roi;
pub use router::{calculator_router, ComparisonRequest};
pub use scam_score::{calculate_scam_score, clamp_score, ScamLevel, ScamScoreBreakdown};
pub use timeline::{
    net_worth_timeline, payoff_schedule, NetWorthPoint, PayoffMonth, MAX_SCHEDULE_MONTHS,
};
pub use validation::validate;
