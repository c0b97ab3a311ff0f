mod insights;
pub mod views;

pub use insights::{comparison_verdict, format_currency, share_text, shock_stats};
pub use views::{ComparisonReport, ScamReport};

use super::domain::CalculatorInputs;
use super::roi::calculate_roi;
use super::scam_score::calculate_scam_score;
use super::timeline::{net_worth_timeline, payoff_schedule};
use super::validation::validate;
use crate::catalog::ReferenceCatalog;
use std::sync::Arc;
use tracing::debug;

/// The two ways a calculation request can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculationError {
    #[error("invalid calculator inputs: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("unknown education path '{0}'")]
    UnknownPath(String),
}

/// Stateless pipeline: validate, calculate, score, then decorate for display.
#[derive(Debug, Clone)]
pub struct ScamScoreEngine {
    catalog: Arc<ReferenceCatalog>,
}

impl ScamScoreEngine {
    pub fn new(catalog: Arc<ReferenceCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    pub fn evaluate(&self, inputs: &CalculatorInputs) -> Result<ScamReport, CalculationError> {
        let errors = validate(inputs);
        if !errors.is_empty() {
            return Err(CalculationError::Validation(errors));
        }

        let path = self
            .catalog
            .path(&inputs.path)
            .ok_or_else(|| CalculationError::UnknownPath(inputs.path.clone()))?;
        let result = calculate_roi(&self.catalog, inputs)
            .ok_or_else(|| CalculationError::UnknownPath(inputs.path.clone()))?;
        let scam_score = calculate_scam_score(path, &result);
        let level = scam_score.level();

        debug!(
            path = %path.id,
            score = scam_score.total_score,
            breakeven_months = result.breakeven_months,
            "calculated scam score"
        );

        Ok(ScamReport {
            path: path.clone(),
            shock_stats: shock_stats(path, &result),
            share_text: share_text(path, &scam_score),
            net_worth_timeline: net_worth_timeline(path, &result),
            payoff_schedule: payoff_schedule(&result),
            result,
            scam_score,
            level,
            level_label: level.label(),
        })
    }

    pub fn compare(
        &self,
        first: &CalculatorInputs,
        second: &CalculatorInputs,
    ) -> Result<ComparisonReport, CalculationError> {
        let first = self.evaluate(first)?;
        let second = self.evaluate(second)?;

        let verdict = comparison_verdict(
            (&first.path, &first.result),
            (&second.path, &second.result),
        );
        let first_score = first.scam_score.total_score;
        let second_score = second.scam_score.total_score;
        let winner = match first_score.cmp(&second_score) {
            std::cmp::Ordering::Less => Some(first.path.id.clone()),
            std::cmp::Ordering::Greater => Some(second.path.id.clone()),
            std::cmp::Ordering::Equal => None,
        };

        Ok(ComparisonReport {
            winner,
            score_gap: first_score.abs_diff(second_score),
            verdict,
            first,
            second,
        })
    }
}
