use super::domain::{
    CalculationResult, CalculatorInputs, LivingCost, LocationProfile, SchoolTier,
    BASELINE_MONTHLY_WAGE, HORIZON_MONTHS,
};
use super::scam_score::calculate_scam_score;
use crate::catalog::ReferenceCatalog;
use std::borrow::Cow;
use tracing::warn;

const ROI_FLOOR: f64 = -100.0;
const ROI_CEILING: f64 = 1_000.0;

/// Derive the cost/benefit figures for `inputs`.
///
/// Returns `None` when the path identifier is not in the catalog. Unknown
/// location, tier or living-cost identifiers fall back to neutral values.
pub fn calculate_roi(
    catalog: &ReferenceCatalog,
    inputs: &CalculatorInputs,
) -> Option<CalculationResult> {
    let path = catalog.path(&inputs.path)?;

    let location = catalog
        .location(&inputs.location)
        .map(Cow::Borrowed)
        .unwrap_or_else(|| {
            warn!(location = %inputs.location, "unknown location; using neutral multipliers");
            Cow::Owned(LocationProfile::neutral(&inputs.location))
        });
    let tier = catalog
        .school_tier(&inputs.school_tier)
        .map(Cow::Borrowed)
        .unwrap_or_else(|| {
            warn!(school_tier = %inputs.school_tier, "unknown school tier; using neutral multiplier");
            Cow::Owned(SchoolTier::neutral(&inputs.school_tier))
        });
    let living = catalog
        .living_cost(&inputs.living_cost)
        .map(Cow::Borrowed)
        .unwrap_or_else(|| {
            warn!(living_cost = %inputs.living_cost, "unknown living cost; excluding living expenses");
            Cow::Owned(LivingCost::neutral(&inputs.living_cost))
        });

    let duration = f64::from(path.duration_months);
    let horizon = f64::from(HORIZON_MONTHS);

    let tuition = path.total_cost * location.cost_multiplier * tier.tuition_multiplier;
    let living_expenses = living.monthly_cost * duration * location.cost_multiplier;
    let total_cost = tuition + living_expenses;

    let scholarships = inputs.scholarship_amount();
    let adjusted_cost = (total_cost - scholarships).max(0.0);

    let monthly_salary = path.starting_salary * location.salary_multiplier / 12.0;
    let breakeven_months = breakeven_months(adjusted_cost, monthly_salary);

    let net_worth_10_years = horizon * monthly_salary * path.employment_rate - adjusted_cost;

    let baseline_monthly = BASELINE_MONTHLY_WAGE * location.salary_multiplier;
    let opportunity_cost = duration * baseline_monthly;
    let roi_percent = roi_percent(
        net_worth_10_years - horizon * baseline_monthly,
        adjusted_cost + opportunity_cost,
    );

    let mut result = CalculationResult {
        path_id: path.id.clone(),
        total_cost,
        scholarships_applied: scholarships.min(total_cost.max(0.0)),
        adjusted_cost,
        monthly_salary,
        breakeven_months,
        net_worth_10_years,
        opportunity_cost,
        roi_percent,
        doubt_score: 0,
    };
    result.doubt_score = calculate_scam_score(path, &result).total_score;

    Some(result)
}

/// Whole months of salary needed to cover `adjusted_cost`, at least one.
///
/// Saturates at `u32::MAX`; no other ceiling applies.
fn breakeven_months(adjusted_cost: f64, monthly_salary: f64) -> u32 {
    let months = (adjusted_cost / monthly_salary.max(1.0)).ceil();
    if months.is_nan() {
        return u32::MAX;
    }
    months.clamp(1.0, f64::from(u32::MAX)) as u32
}

/// Ten-year gain over the no-degree baseline as a percentage of the full investment.
fn roi_percent(gain_over_baseline: f64, investment: f64) -> f64 {
    if investment <= 0.0 {
        return ROI_CEILING;
    }
    let roi = gain_over_baseline / investment * 100.0;
    if roi.is_nan() {
        return ROI_FLOOR;
    }
    roi.clamp(ROI_FLOOR, ROI_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(scholarships: f64) -> CalculatorInputs {
        CalculatorInputs::new("college_tech", "usa_average", "mid_tier", "on_campus", scholarships)
    }

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn computes_reference_example() {
        let catalog = ReferenceCatalog::standard();
        let result = calculate_roi(&catalog, &inputs(10_000.0)).expect("known path");

        // 120k tuition + 48 months of on-campus housing at 1,250.
        approx(result.total_cost, 180_000.0);
        approx(result.adjusted_cost, 170_000.0);
        approx(result.scholarships_applied, 10_000.0);
        approx(result.monthly_salary, 85_000.0 / 12.0);
        assert_eq!(result.breakeven_months, 24);
        approx(result.opportunity_cost, 48.0 * 2_600.0);
        approx(
            result.net_worth_10_years,
            120.0 * (85_000.0 / 12.0) * 0.87 - 170_000.0,
        );
        assert!(result.doubt_score <= 100);
    }

    #[test]
    fn unknown_path_yields_none() {
        let catalog = ReferenceCatalog::standard();
        let mut unknown = inputs(0.0);
        unknown.path = "astronaut_academy".to_string();
        assert!(calculate_roi(&catalog, &unknown).is_none());
    }

    #[test]
    fn scholarships_reduce_cost_by_exact_delta() {
        let catalog = ReferenceCatalog::standard();
        let without = calculate_roi(&catalog, &inputs(0.0)).expect("result");
        let with = calculate_roi(&catalog, &inputs(25_000.0)).expect("result");

        approx(without.adjusted_cost, with.adjusted_cost + 25_000.0);
        assert!(with.breakeven_months < without.breakeven_months);
        assert!(with.net_worth_10_years > without.net_worth_10_years);
    }

    #[test]
    fn scholarships_beyond_cost_floor_at_zero() {
        let catalog = ReferenceCatalog::standard();
        let mut cheap = inputs(100_000.0);
        cheap.path = "cert_it_support".to_string();
        cheap.living_cost = "at_home".to_string();

        let result = calculate_roi(&catalog, &cheap).expect("result");
        approx(result.adjusted_cost, 0.0);
        approx(result.scholarships_applied, result.total_cost);
        assert_eq!(result.breakeven_months, 1);
        assert!(result.roi_percent > 0.0);
    }

    #[test]
    fn unknown_modifiers_fall_back_to_neutral_values() {
        let catalog = ReferenceCatalog::standard();
        let mut odd = inputs(0.0);
        odd.location = "moon_base".to_string();
        odd.school_tier = "mystery".to_string();
        odd.living_cost = "tent".to_string();

        let result = calculate_roi(&catalog, &odd).expect("path still resolves");
        approx(result.total_cost, 120_000.0);
        approx(result.monthly_salary, 85_000.0 / 12.0);
    }

    #[test]
    fn location_and_tier_multiply_costs() {
        let catalog = ReferenceCatalog::standard();
        let mut pricey = inputs(0.0);
        pricey.location = "new_york".to_string();
        pricey.school_tier = "elite".to_string();
        pricey.living_cost = "at_home".to_string();

        let result = calculate_roi(&catalog, &pricey).expect("result");
        approx(result.total_cost, 120_000.0 * 1.4 * 1.8 + 400.0 * 48.0 * 1.4);
        approx(result.monthly_salary, 85_000.0 * 1.3 / 12.0);
    }

    #[test]
    fn breakeven_is_bounded() {
        assert_eq!(breakeven_months(0.0, 5_000.0), 1);
        assert_eq!(breakeven_months(10_001.0, 5_000.0), 3);
        assert_eq!(breakeven_months(1.0e12, 0.0), u32::MAX);
        assert_eq!(breakeven_months(f64::NAN, 5_000.0), u32::MAX);
    }

    #[test]
    fn breakeven_keeps_counting_past_a_century() {
        assert_eq!(breakeven_months(2_004_800.0, 1_000.0), 2_005);
        assert_eq!(breakeven_months(1_904_800.0, 1_000.0), 1_905);
    }

    #[test]
    fn roi_is_clamped_and_handles_zero_investment() {
        assert_eq!(roi_percent(10.0, 0.0), ROI_CEILING);
        assert_eq!(roi_percent(-1.0e9, 1.0), ROI_FLOOR);
        assert_eq!(roi_percent(1.0e9, 1.0), ROI_CEILING);
        approx(roi_percent(50.0, 100.0), 50.0);
    }
}
