use super::domain::{CalculationResult, EducationPath, HORIZON_MONTHS};
use serde::Serialize;

/// Longest payoff schedule produced; later months are left off.
pub const MAX_SCHEDULE_MONTHS: u32 = 1_200;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NetWorthPoint {
    pub year: u32,
    pub net_worth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayoffMonth {
    pub month: u32,
    pub payment: f64,
    pub remaining_balance: f64,
}

/// Yearly projection from completion (year 0) to the ten-year horizon.
pub fn net_worth_timeline(path: &EducationPath, result: &CalculationResult) -> Vec<NetWorthPoint> {
    let expected_monthly = result.monthly_salary * path.employment_rate;
    (0..=HORIZON_MONTHS / 12)
        .map(|year| NetWorthPoint {
            year,
            net_worth: f64::from(year * 12) * expected_monthly - result.adjusted_cost,
        })
        .collect()
}

/// Month-by-month balance when every paycheck goes toward the adjusted cost.
///
/// Stops after [`MAX_SCHEDULE_MONTHS`]; a longer break-even leaves a balance
/// on the last entry.
pub fn payoff_schedule(result: &CalculationResult) -> Vec<PayoffMonth> {
    if result.adjusted_cost <= 0.0 || result.monthly_salary <= 0.0 {
        return Vec::new();
    }

    let months = result.breakeven_months.min(MAX_SCHEDULE_MONTHS);
    let mut balance = result.adjusted_cost;
    let mut schedule = Vec::with_capacity(months as usize);
    for month in 1..=months {
        let payment = if month == result.breakeven_months {
            balance
        } else {
            result.monthly_salary.min(balance)
        };
        balance = (balance - payment).max(0.0);
        schedule.push(PayoffMonth {
            month,
            payment,
            remaining_balance: balance,
        });
    }

    schedule
}
