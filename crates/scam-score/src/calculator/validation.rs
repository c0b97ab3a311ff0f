use super::domain::{CalculatorInputs, MAX_SCHOLARSHIPS};

pub const MISSING_PATH: &str = "Please select an education path";
pub const MISSING_LOCATION: &str = "Please select a location";
pub const MISSING_SCHOOL_TIER: &str = "Please select a school tier";
pub const MISSING_LIVING_COST: &str = "Please select a living situation";
pub const NEGATIVE_SCHOLARSHIPS: &str = "Scholarship amount must be a positive number";
pub const EXCESSIVE_SCHOLARSHIPS: &str = "Scholarships cannot exceed $100,000";

/// Check every rule and return all violations; an empty list means the inputs are usable.
pub fn validate(inputs: &CalculatorInputs) -> Vec<String> {
    let mut errors = Vec::new();

    let selections = [
        (&inputs.path, MISSING_PATH),
        (&inputs.location, MISSING_LOCATION),
        (&inputs.school_tier, MISSING_SCHOOL_TIER),
        (&inputs.living_cost, MISSING_LIVING_COST),
    ];
    for (value, message) in selections {
        if value.trim().is_empty() {
            errors.push(message.to_string());
        }
    }

    match inputs.scholarships {
        Some(amount) if amount.is_finite() && amount >= 0.0 => {
            if amount > MAX_SCHOLARSHIPS {
                errors.push(EXCESSIVE_SCHOLARSHIPS.to_string());
            }
        }
        _ => errors.push(NEGATIVE_SCHOLARSHIPS.to_string()),
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_inputs() -> CalculatorInputs {
        CalculatorInputs::new("college_tech", "usa_average", "mid_tier", "on_campus", 10_000.0)
    }

    #[test]
    fn complete_inputs_pass() {
        assert!(validate(&valid_inputs()).is_empty());
    }

    #[test]
    fn blank_inputs_report_every_violation() {
        let errors = validate(&CalculatorInputs::default());
        assert_eq!(
            errors,
            vec![
                MISSING_PATH,
                MISSING_LOCATION,
                MISSING_SCHOOL_TIER,
                MISSING_LIVING_COST,
                NEGATIVE_SCHOLARSHIPS,
            ]
        );
    }

    #[test]
    fn whitespace_selection_counts_as_missing() {
        let mut inputs = valid_inputs();
        inputs.location = "   ".to_string();
        assert_eq!(validate(&inputs), vec![MISSING_LOCATION]);
    }

    #[test]
    fn scholarship_bounds_are_inclusive() {
        for amount in [0.0, MAX_SCHOLARSHIPS] {
            assert!(validate(&valid_inputs().with_scholarships(amount)).is_empty());
        }

        assert_eq!(
            validate(&valid_inputs().with_scholarships(100_000.01)),
            vec![EXCESSIVE_SCHOLARSHIPS]
        );
        assert_eq!(
            validate(&valid_inputs().with_scholarships(-0.01)),
            vec![NEGATIVE_SCHOLARSHIPS]
        );
    }

    #[test]
    fn non_numeric_scholarships_fail_positivity() {
        let mut inputs = valid_inputs();
        inputs.scholarships = None;
        assert_eq!(validate(&inputs), vec![NEGATIVE_SCHOLARSHIPS]);

        inputs.scholarships = Some(f64::NAN);
        assert_eq!(validate(&inputs), vec![NEGATIVE_SCHOLARSHIPS]);

        inputs.scholarships = Some(f64::INFINITY);
        assert_eq!(validate(&inputs), vec![NEGATIVE_SCHOLARSHIPS]);
    }
}
