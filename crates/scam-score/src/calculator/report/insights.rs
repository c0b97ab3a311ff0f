use super::super::domain::{CalculationResult, EducationPath};
use super::super::scam_score::{calculate_scam_score, ScamScoreBreakdown};

const NEW_CAR_PRICE: f64 = 48_000.0;

/// Sentence naming the better (lower-scoring) of two paths, louder as the gap grows.
pub fn comparison_verdict(
    first: (&EducationPath, &CalculationResult),
    second: (&EducationPath, &CalculationResult),
) -> String {
    let first_score = calculate_scam_score(first.0, first.1).total_score;
    let second_score = calculate_scam_score(second.0, second.1).total_score;

    let ((winner, winner_score), (loser, loser_score)) = if first_score <= second_score {
        ((first.0, first_score), (second.0, second_score))
    } else {
        ((second.0, second_score), (first.0, first_score))
    };
    let gap = loser_score - winner_score;

    if gap == 0 {
        format!(
            "{} and {} are dead even at {}/100. Pick the one you actually want to do.",
            winner.name, loser.name, winner_score
        )
    } else if gap > 40 {
        format!(
            "{} destroys {} by {} points ({} vs {}). This isn't even close.",
            winner.name, loser.name, gap, winner_score, loser_score
        )
    } else if gap > 20 {
        format!(
            "{} beats {} by {} points ({} vs {}). The numbers clearly favor it.",
            winner.name, loser.name, gap, winner_score, loser_score
        )
    } else {
        format!(
            "{} edges out {} by {} point{} ({} vs {}). Closer than you'd think.",
            winner.name,
            loser.name,
            gap,
            if gap == 1 { "" } else { "s" },
            winner_score,
            loser_score
        )
    }
}

/// Attention-grabbing facts about a single path; empty when nothing stands out.
pub fn shock_stats(path: &EducationPath, result: &CalculationResult) -> Vec<String> {
    let mut stats = Vec::new();

    if result.total_cost > 100_000.0 {
        stats.push(format!(
            "Sticker price of {}: that's {:.1} brand-new cars",
            format_currency(result.total_cost),
            result.total_cost / NEW_CAR_PRICE
        ));
    }

    if result.opportunity_cost > 50_000.0 {
        stats.push(format!(
            "You give up {} in wages while you're in school",
            format_currency(result.opportunity_cost)
        ));
    }

    if let Some(ai_risk) = path.ai_risk.filter(|risk| *risk >= 50) {
        stats.push(format!(
            "{ai_risk}% of this job's tasks are exposed to AI automation"
        ));
    }

    if path.employment_rate < 0.8 {
        let unemployed = ((1.0 - path.employment_rate) * 100.0).round().max(0.0);
        stats.push(format!(
            "{unemployed:.0}% of graduates aren't working in their field"
        ));
    }

    if result.breakeven_months > 60 {
        stats.push(format!(
            "It takes {:.1} years of full paychecks just to break even",
            f64::from(result.breakeven_months) / 12.0
        ));
    }

    stats
}

pub fn share_text(path: &EducationPath, breakdown: &ScamScoreBreakdown) -> String {
    format!(
        "My {} got a Scam Score of {}/100 ({}). What's yours?",
        path.name,
        breakdown.total_score,
        breakdown.level().label()
    )
}

/// Whole-dollar amount with thousands separators, e.g. `$180,000` or `-$2,500`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }

    let rounded = amount.abs().round() as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if amount < 0.0 && rounded > 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::domain::PathCategory;

    fn path(name: &str, employment_rate: f64, ai_risk: Option<u8>) -> EducationPath {
        EducationPath {
            id: name.to_ascii_lowercase(),
            name: name.to_string(),
            category: PathCategory::Degree,
            total_cost: 50_000.0,
            duration_months: 24,
            starting_salary: 50_000.0,
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
            monthly_salary: 4_000.0,
            breakeven_months,
            net_worth_10_years: 0.0,
            opportunity_cost: 24.0 * 2_600.0,
            roi_percent,
            doubt_score: 0,
        }
    }

    #[test]
    fn verdict_uses_strongest_tier_for_large_gaps() {
        let good = path("Plumbing", 1.0, None);
        let bad = path("Art School", 0.5, Some(80));
        let verdict = comparison_verdict(
            (&bad, &result(250_000.0, -50.0, 120)),
            (&good, &result(10_000.0, 200.0, 3)),
        );
        assert!(verdict.starts_with("Plumbing destroys Art School"), "{verdict}");
    }

    #[test]
    fn verdict_middle_and_narrow_tiers() {
        let a = path("Alpha", 1.0, None);
        let b = path("Beta", 1.0, None);

        // 25 + 0 vs 0 + 0 on cost alone: 25 points apart.
        let middle = comparison_verdict(
            (&a, &result(0.0, 100.0, 0)),
            (&b, &result(200_000.0, 100.0, 0)),
        );
        assert!(middle.starts_with("Alpha beats Beta by 25 points"), "{middle}");

        let narrow = comparison_verdict(
            (&a, &result(16_000.0, 100.0, 0)),
            (&b, &result(0.0, 100.0, 0)),
        );
        assert!(narrow.starts_with("Beta edges out Alpha by 2 points"), "{narrow}");
    }

    #[test]
    fn verdict_tiers_require_strictly_larger_gaps() {
        let a = path("Alpha", 1.0, None);
        let b = path("Beta", 1.0, None);

        // Cost 25 plus time 15 (72 of 120 months) against a clean sheet.
        let forty = comparison_verdict(
            (&a, &result(0.0, 100.0, 0)),
            (&b, &result(200_000.0, 100.0, 72)),
        );
        assert!(forty.starts_with("Alpha beats Beta by 40 points"), "{forty}");

        let twenty = comparison_verdict(
            (&a, &result(0.0, 100.0, 0)),
            (&b, &result(160_000.0, 100.0, 0)),
        );
        assert!(
            twenty.starts_with("Alpha edges out Beta by 20 points"),
            "{twenty}"
        );
    }

    #[test]
    fn verdict_reports_ties() {
        let a = path("Alpha", 1.0, None);
        let b = path("Beta", 1.0, None);
        let verdict = comparison_verdict(
            (&a, &result(0.0, 100.0, 0)),
            (&b, &result(0.0, 100.0, 0)),
        );
        assert!(verdict.contains("dead even"));
    }

    #[test]
    fn shock_stats_fire_on_each_threshold() {
        let risky = path("Risky", 0.6, Some(70));
        let stats = shock_stats(&risky, &result(240_000.0, 0.0, 90));

        assert_eq!(stats.len(), 5);
        assert!(stats[0].contains("$240,000") && stats[0].contains("5.0"));
        assert!(stats[1].contains("$62,400"));
        assert!(stats[2].starts_with("70%"));
        assert!(stats[3].starts_with("40%"));
        assert!(stats[4].contains("7.5 years"));
    }

    #[test]
    fn shock_stats_can_be_empty() {
        let safe = path("Safe", 0.95, Some(10));
        let mut calm = result(20_000.0, 150.0, 6);
        calm.opportunity_cost = 10_000.0;
        assert!(shock_stats(&safe, &calm).is_empty());
    }

    #[test]
    fn currency_formatting_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1_000.0), "$1,000");
        assert_eq!(format_currency(180_000.0), "$180,000");
        assert_eq!(format_currency(-2_500.2), "-$2,500");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(f64::NAN), "$0");
    }

    #[test]
    fn share_text_names_path_and_level() {
        let breakdown = ScamScoreBreakdown {
            total_score: 72,
            cost: 25,
            roi: 25,
            time: 10,
            risk: 7,
            ai_risk: 5,
        };
        let text = share_text(&path("Film School", 0.5, None), &breakdown);
        assert_eq!(
            text,
            "My Film School got a Scam Score of 72/100 (Total Scam). What's yours?"
        );
    }
}
