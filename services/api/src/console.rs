use crate::infra::{catalog_source, load_engine};
use clap::Args;
use scam_score::calculator::{format_currency, CalculatorInputs, ComparisonReport, ScamReport};
use scam_score::error::AppError;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub(crate) struct SelectionArgs {
    /// Education path identifier (see `paths`)
    #[arg(long)]
    pub(crate) path: String,
    /// Location identifier
    #[arg(long, default_value = "usa_average")]
    pub(crate) location: String,
    /// School tier identifier
    #[arg(long, default_value = "mid_tier")]
    pub(crate) school_tier: String,
    /// Living situation identifier
    #[arg(long, default_value = "on_campus")]
    pub(crate) living_cost: String,
    /// Scholarship and grant total in USD
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub(crate) scholarships: f64,
}

impl SelectionArgs {
    fn inputs(&self) -> CalculatorInputs {
        CalculatorInputs::new(
            self.path.clone(),
            self.location.clone(),
            self.school_tier.clone(),
            self.living_cost.clone(),
            self.scholarships,
        )
    }
}

#[derive(Args, Debug)]
pub(crate) struct CalculateArgs {
    #[command(flatten)]
    pub(crate) selection: SelectionArgs,
    /// Optional CSV replacing the built-in education paths
    #[arg(long)]
    pub(crate) paths_csv: Option<PathBuf>,
    /// Print the JSON payload instead of the console report
    #[arg(long)]
    pub(crate) json: bool,
    /// Include the month-by-month payoff schedule
    #[arg(long)]
    pub(crate) schedule: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    #[command(flatten)]
    pub(crate) selection: SelectionArgs,
    /// Path to compare against; other selections default to the first path's
    #[arg(long)]
    pub(crate) against: String,
    #[arg(long)]
    pub(crate) against_location: Option<String>,
    #[arg(long)]
    pub(crate) against_school_tier: Option<String>,
    #[arg(long)]
    pub(crate) against_living_cost: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) against_scholarships: Option<f64>,
    /// Optional CSV replacing the built-in education paths
    #[arg(long)]
    pub(crate) paths_csv: Option<PathBuf>,
    /// Print the JSON payload instead of the console report
    #[arg(long)]
    pub(crate) json: bool,
}

impl CompareArgs {
    pub(crate) fn inputs(&self) -> (CalculatorInputs, CalculatorInputs) {
        let first = self.selection.inputs();
        let second = CalculatorInputs::new(
            self.against.clone(),
            self.against_location
                .clone()
                .unwrap_or_else(|| first.location.clone()),
            self.against_school_tier
                .clone()
                .unwrap_or_else(|| first.school_tier.clone()),
            self.against_living_cost
                .clone()
                .unwrap_or_else(|| first.living_cost.clone()),
            self.against_scholarships
                .unwrap_or(self.selection.scholarships),
        );
        (first, second)
    }
}

#[derive(Args, Debug)]
pub(crate) struct PathsArgs {
    /// Optional CSV replacing the built-in education paths
    #[arg(long)]
    pub(crate) paths_csv: Option<PathBuf>,
}

pub(crate) fn run_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let engine = load_engine(catalog_source(args.paths_csv))?;
    let report = engine.evaluate(&args.selection.inputs())?;

    if args.json {
        print_json(&report);
    } else {
        render_report(&report, args.schedule);
    }
    Ok(())
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let (first, second) = args.inputs();
    let engine = load_engine(catalog_source(args.paths_csv))?;
    let comparison = engine.compare(&first, &second)?;

    if args.json {
        print_json(&comparison);
    } else {
        render_comparison(&comparison);
    }
    Ok(())
}

pub(crate) fn run_paths(args: PathsArgs) -> Result<(), AppError> {
    let engine = load_engine(catalog_source(args.paths_csv))?;
    let catalog = engine.catalog();

    println!("Education paths");
    for path in catalog.paths() {
        println!(
            "- {} | {} ({}) | {} over {} months | {} starting salary",
            path.id,
            path.name,
            path.category.label(),
            format_currency(path.total_cost),
            path.duration_months,
            format_currency(path.starting_salary)
        );
    }

    println!("\nLocations");
    for location in catalog.locations() {
        println!(
            "- {} | {} | cost x{:.2}, salary x{:.2}",
            location.id, location.label, location.cost_multiplier, location.salary_multiplier
        );
    }

    println!("\nSchool tiers");
    for tier in catalog.school_tiers() {
        println!(
            "- {} | {} | tuition x{:.2}",
            tier.id, tier.label, tier.tuition_multiplier
        );
    }

    println!("\nLiving situations");
    for living in catalog.living_costs() {
        println!(
            "- {} | {} | {}/month",
            living.id,
            living.label,
            format_currency(living.monthly_cost)
        );
    }

    Ok(())
}

fn print_json<T: Serialize>(payload: &T) {
    match serde_json::to_string_pretty(payload) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("JSON payload unavailable: {err}"),
    }
}

fn render_report(report: &ScamReport, include_schedule: bool) {
    let result = &report.result;
    let score = &report.scam_score;

    println!("{} ({})", report.path.name, report.path.category.label());
    println!(
        "Scam Score: {}/100 ({})",
        score.total_score, report.level_label
    );
    println!(
        "- cost {}/25 | roi {}/25 | time {}/25 | employment risk {}/15 | AI risk {}/10",
        score.cost, score.roi, score.time, score.risk, score.ai_risk
    );

    println!("\nCost breakdown");
    println!("- Total cost: {}", format_currency(result.total_cost));
    println!(
        "- Scholarships applied: {}",
        format_currency(result.scholarships_applied)
    );
    println!("- Adjusted cost: {}", format_currency(result.adjusted_cost));
    println!(
        "- Opportunity cost: {}",
        format_currency(result.opportunity_cost)
    );

    println!("\nPayoff");
    println!(
        "- Monthly salary: {}",
        format_currency(result.monthly_salary)
    );
    println!("- Break-even: {} months", result.breakeven_months);
    println!(
        "- Net worth after 10 years: {}",
        format_currency(result.net_worth_10_years)
    );
    println!("- ROI vs. no degree: {:.0}%", result.roi_percent);

    println!("\nNet worth by year");
    for point in &report.net_worth_timeline {
        println!("- Year {}: {}", point.year, format_currency(point.net_worth));
    }

    if !report.shock_stats.is_empty() {
        println!("\nShock stats");
        for stat in &report.shock_stats {
            println!("- {stat}");
        }
    }

    if include_schedule && !report.payoff_schedule.is_empty() {
        println!("\nPayoff schedule");
        for month in &report.payoff_schedule {
            println!(
                "- Month {}: paid {} | remaining {}",
                month.month,
                format_currency(month.payment),
                format_currency(month.remaining_balance)
            );
        }
    }

    println!("\nShare: {}", report.share_text);
}

fn render_comparison(comparison: &ComparisonReport) {
    println!("Head to head");
    for report in [&comparison.first, &comparison.second] {
        println!(
            "- {}: {}/100 ({}) | adjusted cost {} | break-even {} months",
            report.path.name,
            report.scam_score.total_score,
            report.level_label,
            format_currency(report.result.adjusted_cost),
            report.result.breakeven_months
        );
    }
    println!("\n{}", comparison.verdict);
}
