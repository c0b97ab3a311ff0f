use crate::calculator::domain::{
    EducationPath, LivingCost, LocationProfile, PathCategory, SchoolTier,
};

struct PathSeed {
    id: &'static str,
    name: &'static str,
    category: PathCategory,
    total_cost: f64,
    duration_months: u32,
    starting_salary: f64,
    employment_rate: f64,
    ai_risk: Option<u8>,
}

const PATHS: &[PathSeed] = &[
    PathSeed {
        id: "college_tech",
        name: "Computer Science Degree",
        category: PathCategory::Degree,
        total_cost: 120_000.0,
        duration_months: 48,
        starting_salary: 85_000.0,
        employment_rate: 0.87,
        ai_risk: Some(35),
    },
    PathSeed {
        id: "college_business",
        name: "Business Administration Degree",
        category: PathCategory::Degree,
        total_cost: 110_000.0,
        duration_months: 48,
        starting_salary: 60_000.0,
        employment_rate: 0.85,
        ai_risk: Some(45),
    },
    PathSeed {
        id: "college_liberal_arts",
        name: "Liberal Arts Degree",
        category: PathCategory::Degree,
        total_cost: 115_000.0,
        duration_months: 48,
        starting_salary: 42_000.0,
        employment_rate: 0.74,
        ai_risk: Some(30),
    },
    PathSeed {
        id: "college_nursing",
        name: "Nursing Degree (BSN)",
        category: PathCategory::Degree,
        total_cost: 100_000.0,
        duration_months: 48,
        starting_salary: 75_000.0,
        employment_rate: 0.95,
        ai_risk: Some(10),
    },
    PathSeed {
        id: "community_college",
        name: "Associate Degree",
        category: PathCategory::Degree,
        total_cost: 12_000.0,
        duration_months: 24,
        starting_salary: 40_000.0,
        employment_rate: 0.78,
        ai_risk: Some(40),
    },
    PathSeed {
        id: "mba",
        name: "MBA",
        category: PathCategory::GraduateDegree,
        total_cost: 140_000.0,
        duration_months: 24,
        starting_salary: 105_000.0,
        employment_rate: 0.88,
        ai_risk: Some(40),
    },
    PathSeed {
        id: "trade_electrician",
        name: "Electrician Program",
        category: PathCategory::Trade,
        total_cost: 15_000.0,
        duration_months: 12,
        starting_salary: 52_000.0,
        employment_rate: 0.92,
        ai_risk: Some(8),
    },
    PathSeed {
        id: "trade_plumbing",
        name: "Plumbing Program",
        category: PathCategory::Trade,
        total_cost: 12_000.0,
        duration_months: 12,
        starting_salary: 50_000.0,
        employment_rate: 0.93,
        ai_risk: Some(6),
    },
    PathSeed {
        id: "trade_welding",
        name: "Welding Certificate",
        category: PathCategory::Trade,
        total_cost: 10_000.0,
        duration_months: 9,
        starting_salary: 46_000.0,
        employment_rate: 0.90,
        ai_risk: Some(22),
    },
    PathSeed {
        id: "bootcamp_coding",
        name: "Coding Bootcamp",
        category: PathCategory::Bootcamp,
        total_cost: 15_000.0,
        duration_months: 4,
        starting_salary: 65_000.0,
        employment_rate: 0.71,
        ai_risk: Some(55),
    },
    PathSeed {
        id: "bootcamp_ux",
        name: "UX Design Bootcamp",
        category: PathCategory::Bootcamp,
        total_cost: 12_000.0,
        duration_months: 4,
        starting_salary: 58_000.0,
        employment_rate: 0.62,
        ai_risk: Some(60),
    },
    PathSeed {
        id: "cert_it_support",
        name: "IT Support Certification",
        category: PathCategory::Certification,
        total_cost: 3_000.0,
        duration_months: 6,
        starting_salary: 45_000.0,
        employment_rate: 0.80,
        ai_risk: Some(48),
    },
];

pub(super) fn paths() -> Vec<EducationPath> {
    PATHS
        .iter()
        .map(|seed| EducationPath {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            category: seed.category,
            total_cost: seed.total_cost,
            duration_months: seed.duration_months,
            starting_salary: seed.starting_salary,
            employment_rate: seed.employment_rate,
            ai_risk: seed.ai_risk,
        })
        .collect()
}

pub(super) fn locations() -> Vec<LocationProfile> {
    [
        ("usa_average", "USA Average", 1.0, 1.0),
        ("high_cost_city", "High-Cost City", 1.35, 1.25),
        ("low_cost_area", "Low-Cost Area", 0.85, 0.88),
        ("california", "California", 1.3, 1.2),
        ("new_york", "New York", 1.4, 1.3),
        ("texas", "Texas", 0.95, 0.98),
    ]
    .into_iter()
    .map(|(id, label, cost_multiplier, salary_multiplier)| LocationProfile {
        id: id.to_string(),
        label: label.to_string(),
        cost_multiplier,
        salary_multiplier,
    })
    .collect()
}

pub(super) fn school_tiers() -> Vec<SchoolTier> {
    [
        ("budget", "Budget / State School", 0.7),
        ("mid_tier", "Mid-Tier", 1.0),
        ("top_tier", "Top-Tier", 1.4),
        ("elite", "Elite / Ivy", 1.8),
    ]
    .into_iter()
    .map(|(id, label, tuition_multiplier)| SchoolTier {
        id: id.to_string(),
        label: label.to_string(),
        tuition_multiplier,
    })
    .collect()
}

pub(super) fn living_costs() -> Vec<LivingCost> {
    [
        ("at_home", "Living at Home", 400.0),
        ("on_campus", "On-Campus Housing", 1_250.0),
        ("shared_apartment", "Shared Apartment", 900.0),
        ("solo_apartment", "Solo Apartment", 1_600.0),
    ]
    .into_iter()
    .map(|(id, label, monthly_cost)| LivingCost {
        id: id.to_string(),
        label: label.to_string(),
        monthly_cost,
    })
    .collect()
}
