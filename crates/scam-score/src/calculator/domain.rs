use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Largest scholarship amount the calculator accepts, in USD.
pub const MAX_SCHOLARSHIPS: f64 = 100_000.0;

/// Assumed monthly wage of someone who skips the path entirely.
pub const BASELINE_MONTHLY_WAGE: f64 = 2_600.0;

/// Projection horizon used for net worth and ROI figures.
pub const HORIZON_MONTHS: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathCategory {
    Degree,
    GraduateDegree,
    Trade,
    Bootcamp,
    Certification,
}

impl PathCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Degree => "Degree",
            Self::GraduateDegree => "Graduate Degree",
            Self::Trade => "Trade",
            Self::Bootcamp => "Bootcamp",
            Self::Certification => "Certification",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "degree" => Some(Self::Degree),
            "graduate_degree" | "graduate" => Some(Self::GraduateDegree),
            "trade" => Some(Self::Trade),
            "bootcamp" => Some(Self::Bootcamp),
            "certification" | "cert" => Some(Self::Certification),
            _ => None,
        }
    }
}

/// Reference record for a single course of study or trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationPath {
    pub id: String,
    pub name: String,
    pub category: PathCategory,
    /// Nominal program cost before location and tier multipliers.
    pub total_cost: f64,
    pub duration_months: u32,
    /// Annual salary at completion.
    pub starting_salary: f64,
    pub employment_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_risk: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationProfile {
    pub id: String,
    pub label: String,
    pub cost_multiplier: f64,
    pub salary_multiplier: f64,
}

impl LocationProfile {
    pub(crate) fn neutral(id: &str) -> Self {
        Self {
            id: id.to_string(),
            label: id.to_string(),
            cost_multiplier: 1.0,
            salary_multiplier: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolTier {
    pub id: String,
    pub label: String,
    pub tuition_multiplier: f64,
}

impl SchoolTier {
    pub(crate) fn neutral(id: &str) -> Self {
        Self {
            id: id.to_string(),
            label: id.to_string(),
            tuition_multiplier: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivingCost {
    pub id: String,
    pub label: String,
    pub monthly_cost: f64,
}

impl LivingCost {
    pub(crate) fn neutral(id: &str) -> Self {
        Self {
            id: id.to_string(),
            label: id.to_string(),
            monthly_cost: 0.0,
        }
    }
}

/// Selections submitted from the calculator form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub school_tier: String,
    #[serde(default)]
    pub living_cost: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub scholarships: Option<f64>,
}

impl CalculatorInputs {
    pub fn new(
        path: impl Into<String>,
        location: impl Into<String>,
        school_tier: impl Into<String>,
        living_cost: impl Into<String>,
        scholarships: f64,
    ) -> Self {
        Self {
            path: path.into(),
            location: location.into(),
            school_tier: school_tier.into(),
            living_cost: living_cost.into(),
            scholarships: Some(scholarships),
        }
    }

    pub fn with_scholarships(mut self, scholarships: f64) -> Self {
        self.scholarships = Some(scholarships);
        self
    }

    /// Scholarship amount usable in arithmetic: missing, non-finite or negative values count as 0.
    pub fn scholarship_amount(&self) -> f64 {
        match self.scholarships {
            Some(value) if value.is_finite() => value.max(0.0),
            _ => 0.0,
        }
    }
}

/// Form fields arrive as numbers or strings; anything unparseable becomes `None`
/// so validation can report it instead of the decoder rejecting the request.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(raw)) => raw.trim().replace(['$', ','], "").parse::<f64>().ok(),
        _ => None,
    })
}

/// Derived cost/benefit figures for one set of selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub path_id: String,
    pub total_cost: f64,
    pub scholarships_applied: f64,
    pub adjusted_cost: f64,
    pub monthly_salary: f64,
    pub breakeven_months: u32,
    pub net_worth_10_years: f64,
    pub opportunity_cost: f64,
    pub roi_percent: f64,
    pub doubt_score: u8,
}
