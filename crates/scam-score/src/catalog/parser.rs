use super::CatalogImportError;
use crate::calculator::domain::{EducationPath, PathCategory};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct PathRow {
    id: String,
    name: String,
    category: String,
    total_cost: f64,
    duration_months: u32,
    starting_salary: f64,
    employment_rate: f64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    ai_risk: Option<String>,
}

impl PathRow {
    fn into_path(self, line: u64) -> Result<EducationPath, CatalogImportError> {
        let invalid = |reason: String| CatalogImportError::InvalidRow { line, reason };

        if self.id.is_empty() {
            return Err(invalid("id must not be empty".to_string()));
        }

        let category = PathCategory::parse(&self.category)
            .ok_or_else(|| invalid(format!("unknown category '{}'", self.category)))?;

        if !self.total_cost.is_finite() || self.total_cost < 0.0 {
            return Err(invalid(format!(
                "total_cost must be non-negative, got {}",
                self.total_cost
            )));
        }

        if self.duration_months == 0 {
            return Err(invalid("duration_months must be at least 1".to_string()));
        }

        if !self.starting_salary.is_finite() || self.starting_salary <= 0.0 {
            return Err(invalid(format!(
                "starting_salary must be positive, got {}",
                self.starting_salary
            )));
        }

        if !(0.0..=1.0).contains(&self.employment_rate) {
            return Err(invalid(format!(
                "employment_rate must be between 0 and 1, got {}",
                self.employment_rate
            )));
        }

        let ai_risk = match self.ai_risk.as_deref() {
            None => None,
            Some(raw) => match raw.parse::<u8>() {
                Ok(value) if value <= 100 => Some(value),
                _ => {
                    return Err(invalid(format!(
                        "ai_risk must be an integer between 0 and 100, got '{raw}'"
                    )))
                }
            },
        };

        let name = if self.name.is_empty() {
            self.id.clone()
        } else {
            self.name
        };

        Ok(EducationPath {
            id: self.id,
            name,
            category,
            total_cost: self.total_cost,
            duration_months: self.duration_months,
            starting_salary: self.starting_salary,
            employment_rate: self.employment_rate,
            ai_risk,
        })
    }
}

pub(crate) fn parse_paths<R: Read>(reader: R) -> Result<Vec<EducationPath>, CatalogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut record = csv::StringRecord::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut paths = Vec::new();

    while csv_reader.read_record(&mut record)? {
        let line = record.position().map_or(0, csv::Position::line);
        let row: PathRow = record.deserialize(Some(&headers))?;
        let path = row.into_path(line)?;

        if !seen.insert(path.id.clone()) {
            return Err(CatalogImportError::DuplicatePath(path.id));
        }
        paths.push(path);
    }

    if paths.is_empty() {
        return Err(CatalogImportError::Empty);
    }

    Ok(paths)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
