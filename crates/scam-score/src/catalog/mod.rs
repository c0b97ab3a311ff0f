//! Immutable reference tables the calculator looks selections up in.

mod parser;
mod standard;

use crate::calculator::domain::{EducationPath, LivingCost, LocationProfile, SchoolTier};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Lookup tables for paths, locations, school tiers and living costs.
///
/// Built once at startup and shared read-only; every lookup returns `None`
/// for identifiers it does not know.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceCatalog {
    paths: BTreeMap<String, EducationPath>,
    locations: BTreeMap<String, LocationProfile>,
    school_tiers: BTreeMap<String, SchoolTier>,
    living_costs: BTreeMap<String, LivingCost>,
}

impl ReferenceCatalog {
    pub fn standard() -> Self {
        Self {
            paths: keyed(standard::paths(), |path| &path.id),
            locations: keyed(standard::locations(), |location| &location.id),
            school_tiers: keyed(standard::school_tiers(), |tier| &tier.id),
            living_costs: keyed(standard::living_costs(), |living| &living.id),
        }
    }

    /// Replace the path table, keeping the other lookup tables.
    pub fn with_paths(mut self, paths: Vec<EducationPath>) -> Self {
        self.paths = keyed(paths, |path| &path.id);
        self
    }

    pub fn path(&self, id: &str) -> Option<&EducationPath> {
        self.paths.get(id.trim())
    }

    pub fn location(&self, id: &str) -> Option<&LocationProfile> {
        self.locations.get(id.trim())
    }

    pub fn school_tier(&self, id: &str) -> Option<&SchoolTier> {
        self.school_tiers.get(id.trim())
    }

    pub fn living_cost(&self, id: &str) -> Option<&LivingCost> {
        self.living_costs.get(id.trim())
    }

    pub fn paths(&self) -> impl Iterator<Item = &EducationPath> {
        self.paths.values()
    }

    pub fn locations(&self) -> impl Iterator<Item = &LocationProfile> {
        self.locations.values()
    }

    pub fn school_tiers(&self) -> impl Iterator<Item = &SchoolTier> {
        self.school_tiers.values()
    }

    pub fn living_costs(&self) -> impl Iterator<Item = &LivingCost> {
        self.living_costs.values()
    }
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn keyed<T, F>(records: Vec<T>, key: F) -> BTreeMap<String, T>
where
    F: Fn(&T) -> &String,
{
    records
        .into_iter()
        .map(|record| (key(&record).clone(), record))
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read path catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid path catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("path catalog line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },
    #[error("path '{0}' appears more than once")]
    DuplicatePath(String),
    #[error("path catalog contains no rows")]
    Empty,
}

/// Loads a custom path table from CSV on top of the standard catalog.
pub struct PathCatalogImporter;

impl PathCatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ReferenceCatalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ReferenceCatalog, CatalogImportError> {
        let paths = parser::parse_paths(reader)?;
        tracing::info!(paths = paths.len(), "imported education path catalog");
        Ok(ReferenceCatalog::standard().with_paths(paths))
    }
}

/// Load the catalog named by configuration, falling back to the built-in tables.
pub fn load(paths_csv: Option<&Path>) -> Result<ReferenceCatalog, CatalogImportError> {
    match paths_csv {
        Some(path) => PathCatalogImporter::from_path(path),
        None => Ok(ReferenceCatalog::standard()),
    }
}
