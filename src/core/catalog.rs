use std::{collections::HashSet, fmt::Debug, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    core::project::{ProjectIndex, ProjectType},
    prelude::*,
    quantity::{rate::EarningsRate, time::TimeUnits},
};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("the catalog must contain at least one project type")]
    Empty,

    #[error("project type `{0}` is listed more than once")]
    DuplicateId(String),

    #[error("project type `{0}` must have a positive time cost")]
    NonPositiveTimeCost(String),

    #[error("project type `{0}` must have a positive earnings rate")]
    NonPositiveEarningsRate(String),
}

/// Fixed table of project types the optimizer may choose from.
///
/// The order of the entries is significant: count vectors are aligned with it.
#[must_use]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile", into = "CatalogFile")]
pub struct Catalog(Vec<ProjectType>);

impl Default for Catalog {
    /// Mars land development catalog.
    fn default() -> Self {
        Self(vec![
            ProjectType::builder()
                .id("T")
                .name("Theatre")
                .time_cost(TimeUnits(5))
                .earnings_rate(EarningsRate(1500))
                .build(),
            ProjectType::builder()
                .id("P")
                .name("Pub")
                .time_cost(TimeUnits(4))
                .earnings_rate(EarningsRate(1000))
                .build(),
            ProjectType::builder()
                .id("C")
                .name("Commercial Park")
                .time_cost(TimeUnits(10))
                .earnings_rate(EarningsRate(3000))
                .build(),
        ])
    }
}

impl Catalog {
    pub fn try_new(project_types: Vec<ProjectType>) -> Result<Self, CatalogError> {
        if project_types.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen_ids = HashSet::with_capacity(project_types.len());
        for project_type in &project_types {
            if !seen_ids.insert(project_type.id.as_str()) {
                return Err(CatalogError::DuplicateId(project_type.id.clone()));
            }
            if project_type.time_cost <= TimeUnits::ZERO {
                return Err(CatalogError::NonPositiveTimeCost(project_type.id.clone()));
            }
            if project_type.earnings_rate <= EarningsRate::ZERO {
                return Err(CatalogError::NonPositiveEarningsRate(project_type.id.clone()));
            }
        }
        Ok(Self(project_types))
    }

    /// Read the catalog from a TOML file with `[[project]]` tables.
    #[instrument(skip_all, fields(path = ?path))]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read the catalog from `{}`", path.display()))?;
        let catalog: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse the catalog `{}`", path.display()))?;
        info!(n_project_types = catalog.len(), "loaded the catalog");
        Ok(catalog)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProjectIndex, &ProjectType)> {
        self.0.iter().enumerate()
    }

    pub fn get(&self, index: ProjectIndex) -> &ProjectType {
        &self.0[index]
    }

    /// Project types that fit into the remaining time, in catalog order.
    pub fn affordable(
        &self,
        remaining_time: TimeUnits,
    ) -> impl Iterator<Item = (ProjectIndex, &ProjectType)> {
        self.iter().filter(move |(_, project_type)| project_type.time_cost <= remaining_time)
    }
}

#[derive(Serialize, Deserialize)]
struct CatalogFile {
    #[serde(rename = "project")]
    project_types: Vec<ProjectType>,
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        Self::try_new(file.project_types)
    }
}

impl From<Catalog> for CatalogFile {
    fn from(catalog: Catalog) -> Self {
        Self { project_types: catalog.0 }
    }
}
