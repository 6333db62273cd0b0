// Catalog module for trade-area-dashboard
// Loads and validates the read-only location catalog

mod error;
pub mod models;
pub mod search;

pub use error::CatalogError;
pub use models::{
    CapabilityDefinition, CatalogFile, CoreStats, LocationRecord, RadiusRing, Share, Spending,
};

use crate::domain::CapabilityCategory;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../data/richmond.json");
const DEFAULT_MARKET: &str = "Trade Area Analysis";

/// The immutable set of locations and capability definitions for one market
#[derive(Debug, Clone)]
pub struct Catalog {
    market: String,
    locations: Vec<LocationRecord>,
    definitions: Vec<CapabilityDefinition>,
}

impl Catalog {
    pub fn new(
        market: impl Into<String>,
        locations: Vec<LocationRecord>,
        mut definitions: Vec<CapabilityDefinition>,
    ) -> Result<Self, CatalogError> {
        validate_locations(&locations)?;

        for category in CapabilityCategory::ALL {
            if !definitions.iter().any(|def| def.category == category) {
                return Err(CatalogError::MissingDefinition(category));
            }
        }
        definitions.sort_by_key(|def| def.category);
        definitions.dedup_by_key(|def| def.category);

        Ok(Self {
            market: market.into(),
            locations,
            definitions,
        })
    }

    /// The Richmond catalog shipped inside the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let market = file.market.unwrap_or_else(|| DEFAULT_MARKET.to_string());
        Self::new(market, file.locations, file.definitions)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn market(&self) -> &str {
        &self.market
    }

    pub fn locations(&self) -> &[LocationRecord] {
        &self.locations
    }

    /// First location in catalog order. Construction guarantees there is one.
    pub fn first(&self) -> &LocationRecord {
        &self.locations[0]
    }

    pub fn get(&self, id: &str) -> Option<&LocationRecord> {
        self.locations.iter().find(|location| location.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.locations.iter().position(|location| location.id == id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Definitions in category order, A through E
    pub fn definitions(&self) -> &[CapabilityDefinition] {
        &self.definitions
    }

    pub fn definition(&self, category: CapabilityCategory) -> Option<&CapabilityDefinition> {
        self.definitions.iter().find(|def| def.category == category)
    }
}

fn validate_locations(locations: &[LocationRecord]) -> Result<(), CatalogError> {
    if locations.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for (index, location) in locations.iter().enumerate() {
        if location.id.trim().is_empty() {
            return Err(CatalogError::EmptyId(index));
        }
        if !seen.insert(location.id.as_str()) {
            return Err(CatalogError::DuplicateId(location.id.clone()));
        }
        if location.age_segments.len() != 3 {
            return Err(CatalogError::AgeSegments {
                id: location.id.clone(),
                found: location.age_segments.len(),
            });
        }

        // Age triples are independent estimates and are not required to sum to 100
        for share in location
            .age_segments
            .iter()
            .chain(location.income_distribution.iter())
        {
            if !(0.0..=100.0).contains(&share.percentage) {
                return Err(CatalogError::ShareOutOfRange {
                    id: location.id.clone(),
                    label: share.label.clone(),
                    value: share.percentage,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::domain::{Capability, RiskLevel};

    pub fn location(id: &str, name: &str) -> LocationRecord {
        LocationRecord {
            id: id.to_string(),
            name: name.to_string(),
            subtitle: None,
            capability: Capability::Single(CapabilityCategory::C),
            risk: RiskLevel::Moderate,
            summary: String::from("summary"),
            details: String::from("details"),
            supports: vec![String::from("Dining")],
            stats: CoreStats {
                population: 50_000,
                median_income: 60_000,
                average_income: 75_000,
                high_earner_share: 12.0,
                bachelors_plus: 40.0,
                median_age: 35.0,
                density_label: String::from("Moderate"),
            },
            rings: Vec::new(),
            income_distribution: vec![Share {
                label: String::from("<$50k"),
                percentage: 100.0,
            }],
            age_segments: vec![
                Share {
                    label: String::from("Young"),
                    percentage: 30.0,
                },
                Share {
                    label: String::from("Prime"),
                    percentage: 30.0,
                },
                Share {
                    label: String::from("Mature"),
                    percentage: 30.0,
                },
            ],
            spending: Some(Spending {
                dining: 4000,
                entertainment: 3500,
                apparel: 2500,
            }),
        }
    }

    pub fn definitions() -> Vec<CapabilityDefinition> {
        CapabilityCategory::ALL
            .iter()
            .map(|category| CapabilityDefinition {
                category: *category,
                title: category.label().to_string(),
                subtitle: String::from("subtitle"),
                description: String::from("description"),
                style: String::from("gray"),
            })
            .collect()
    }
}
