use crate::domain::{Capability, CapabilityCategory, RiskLevel};
use serde::{Deserialize, Serialize};

/// A trade-area location as published in the catalog resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub capability: Capability,
    pub risk: RiskLevel,
    pub summary: String,
    pub details: String,
    #[serde(default)]
    pub supports: Vec<String>,
    pub stats: CoreStats,
    #[serde(default)]
    pub rings: Vec<RadiusRing>,
    pub income_distribution: Vec<Share>,
    pub age_segments: Vec<Share>,
    /// Missing where the source methodology can't be compared with the rest.
    #[serde(default)]
    pub spending: Option<Spending>,
}

/// Headline statistics for the 3 mile radius
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreStats {
    pub population: u64,
    pub median_income: u64,
    pub average_income: u64,
    pub high_earner_share: f64,
    pub bachelors_plus: f64,
    pub median_age: f64,
    pub density_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiusRing {
    pub distance: String,
    pub population: u64,
    pub median_income: u64,
}

impl RadiusRing {
    /// Leading number of the distance label, so `"2 miles"` is `2.0`.
    pub fn miles(&self) -> Option<f64> {
        let number: String = self
            .distance
            .trim()
            .chars()
            .take_while(|ch| ch.is_ascii_digit() || *ch == '.')
            .collect();
        number.parse().ok()
    }
}

/// A labelled percentage, used for income brackets and age segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub label: String,
    pub percentage: f64,
}

/// Average annual household spend in dollars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spending {
    pub dining: u64,
    pub entertainment: u64,
    pub apparel: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityDefinition {
    pub category: CapabilityCategory,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Palette name the renderer maps onto a colour, e.g. `"purple"`.
    pub style: String,
}

/// On-disk layout of a catalog resource
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub market: Option<String>,
    pub definitions: Vec<CapabilityDefinition>,
    pub locations: Vec<LocationRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(distance: &str) -> RadiusRing {
        RadiusRing {
            distance: distance.to_string(),
            population: 0,
            median_income: 0,
        }
    }

    #[test]
    fn ring_distance_parses_leading_number() {
        assert_eq!(ring("1 mile").miles(), Some(1.0));
        assert_eq!(ring("5 miles").miles(), Some(5.0));
        assert_eq!(ring("2.5mi").miles(), Some(2.5));
        assert_eq!(ring("walkable").miles(), None);
    }

    #[test]
    fn missing_spending_deserializes_as_none() {
        let json = r#"{ "dining": 1, "entertainment": 2, "apparel": 3 }"#;
        let spending: Spending = serde_json::from_str(json).unwrap();
        assert_eq!(spending.apparel, 3);

        let partial = r#"{ "dining": 1, "entertainment": 2 }"#;
        assert!(serde_json::from_str::<Spending>(partial).is_err());
    }
}
