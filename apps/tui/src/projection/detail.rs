use crate::catalog::{CapabilityDefinition, LocationRecord, RadiusRing, Share, Spending};
use crate::domain::{CapabilityCategory, Tone};
use crate::format::{currency_k, decimal, percent};
use serde::Serialize;
use std::cmp::Ordering;

/// Badge shown next to a location's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub category: CapabilityCategory,
    pub label: String,
    pub subtitle: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub subtext: Option<&'static str>,
    pub tone: Option<Tone>,
}

/// An age segment with its fixed colour slot (0, 1 or 2)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub label: String,
    pub percentage: f64,
    pub slot: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RingRow {
    pub distance: String,
    pub population: u64,
    pub median_income: u64,
    pub highlighted: bool,
}

/// Everything the detail view draws for one location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detail {
    pub id: String,
    pub name: String,
    pub subtitle: Option<String>,
    pub badge: Badge,
    pub details: String,
    pub supports: Vec<String>,
    pub metrics: Vec<MetricCard>,
    pub income_distribution: Vec<Share>,
    pub age_segments: Vec<Segment>,
    pub rings: Vec<RingRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spending_spotlight: Option<Spending>,
    pub analyst_take: String,
}

pub fn detail(location: &LocationRecord, definitions: &[CapabilityDefinition]) -> Detail {
    let stats = &location.stats;

    let metrics = vec![
        MetricCard {
            title: "Median Age",
            value: decimal(stats.median_age),
            subtext: Some("3 Mile Radius"),
            tone: None,
        },
        MetricCard {
            title: "Avg HH Income",
            value: currency_k(stats.average_income),
            subtext: Some("Mean (vs Median)"),
            tone: None,
        },
        MetricCard {
            title: "Education (Bach+)",
            value: percent(stats.bachelors_plus),
            subtext: Some("Pop 25+"),
            tone: None,
        },
        MetricCard {
            title: "Discretionary Risk",
            value: location.risk.label().to_string(),
            subtext: None,
            tone: Some(location.risk.tone()),
        },
    ];

    let age_segments = location
        .age_segments
        .iter()
        .enumerate()
        .map(|(index, share)| Segment {
            label: share.label.clone(),
            percentage: share.percentage,
            slot: index % 3,
        })
        .collect();

    let mut rings: Vec<&RadiusRing> = location.rings.iter().collect();
    rings.sort_by(|a, b| compare_distance(a.miles(), b.miles()));
    let rings = rings
        .into_iter()
        .enumerate()
        .map(|(index, ring)| RingRow {
            distance: ring.distance.clone(),
            population: ring.population,
            median_income: ring.median_income,
            highlighted: index == 1,
        })
        .collect();

    Detail {
        id: location.id.clone(),
        name: location.name.clone(),
        subtitle: location.subtitle.clone(),
        badge: badge(location, definitions),
        details: location.details.clone(),
        supports: location.supports.clone(),
        metrics,
        income_distribution: location.income_distribution.clone(),
        age_segments,
        rings,
        spending_spotlight: location.spending,
        analyst_take: location.summary.clone(),
    }
}

fn badge(location: &LocationRecord, definitions: &[CapabilityDefinition]) -> Badge {
    let primary = location.capability.primary();
    let definition = definitions
        .iter()
        .find(|def| def.category == primary)
        .or_else(|| {
            definitions
                .iter()
                .find(|def| def.category == CapabilityCategory::C)
        });

    Badge {
        category: primary,
        label: format!("Category {}", location.capability),
        subtitle: definition.map(|def| def.subtitle.clone()).unwrap_or_default(),
        style: definition.map_or_else(|| String::from("gray"), |def| def.style.clone()),
    }
}

// Unparsable distances sort after every measured ring
fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
