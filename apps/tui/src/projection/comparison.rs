use crate::catalog::LocationRecord;
use crate::domain::{RiskLevel, Tone};
use crate::format::{currency_k, decimal};
use serde::Serialize;

/// Stacked-bar series names for the three age segments, in segment order.
pub const AGE_SERIES: [&str; 3] = ["Young (15-34)", "Prime (35-54)", "Mature (55+)"];

pub const SPENDING_SERIES: [&str; 3] = ["Dining Out", "Entertainment", "Apparel"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncomePoint {
    pub name: String,
    pub median_income: u64,
    pub average_income: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgePoint {
    pub name: String,
    pub young: f64,
    pub prime: f64,
    pub mature: f64,
}

impl AgePoint {
    pub const fn values(&self) -> [f64; 3] {
        [self.young, self.prime, self.mature]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendingPoint {
    pub name: String,
    pub dining: u64,
    pub entertainment: u64,
    pub apparel: u64,
}

impl SpendingPoint {
    pub const fn values(&self) -> [u64; 3] {
        [self.dining, self.entertainment, self.apparel]
    }
}

/// Side-by-side series for the overview charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub income: Vec<IncomePoint>,
    pub age: Vec<AgePoint>,
    pub spending: Vec<SpendingPoint>,
    /// Locations left out of `spending` because they have no comparable data.
    pub excluded_from_spending: Vec<String>,
}

pub fn comparison(locations: &[LocationRecord]) -> Comparison {
    let income = locations
        .iter()
        .map(|location| IncomePoint {
            name: location.name.clone(),
            median_income: location.stats.median_income,
            average_income: location.stats.average_income,
        })
        .collect();

    let age = locations
        .iter()
        .map(|location| {
            let segment = |index: usize| {
                location
                    .age_segments
                    .get(index)
                    .map_or(0.0, |share| share.percentage)
            };
            AgePoint {
                name: location.name.clone(),
                young: segment(0),
                prime: segment(1),
                mature: segment(2),
            }
        })
        .collect();

    let spending = locations
        .iter()
        .filter_map(|location| {
            location.spending.map(|spending| SpendingPoint {
                name: location.name.clone(),
                dining: spending.dining,
                entertainment: spending.entertainment,
                apparel: spending.apparel,
            })
        })
        .collect();

    let excluded_from_spending = locations
        .iter()
        .filter(|location| location.spending.is_none())
        .map(|location| location.name.clone())
        .collect();

    Comparison {
        income,
        age,
        spending,
        excluded_from_spending,
    }
}

/// Summary card linking the overview to a location's detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewCard {
    pub id: String,
    pub name: String,
    pub risk: RiskLevel,
    pub risk_tone: Tone,
    pub capability: String,
    pub median_income: String,
    pub median_age: String,
}

pub fn overview_cards(locations: &[LocationRecord]) -> Vec<OverviewCard> {
    locations
        .iter()
        .map(|location| OverviewCard {
            id: location.id.clone(),
            name: location.name.clone(),
            risk: location.risk,
            risk_tone: location.risk.tone(),
            capability: location.capability.to_string(),
            median_income: currency_k(location.stats.median_income),
            median_age: decimal(location.stats.median_age),
        })
        .collect()
}
