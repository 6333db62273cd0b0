// Projection module for trade-area-dashboard
// Derives chart-ready series from catalog records

pub mod comparison;
pub mod detail;

pub use comparison::{
    comparison, overview_cards, AgePoint, Comparison, IncomePoint, OverviewCard, SpendingPoint,
    AGE_SERIES, SPENDING_SERIES,
};
pub use detail::{detail, Badge, Detail, MetricCard, RingRow, Segment};
