// Export our modules for use in binaries and tests
pub mod catalog;
pub mod config;
pub mod domain;
pub mod format;
pub mod projection;
pub mod view;

pub use catalog::{Catalog, CatalogError, LocationRecord};
pub use domain::{Capability, CapabilityCategory, RiskLevel, Tone};
pub use view::{ActiveView, ViewController, ViewError};
