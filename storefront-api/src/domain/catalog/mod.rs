//! In-process mock catalog used when no marketplace credentials are configured,
//! and as the candidate pool for product suggestions.

#[allow(clippy::module_inception)]
mod catalog;
mod seed;

pub use catalog::MockCatalog;
pub use seed::{CatalogItem, PREFIXES};
