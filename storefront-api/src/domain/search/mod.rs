//! Product search over the mock catalog or the Walmart marketplace.
//!
//! A keyword is split into terms, each term is searched independently, the
//! batches are merged by product id (first occurrence wins) and the merged
//! set is paged.
//!
//! # Example
//!
//! ```ignore
//! let service = ProductSearchService::new(Arc::new(MockCatalog::new()), remote);
//! let request = SearchRequest::new("lamp, kettle").with_page(2);
//! let page = service.search(&request).await?;
//! ```

mod merge;
#[cfg(test)]
pub(crate) mod mock;
mod request;
mod service;
mod terms;

pub use request::{normalize_limit, normalize_page, SearchRequest};
pub use service::{ProductSearchService, SearchPage};
pub use terms::split_terms;

pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 20;
