use async_trait::async_trait;

use crate::domain::{
    models::{Product, ProviderKind},
    SearchError,
};

/// Outbound port for a source of product search results.
///
/// Implemented by the in-process mock catalog and by the Walmart adapter.
/// One call answers one search term; merging and paging happen above this port.
#[async_trait]
pub trait ProductProvider: Send + Sync + 'static {
    /// Which provider this is, as reported in the response envelope.
    fn kind(&self) -> ProviderKind;

    /// Whether the provider has what it needs to be picked without an explicit hint.
    fn is_configured(&self) -> bool {
        true
    }

    /// Search for a single term.
    ///
    /// `page` is the page the client asked for. Providers that page
    /// internally may use it; the merged result is re-paged regardless.
    async fn search(&self, term: &str, page: usize) -> Result<Vec<Product>, SearchError>;
}
