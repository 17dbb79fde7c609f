use async_trait::async_trait;

use crate::domain::{
    models::{Product, ProviderKind},
    ports::outbound::ProductProvider,
    SearchError,
};

use super::seed::{all_items, CatalogItem};

/// Immutable in-process product catalog.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    items: Vec<CatalogItem>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::with_items(all_items())
    }

    pub fn with_items(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Case-insensitive substring match against titles, in catalog order.
    /// A blank term matches everything.
    pub fn find(&self, term: &str) -> Vec<&CatalogItem> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }
        self.items
            .iter()
            .filter(|item| item.title.to_lowercase().contains(&needle))
            .collect()
    }
}

#[async_trait]
impl ProductProvider for MockCatalog {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Mock
    }

    async fn search(&self, term: &str, _page: usize) -> Result<Vec<Product>, SearchError> {
        Ok(self
            .find(term)
            .into_iter()
            .map(CatalogItem::to_product)
            .collect())
    }
}
