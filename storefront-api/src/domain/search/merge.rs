use std::collections::HashSet;

use crate::domain::models::Product;

/// Ordered union of product batches keyed by product id.
///
/// The first product seen with a given id wins; later duplicates are dropped.
/// Order is insertion order: batch order, then order within each batch.
#[derive(Debug, Default)]
pub struct MergedResultSet {
    seen: HashSet<String>,
    products: Vec<Product>,
}

impl MergedResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product unless its id is already present. Returns whether it was added.
    pub fn insert(&mut self, product: Product) -> bool {
        if self.seen.contains(&product.id) {
            return false;
        }
        self.seen.insert(product.id.clone());
        self.products.push(product);
        true
    }

    pub fn extend_batch(&mut self, batch: impl IntoIterator<Item = Product>) {
        for product in batch {
            self.insert(product);
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }
}

impl FromIterator<Vec<Product>> for MergedResultSet {
    fn from_iter<I: IntoIterator<Item = Vec<Product>>>(batches: I) -> Self {
        let mut merged = Self::new();
        for batch in batches {
            merged.extend_batch(batch);
        }
        merged
    }
}
