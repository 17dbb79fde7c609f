//! Scripted provider for testing the orchestrator.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{
    models::{Product, ProviderKind},
    ports::outbound::ProductProvider,
    SearchError,
};

/// Provider that answers from a fixed term to products table.
///
/// # Examples
///
/// ```ignore
/// let remote = ScriptedProvider::walmart()
///     .with_batch("lamp", vec![Product::new("1", "Desk Lamp")]);
/// let failing = ScriptedProvider::walmart().failing_with(SearchError::provider("upstream down"));
/// ```
#[derive(Clone)]
pub struct ScriptedProvider {
    kind: ProviderKind,
    configured: bool,
    batches: Arc<HashMap<String, Vec<Product>>>,
    failure: Option<SearchError>,
    calls: Arc<Mutex<Vec<(String, usize)>>>,
}

impl ScriptedProvider {
    pub fn walmart() -> Self {
        Self {
            kind: ProviderKind::Walmart,
            configured: true,
            batches: Arc::new(HashMap::new()),
            failure: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    pub fn with_batch(mut self, term: &str, products: Vec<Product>) -> Self {
        Arc::make_mut(&mut self.batches).insert(term.to_string(), products);
        self
    }

    pub fn failing_with(mut self, error: SearchError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Every `(term, page)` this provider was asked for, in call order.
    pub fn calls(&self) -> Vec<(String, usize)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductProvider for ScriptedProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn search(&self, term: &str, page: usize) -> Result<Vec<Product>, SearchError> {
        self.calls.lock().unwrap().push((term.to_string(), page));
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(self.batches.get(term).cloned().unwrap_or_default())
    }
}
