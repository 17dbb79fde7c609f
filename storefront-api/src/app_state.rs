use std::sync::Arc;

use crate::{
    config::SearchSettings,
    domain::{
        catalog::MockCatalog, ports::outbound::ProductProvider, search::ProductSearchService,
        suggest::SuggestionEngine,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub search_service: Arc<ProductSearchService>,
    pub suggestions: Arc<SuggestionEngine>,
    pub search_settings: SearchSettings,
}

impl AppState {
    /// Wires the catalog and remote provider into the search and suggestion services.
    pub fn new(
        catalog: Arc<MockCatalog>,
        remote: Arc<dyn ProductProvider>,
        search_settings: SearchSettings,
    ) -> Self {
        let suggestions = SuggestionEngine::new(&catalog);
        let search_service = ProductSearchService::new(catalog, remote);

        Self {
            search_service: Arc::new(search_service),
            suggestions: Arc::new(suggestions),
            search_settings,
        }
    }
}
