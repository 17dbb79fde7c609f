//! Search orchestration: provider selection, per-term fan-out, merge and paging.

use std::sync::Arc;

use futures::future::try_join_all;
use serde::Serialize;

use crate::domain::{
    models::{Pagination, Product, ProviderKind},
    ports::outbound::ProductProvider,
    SearchError,
};

use super::{merge::MergedResultSet, split_terms, SearchRequest};

/// One page of merged search results, as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub products: Vec<Product>,
    pub provider: ProviderKind,
    pub terms: Vec<String>,
    pub pagination: Pagination,
}

/// Fans a keyword out to the mock catalog or the remote marketplace.
///
/// Both providers are injected; the remote one is only contacted when the
/// request selects it.
pub struct ProductSearchService {
    catalog: Arc<dyn ProductProvider>,
    remote: Arc<dyn ProductProvider>,
}

impl ProductSearchService {
    pub fn new(catalog: Arc<dyn ProductProvider>, remote: Arc<dyn ProductProvider>) -> Self {
        Self { catalog, remote }
    }

    /// Picks the provider for a request.
    ///
    /// An explicit hint always wins, even `walmart` without credentials.
    /// Without a hint the remote provider is used only when configured.
    pub fn select_provider(&self, hint: Option<ProviderKind>) -> ProviderKind {
        match hint {
            Some(kind) => kind,
            None if self.remote.is_configured() => ProviderKind::Walmart,
            None => ProviderKind::Mock,
        }
    }

    fn provider(&self, kind: ProviderKind) -> &Arc<dyn ProductProvider> {
        match kind {
            ProviderKind::Mock => &self.catalog,
            ProviderKind::Walmart => &self.remote,
        }
    }

    /// Execute a search request.
    ///
    /// Every term is queried concurrently with the same requested page. If any
    /// term fails the whole search fails; there are no partial results.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchPage, SearchError> {
        let kind = self.select_provider(request.provider);
        let keyword = request.keyword.trim();

        if kind == ProviderKind::Walmart && keyword.is_empty() {
            return Err(SearchError::MissingKeyword);
        }

        let terms = split_terms(keyword);
        let provider = self.provider(kind);

        tracing::info!(
            provider = %provider.kind(),
            terms = ?terms,
            page = request.page,
            limit = request.limit,
            "searching products"
        );

        let batches = if terms.is_empty() {
            vec![provider.search("", request.page).await?]
        } else {
            try_join_all(terms.iter().map(|term| provider.search(term, request.page)))
                .await
                .inspect_err(|err| {
                    tracing::error!(provider = %kind, "product search failed: {}", err);
                })?
        };

        for (term, batch) in terms.iter().zip(&batches) {
            tracing::debug!(term = %term, results = batch.len(), "term batch");
        }

        let merged: MergedResultSet = batches.into_iter().collect();
        let pagination = Pagination::new(request.page, request.limit, merged.len());

        Ok(SearchPage {
            products: pagination.slice(merged.as_slice()),
            provider: kind,
            terms,
            pagination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::MockCatalog;
    use crate::domain::search::mock::ScriptedProvider;
    use std::collections::HashSet;

    fn service_with(remote: ScriptedProvider) -> ProductSearchService {
        ProductSearchService::new(Arc::new(MockCatalog::new()), Arc::new(remote))
    }

    fn unconfigured_service() -> ProductSearchService {
        service_with(ScriptedProvider::walmart().unconfigured())
    }

    fn ids(page: &SearchPage) -> Vec<&str> {
        page.products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn provider_selection_order() {
        let configured = service_with(ScriptedProvider::walmart());
        assert_eq!(configured.select_provider(None), ProviderKind::Walmart);
        assert_eq!(
            configured.select_provider(Some(ProviderKind::Mock)),
            ProviderKind::Mock
        );

        let unconfigured = unconfigured_service();
        assert_eq!(unconfigured.select_provider(None), ProviderKind::Mock);
        assert_eq!(
            unconfigured.select_provider(Some(ProviderKind::Walmart)),
            ProviderKind::Walmart
        );
    }

    #[tokio::test]
    async fn empty_keyword_against_remote_is_rejected_before_any_query() {
        let remote = ScriptedProvider::walmart();
        let service = service_with(remote.clone());

        let result = service.search(&SearchRequest::new("  ")).await;

        assert_eq!(result.unwrap_err(), SearchError::MissingKeyword);
        assert_eq!(remote.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_keyword_against_mock_returns_first_page_of_catalog() {
        let service = unconfigured_service();

        let page = service.search(&SearchRequest::new("")).await.unwrap();

        assert_eq!(page.provider, ProviderKind::Mock);
        assert!(page.terms.is_empty());
        assert_eq!(page.products.len(), 20);
        assert_eq!(page.products[0].id, "100001");
        assert_eq!(page.pagination.total, 106);
        assert_eq!(page.pagination.total_pages, 6);
        assert!(page.pagination.has_next);
    }

    #[tokio::test]
    async fn multi_term_mock_search_is_deduplicated_union() {
        let service = unconfigured_service();
        let catalog = MockCatalog::new();

        let request = SearchRequest::new("a,b").with_provider(Some(ProviderKind::Mock));
        let page = service.search(&request.clone().with_limit(200)).await.unwrap();

        assert_eq!(page.terms, vec!["a", "b"]);

        let mut expected = Vec::new();
        for term in ["a", "b"] {
            for item in catalog.find(term) {
                if !expected.contains(&item.id.as_str()) {
                    expected.push(item.id.as_str());
                }
            }
        }
        assert_eq!(ids(&page), expected);

        let unique: HashSet<_> = ids(&page).into_iter().collect();
        assert_eq!(unique.len(), page.products.len());
    }

    #[tokio::test]
    async fn remote_terms_fan_out_with_same_page() {
        let remote = ScriptedProvider::walmart()
            .with_batch(
                "lamp",
                vec![Product::new("1", "Desk Lamp"), Product::new("2", "Floor Lamp")],
            )
            .with_batch(
                "kettle",
                vec![Product::new("2", "Floor Lamp"), Product::new("3", "Kettle")],
            );
        let service = service_with(remote.clone());

        let request = SearchRequest::new("lamp kettle").with_page(1);
        let page = service.search(&request).await.unwrap();

        assert_eq!(page.provider, ProviderKind::Walmart);
        assert_eq!(ids(&page), vec!["1", "2", "3"]);
        assert_eq!(page.pagination.total, 3);

        let mut calls = remote.calls();
        calls.sort();
        assert_eq!(
            calls,
            vec![("kettle".to_string(), 1), ("lamp".to_string(), 1)]
        );
    }

    #[tokio::test]
    async fn failing_term_fails_whole_request() {
        let remote = ScriptedProvider::walmart()
            .failing_with(SearchError::provider("upstream unavailable"));
        let service = service_with(remote);

        let err = service
            .search(&SearchRequest::new("lamp kettle"))
            .await
            .unwrap_err();

        assert_eq!(err, SearchError::Provider("upstream unavailable".into()));
    }

    #[tokio::test]
    async fn explicit_walmart_without_credentials_surfaces_provider_error() {
        let remote = ScriptedProvider::walmart()
            .unconfigured()
            .failing_with(SearchError::MissingCredentials(
                "Missing Walmart credentials: WALMART_CLIENT_ID".into(),
            ));
        let service = service_with(remote);

        let request =
            SearchRequest::new("lamp").with_provider(Some(ProviderKind::Walmart));
        let err = service.search(&request).await.unwrap_err();

        assert!(matches!(err, SearchError::MissingCredentials(_)));
    }

    #[tokio::test]
    async fn pages_through_merged_results() {
        let service = unconfigured_service();

        let request = SearchRequest::new("lamp").with_limit(4);
        let first = service.search(&request.clone().with_page(1)).await.unwrap();
        let third = service.search(&request.clone().with_page(3)).await.unwrap();

        assert_eq!(first.pagination.total, 10);
        assert_eq!(first.pagination.total_pages, 3);
        assert_eq!(first.products.len(), 4);
        assert_eq!(third.products.len(), 2);
        assert!(!third.pagination.has_next);
        assert!(third.pagination.has_prev);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let service = unconfigured_service();

        let page = service
            .search(&SearchRequest::new("monitor").with_page(5))
            .await
            .unwrap();

        assert!(page.products.is_empty());
        assert_eq!(page.pagination.total, 1);
        assert_eq!(page.pagination.total_pages, 1);
        assert!(!page.pagination.has_next);
    }

    #[tokio::test]
    async fn repeated_requests_are_identical() {
        let service = unconfigured_service();
        let request = SearchRequest::new("pro, speaker").with_page(2).with_limit(5);

        let first = service.search(&request).await.unwrap();
        let second = service.search(&request).await.unwrap();

        assert_eq!(first.products, second.products);
        assert_eq!(first.pagination, second.pagination);
    }
}
