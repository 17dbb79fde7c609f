use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    app_state::AppState,
    domain::{
        models::{Product, ProviderKind},
        search::{normalize_limit, normalize_page, SearchPage, SearchRequest},
    },
};

use super::ApiError;

const MAX_SUGGESTIONS: usize = 50;
const DEFAULT_DETAIL_TITLE: &str = "Product";
const DEFAULT_RETURN_TO: &str = "/";

// ---------------------------------------------------------------------------
// Query parameter types
// ---------------------------------------------------------------------------

/// Paging values stay raw strings so malformed input normalizes instead of
/// failing extraction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchQuery {
    pub keyword: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub provider: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsQuery {
    pub title: Option<String>,
    pub description: Option<String>,
    pub exclude_id: Option<String>,
    pub limit: Option<String>,
}

/// Product fields forwarded by the listing page when it links to a detail page.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailQuery {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub detail_url: Option<String>,
    pub return_to: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailResponse {
    pub product: Product,
    pub return_to: String,
    pub suggestions: Vec<Product>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

#[instrument(name = "GET /api/products", skip(app_state))]
async fn search_products(
    State(app_state): State<AppState>,
    Query(query): Query<ProductSearchQuery>,
) -> Result<Json<SearchPage>, ApiError> {
    let settings = &app_state.search_settings;
    let request = SearchRequest::new(query.keyword.unwrap_or_default())
        .with_page(normalize_page(query.page.as_deref()))
        .with_limit(normalize_limit(
            query.limit.as_deref(),
            settings.default_limit,
            settings.max_limit,
        ))
        .with_provider(ProviderKind::from_hint(query.provider.as_deref()));

    let page = app_state.search_service.search(&request).await?;
    Ok(Json(page))
}

#[instrument(name = "GET /api/products/suggestions", skip(app_state))]
async fn get_suggestions(
    State(app_state): State<AppState>,
    Query(query): Query<SuggestionsQuery>,
) -> Json<Vec<Product>> {
    let limit = normalize_limit(
        query.limit.as_deref(),
        app_state.search_settings.suggestion_limit,
        MAX_SUGGESTIONS,
    );

    Json(app_state.suggestions.suggest(
        query.title.as_deref().unwrap_or_default(),
        query.description.as_deref().unwrap_or_default(),
        query.exclude_id.as_deref(),
        limit,
    ))
}

#[instrument(name = "GET /api/products/:id", skip(app_state))]
async fn get_product_detail(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ProductDetailQuery>,
) -> Json<ProductDetailResponse> {
    let limit = normalize_limit(
        query.limit.as_deref(),
        app_state.search_settings.suggestion_limit,
        MAX_SUGGESTIONS,
    );

    let title = non_blank(query.title).unwrap_or_else(|| DEFAULT_DETAIL_TITLE.to_string());
    let description = non_blank(query.description);
    let suggestions = app_state.suggestions.suggest(
        &title,
        description.as_deref().unwrap_or_default(),
        Some(&id),
        limit,
    );

    let product = Product {
        id,
        title,
        description,
        image_url: non_blank(query.image_url),
        detail_url: non_blank(query.detail_url),
        price: non_blank(query.price),
    };

    Json(ProductDetailResponse {
        product,
        return_to: non_blank(query.return_to).unwrap_or_else(|| DEFAULT_RETURN_TO.to_string()),
        suggestions,
    })
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(search_products))
        .route("/suggestions", get(get_suggestions))
        .route("/:id", get(get_product_detail))
}
