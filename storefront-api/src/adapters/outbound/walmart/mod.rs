mod conversions;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    models::{Product, ProviderKind},
    ports::outbound::ProductProvider,
    SearchError,
};

use self::conversions::to_domain_product;

/// Adapter that wraps the Walmart client to implement the ProductProvider port.
///
/// The authenticated client is created on first use and reused for the life
/// of the adapter; it renews its own access token. A failed authentication
/// is not cached.
pub struct WalmartAdapter {
    client_id: Option<String>,
    client_secret: Option<String>,
    options: walmart::ClientOptions,
    client: OnceCell<walmart::WalmartClient>,
}

impl WalmartAdapter {
    pub fn new(
        client_id: Option<String>,
        client_secret: Option<String>,
        options: walmart::ClientOptions,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            options,
            client: OnceCell::new(),
        }
    }

    async fn client(&self) -> Result<&walmart::WalmartClient, SearchError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }

        // Checked before any network call.
        let credentials =
            walmart::Credentials::new(self.client_id.as_deref(), self.client_secret.as_deref())?;

        let options = self.options.clone();
        self.client
            .get_or_try_init(move || async move {
                let correlation_id = Uuid::new_v4().to_string();
                walmart::WalmartClient::connect(credentials, options, &correlation_id)
                    .await
                    .map_err(SearchError::from)
            })
            .await
    }
}

#[async_trait]
impl ProductProvider for WalmartAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Walmart
    }

    fn is_configured(&self) -> bool {
        walmart::Credentials::are_present(self.client_id.as_deref(), self.client_secret.as_deref())
    }

    #[instrument(name = "walmart search", skip(self))]
    async fn search(&self, term: &str, page: usize) -> Result<Vec<Product>, SearchError> {
        let client = self.client().await?;
        let correlation_id = Uuid::new_v4().to_string();
        // Item search has no paging parameter; pages are cut from the merged set.
        tracing::debug!(page, correlation_id = %correlation_id, "searching Walmart");

        let response = client.search(term, &correlation_id).await.map_err(|err| {
            tracing::error!(correlation_id = %correlation_id, "Walmart search failed: {}", err);
            SearchError::from(err)
        })?;

        Ok(response.items.into_iter().map(to_domain_product).collect())
    }
}
