use serde::Serialize;

/// Normalized search result shared by every provider.
///
/// `id` is the merge key: two products with the same id are the same product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_url: Option<String>,
    /// Pre-formatted display price, e.g. `"$39.99"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            image_url: None,
            detail_url: None,
            price: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_detail_url(mut self, detail_url: impl Into<String>) -> Self {
        self.detail_url = Some(detail_url.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }
}

/// Walmart product page for an item id.
pub fn walmart_detail_url(item_id: &str) -> String {
    format!("https://www.walmart.com/ip/{}", item_id)
}
