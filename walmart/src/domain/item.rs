use serde::Deserialize;

/// Body of `GET /v3/items/walmart/search`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<Item>,
}

/// An item as returned by the search endpoint. Every field is optional upstream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    pub price: Option<Price>,
}

impl Item {
    pub fn first_image_url(&self) -> Option<&str> {
        self.images.first().and_then(|image| image.url.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Image {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Price {
    pub amount: Option<Amount>,
    pub currency: Option<String>,
}

impl Price {
    /// The amount as a finite number, if it can be read as one.
    pub fn finite_amount(&self) -> Option<f64> {
        self.amount.as_ref().and_then(Amount::as_finite)
    }
}

/// Amounts arrive either as JSON numbers or as numeric strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    pub fn as_finite(&self) -> Option<f64> {
        let value = match self {
            Amount::Number(n) => *n,
            Amount::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}
