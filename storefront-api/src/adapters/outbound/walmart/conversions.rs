use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::domain::models::{walmart_detail_url, Product};

pub const UNTITLED: &str = "Untitled";

/// Convert a Walmart search item to a domain Product.
///
/// Items without an upstream id get a random one, so they cannot be
/// deduplicated across calls.
pub fn to_domain_product(item: walmart::Item) -> Product {
    let image_url = item.first_image_url().map(str::to_string);
    let price = item
        .price
        .as_ref()
        .and_then(walmart::Price::finite_amount)
        .map(format_price);

    let (id, detail_url) = match item.item_id {
        Some(item_id) => {
            let detail_url = walmart_detail_url(&item_id);
            (item_id, Some(detail_url))
        }
        None => (Uuid::new_v4().to_string(), None),
    };

    Product {
        id,
        title: item.title.unwrap_or_else(|| UNTITLED.to_string()),
        description: item.description,
        image_url,
        detail_url,
        price,
    }
}

/// Dollar string with two decimals. Midpoints round away from zero, on the
/// exact value of the float.
pub fn format_price(amount: f64) -> String {
    match Decimal::from_f64_retain(amount) {
        Some(exact) => format!(
            "${:.2}",
            exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("${:.2}", amount),
    }
}
