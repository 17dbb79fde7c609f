//! Seed data for the mock catalog.
//!
//! Six hand-written items followed by generated filler. Generation is a pure
//! function of the index, so any item can be rebuilt without the full list.

use crate::domain::models::{walmart_detail_url, Product};

/// A product as stored in the mock catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
}

impl CatalogItem {
    pub fn to_product(&self) -> Product {
        Product::new(&self.id, &self.title)
            .with_description(&self.description)
            .with_image_url(&self.image_url)
            .with_detail_url(walmart_detail_url(&self.id))
            .with_price(&self.price)
    }
}

struct StaticSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    price: &'static str,
    image_url: &'static str,
}

const STATIC_SEEDS: [StaticSeed; 6] = [
    StaticSeed {
        id: "100001",
        title: "On-Ear Wireless Headphones with Noise Isolation",
        description: "Comfortable over-ear fit with Bluetooth pairing, foldable design, and long-lasting battery life.",
        price: "$39.99",
        image_url: "https://picsum.photos/seed/headphones/600/600",
    },
    StaticSeed {
        id: "100002",
        title: "12-Cup Programmable Coffee Maker",
        description: "Brews up to 12 cups with programmable start time, pause-and-serve, and reusable filter basket.",
        price: "$24.88",
        image_url: "https://picsum.photos/seed/coffeemaker/600/600",
    },
    StaticSeed {
        id: "100003",
        title: "27-inch 4K UHD Monitor",
        description: "Crisp 4K panel with slim bezels, HDMI connectivity, and vivid color profile for work and media.",
        price: "$219.00",
        image_url: "https://picsum.photos/seed/monitor/600/600",
    },
    StaticSeed {
        id: "100004",
        title: "Ergonomic Office Chair with Lumbar Support",
        description: "Adjustable seat height and lumbar support with breathable cushioning for all-day comfort.",
        price: "$129.99",
        image_url: "https://picsum.photos/seed/chair/600/600",
    },
    StaticSeed {
        id: "100005",
        title: "10-inch Android Tablet 64GB",
        description: "Portable Android tablet with 64GB storage, HD display, and fast Wi-Fi for streaming and browsing.",
        price: "$149.00",
        image_url: "https://picsum.photos/seed/tablet/600/600",
    },
    StaticSeed {
        id: "100006",
        title: "Countertop Air Fryer, 6 Quart",
        description: "Large-capacity digital air fryer with preset modes for fries, chicken, vegetables, and more.",
        price: "$59.99",
        image_url: "https://picsum.photos/seed/airfryer/600/600",
    },
];

/// Marketing prefixes cycled through by the generator.
pub const PREFIXES: [&str; 10] = [
    "Premium",
    "Portable",
    "Smart",
    "Ultra",
    "Compact",
    "Deluxe",
    "Essential",
    "Advanced",
    "Modern",
    "Pro",
];

pub const PRODUCT_TYPES: [&str; 10] = [
    "Bluetooth Speaker",
    "Gaming Keyboard",
    "USB-C Hub",
    "Robot Vacuum",
    "Fitness Tracker",
    "Desk Lamp",
    "Webcam",
    "Power Bank",
    "Electric Kettle",
    "Noise-Canceling Earbuds",
];

pub const GENERATED_COUNT: usize = 100;
const FIRST_GENERATED_ID: usize = 100_007;
const BASE_PRICE_CENTS: usize = 1_999;
const PRICE_STEP_CENTS: usize = 750;
const PRICE_CYCLE: usize = 15;

fn format_cents(cents: usize) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Builds the generated item at `index` (0-based, independent of the static seeds).
pub fn seed(index: usize) -> CatalogItem {
    let prefix = PREFIXES[index % PREFIXES.len()];
    let product_type = PRODUCT_TYPES[index % PRODUCT_TYPES.len()];
    let id = (FIRST_GENERATED_ID + index).to_string();
    let cents = BASE_PRICE_CENTS + (index % PRICE_CYCLE) * PRICE_STEP_CENTS;

    CatalogItem {
        title: format!("{} {} Model {}", prefix, product_type, index + 1),
        description: format!(
            "A {} {} designed for everyday use, reliable performance, and value-focused shopping.",
            prefix.to_lowercase(),
            product_type.to_lowercase()
        ),
        price: format_cents(cents),
        image_url: format!("https://picsum.photos/seed/mock-product-{}/600/600", id),
        id,
    }
}

/// The full catalog in insertion order: static seeds, then generated items.
pub fn all_items() -> Vec<CatalogItem> {
    STATIC_SEEDS
        .iter()
        .map(|s| CatalogItem {
            id: s.id.to_string(),
            title: s.title.to_string(),
            description: s.description.to_string(),
            price: s.price.to_string(),
            image_url: s.image_url.to_string(),
        })
        .chain((0..GENERATED_COUNT).map(seed))
        .collect()
}
