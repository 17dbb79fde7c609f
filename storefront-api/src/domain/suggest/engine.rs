use std::collections::HashSet;

use itertools::Itertools;

use crate::domain::{
    catalog::{CatalogItem, MockCatalog},
    models::Product,
};

use super::{
    categories::{infer_categories, CategorySet},
    tokenizer::tokenize,
};

const CATEGORY_WEIGHT: usize = 12;
const TITLE_WEIGHT: usize = 3;
const DESCRIPTION_WEIGHT: usize = 1;
/// Fewer scored suggestions than this (or than `limit`) triggers the category fallback.
const MIN_SCORED: usize = 4;

/// A catalog item with its tokens and categories computed once.
#[derive(Debug, Clone)]
struct IndexedItem {
    item: CatalogItem,
    title_tokens: Vec<String>,
    description_tokens: Vec<String>,
    categories: CategorySet,
}

impl IndexedItem {
    fn new(item: CatalogItem) -> Self {
        let title_tokens = tokenize(&item.title);
        let description_tokens = tokenize(&item.description);
        let all_tokens: Vec<String> = title_tokens
            .iter()
            .chain(&description_tokens)
            .cloned()
            .collect();
        let categories = infer_categories(&all_tokens);

        Self {
            item,
            title_tokens,
            description_tokens,
            categories,
        }
    }

    fn score(&self, source: &Source) -> usize {
        let shared_categories = self.categories.intersection(&source.categories).count();
        let shared_title = count_shared(&self.title_tokens, &source.tokens);
        let shared_description = count_shared(&self.description_tokens, &source.tokens);

        shared_categories * CATEGORY_WEIGHT
            + shared_title * TITLE_WEIGHT
            + shared_description * DESCRIPTION_WEIGHT
    }
}

fn count_shared(tokens: &[String], source: &HashSet<String>) -> usize {
    tokens.iter().filter(|t| source.contains(*t)).count()
}

/// Tokens and categories of the product suggestions are being made for.
struct Source {
    tokens: HashSet<String>,
    categories: CategorySet,
}

impl Source {
    fn new(title: &str, description: &str) -> Self {
        let tokens = tokenize(&format!("{} {}", title, description));
        let categories = infer_categories(&tokens);
        Self {
            tokens: tokens.into_iter().collect(),
            categories,
        }
    }
}

/// Related-product scorer over the mock catalog.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    items: Vec<IndexedItem>,
}

impl SuggestionEngine {
    pub fn new(catalog: &MockCatalog) -> Self {
        Self {
            items: catalog.items().iter().cloned().map(IndexedItem::new).collect(),
        }
    }

    /// Suggest up to `limit` catalog products related to the given title and description.
    ///
    /// Candidates are ranked by shared categories and shared words, ties broken
    /// by title. When fewer than `min(4, limit)` candidates score at all, the
    /// first catalog items sharing a category are returned instead, or simply
    /// the first catalog items when the source has no category.
    pub fn suggest(
        &self,
        title: &str,
        description: &str,
        exclude_id: Option<&str>,
        limit: usize,
    ) -> Vec<Product> {
        let source = Source::new(title, description);
        let candidates = || {
            self.items
                .iter()
                .filter(move |indexed| Some(indexed.item.id.as_str()) != exclude_id)
        };

        let scored: Vec<&IndexedItem> = candidates()
            .map(|indexed| (indexed, indexed.score(&source)))
            .filter(|(_, score)| *score > 0)
            .sorted_by(|(a, a_score), (b, b_score)| {
                b_score
                    .cmp(a_score)
                    .then_with(|| a.item.title.cmp(&b.item.title))
            })
            .take(limit)
            .map(|(indexed, _)| indexed)
            .collect();

        if scored.len() >= MIN_SCORED.min(limit) {
            return scored.into_iter().map(|i| i.item.to_product()).collect();
        }

        tracing::debug!(
            scored = scored.len(),
            categories = ?source.categories,
            "too few scored suggestions, falling back to category match"
        );

        candidates()
            .filter(|indexed| {
                source.categories.is_empty() || !indexed.categories.is_disjoint(&source.categories)
            })
            .take(limit)
            .map(|indexed| indexed.item.to_product())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SuggestionEngine {
        SuggestionEngine::new(&MockCatalog::new())
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn related_audio_items_rank_first() {
        let suggestions = engine().suggest(
            "On-Ear Wireless Headphones with Noise Isolation",
            "Comfortable over-ear fit with Bluetooth pairing, foldable design, and long-lasting battery life.",
            Some("100001"),
            10,
        );

        assert_eq!(suggestions.len(), 10);
        assert_eq!(suggestions[0].id, "100007");
        assert_eq!(suggestions[0].title, "Premium Bluetooth Speaker Model 1");
        assert!(suggestions
            .iter()
            .all(|p| p.title.contains("Bluetooth Speaker")));
    }

    #[test]
    fn ties_are_broken_by_title() {
        let suggestions = engine().suggest("bluetooth speaker", "", None, 3);
        let titles: Vec<_> = suggestions.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Premium Bluetooth Speaker Model 1",
                "Premium Bluetooth Speaker Model 11",
                "Premium Bluetooth Speaker Model 21",
            ]
        );
    }

    #[test]
    fn excluded_id_is_never_suggested() {
        let engine = engine();
        let catalog = MockCatalog::new();
        for item in catalog.items() {
            let suggestions =
                engine.suggest(&item.title, &item.description, Some(&item.id), 10);
            assert!(
                !ids(&suggestions).contains(&item.id.as_str()),
                "{} suggested itself",
                item.id
            );
        }
    }

    #[test]
    fn unrecognized_source_falls_back_to_catalog_order() {
        let suggestions = engine().suggest("Xq", "", Some("100001"), 5);
        assert_eq!(
            ids(&suggestions),
            vec!["100002", "100003", "100004", "100005", "100006"]
        );
    }

    #[test]
    fn sparse_overlap_falls_back_to_category_members() {
        // Only the tablet is mobile, so scoring yields a single hit.
        let suggestions = engine().suggest("android", "", None, 10);
        assert_eq!(ids(&suggestions), vec!["100005"]);
    }

    #[test]
    fn fallback_keeps_catalog_order() {
        // The air fryer's "air" token is contained in "chair", so it counts as furniture too.
        let suggestions = engine().suggest("lumbar cushion", "", None, 10);
        assert_eq!(ids(&suggestions), vec!["100004", "100006"]);
    }

    #[test]
    fn floor_is_capped_by_limit() {
        let suggestions = engine().suggest("bluetooth speaker", "", None, 2);
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn zero_limit_returns_nothing() {
        assert!(engine().suggest("bluetooth speaker", "", None, 0).is_empty());
    }

    #[test]
    fn suggestions_meet_floor_when_catalog_allows() {
        let engine = engine();
        let catalog = MockCatalog::new();
        for item in catalog.items().iter().skip(6) {
            let suggestions =
                engine.suggest(&item.title, &item.description, Some(&item.id), 10);
            assert!(suggestions.len() >= 4, "{} got {}", item.id, suggestions.len());
        }
    }
}
