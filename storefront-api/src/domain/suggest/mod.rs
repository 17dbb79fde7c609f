//! "Similar item" suggestions for the product detail page.
//!
//! Scores the mock catalog against a product's title and description using
//! shared words and coarse categories. Unrelated to the search index.

mod categories;
mod engine;
mod tokenizer;

pub use engine::SuggestionEngine;
