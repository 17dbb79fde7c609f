mod product_provider;

pub use product_provider::*;
