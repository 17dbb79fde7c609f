mod pagination;
mod product;
mod provider;

pub use pagination::*;
pub use product::*;
pub use provider::*;
