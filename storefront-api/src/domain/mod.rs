pub mod catalog;
mod error;
pub mod models;
pub mod ports;
pub mod search;
pub mod suggest;

pub use error::*;
