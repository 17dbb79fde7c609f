mod auth;
mod client;
pub mod domain;
mod walmart_url;

pub(crate) use walmart_url::*;

pub use auth::*;
pub use client::*;
pub use domain::*;
