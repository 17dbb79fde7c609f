pub(crate) mod error;
pub(crate) mod products;

pub(crate) use error::ApiError;
