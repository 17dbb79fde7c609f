use serde::Serialize;
use strum::{Display, EnumString};

/// Which source answered a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[strum(ascii_case_insensitive, serialize = "mock")]
    Mock,
    #[strum(ascii_case_insensitive, serialize = "walmart")]
    Walmart,
}

impl ProviderKind {
    /// Parses a `provider` query hint. Unknown values count as no hint.
    pub fn from_hint(hint: Option<&str>) -> Option<Self> {
        hint.and_then(|h| h.trim().parse().ok())
    }
}
