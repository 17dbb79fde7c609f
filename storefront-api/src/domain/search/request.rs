use crate::domain::models::ProviderKind;

/// A search request with paging already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub keyword: String,
    /// Always >= 1.
    pub page: usize,
    /// Always >= 1; capped by the caller's configured maximum.
    pub limit: usize,
    pub provider: Option<ProviderKind>,
}

impl SearchRequest {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            page: 1,
            limit: super::DEFAULT_LIMIT,
            provider: None,
        }
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn with_provider(mut self, provider: Option<ProviderKind>) -> Self {
        self.provider = provider;
        self
    }
}

/// Parses a raw `page` parameter. Missing, malformed and non-positive values become 1.
pub fn normalize_page(raw: Option<&str>) -> usize {
    parse_positive(raw).unwrap_or(1)
}

/// Parses a raw `limit` parameter, falling back to `default` and capping at `max`.
pub fn normalize_limit(raw: Option<&str>, default: usize, max: usize) -> usize {
    parse_positive(raw).unwrap_or(default).min(max).max(1)
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    let value = raw?.trim().parse::<i64>().ok()?;
    usize::try_from(value).ok().filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(normalize_page(None), 1);
        assert_eq!(normalize_page(Some("0")), 1);
        assert_eq!(normalize_page(Some("-3")), 1);
        assert_eq!(normalize_page(Some("abc")), 1);
        assert_eq!(normalize_page(Some("")), 1);
        assert_eq!(normalize_page(Some(" 4 ")), 4);
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(normalize_limit(None, 20, 20), 20);
        assert_eq!(normalize_limit(Some("5"), 20, 20), 5);
        assert_eq!(normalize_limit(Some("500"), 20, 20), 20);
        assert_eq!(normalize_limit(Some("0"), 20, 20), 20);
        assert_eq!(normalize_limit(Some("x"), 20, 20), 20);
    }

    #[test]
    fn builder_enforces_bounds() {
        let request = SearchRequest::new("kettle").with_page(0).with_limit(0);
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, 1);
        assert_eq!(request.provider, None);
    }
}
