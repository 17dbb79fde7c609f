use serde::Serialize;

/// Page metadata derived from a merged result set. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// `page` and `limit` must already be normalized (both >= 1).
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let total_pages = total.div_ceil(limit).max(1);
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index range of this page within the full result set.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Returns the items of this page, in order.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .skip(self.offset())
            .take(self.limit)
            .cloned()
            .collect()
    }
}
