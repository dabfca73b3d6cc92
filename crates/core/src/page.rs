use serde::Deserialize;

/// One requested slice of a paginated listing. The index is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub index: u32,
    pub size: u32,
}

impl PageRequest {
    #[must_use]
    pub const fn new(index: u32, size: u32) -> Self {
        Self { index, size }
    }

    /// The first page with the same size.
    #[must_use]
    pub const fn first(size: u32) -> Self {
        Self { index: 0, size }
    }
}

/// Placement of a fetched page within the full listing.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub index: u32,
    pub size: u32,
    pub total_pages: u32,
}

/// One fetched page of items.
///
/// Whenever `items` is non-empty, `page.index < page.total_pages` and
/// `items.len() <= page.size` hold; both are backend guarantees, not
/// client-enforced.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: PageInfo,
}

impl<T> PageResponse<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a page exists after this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page.index + 1 < self.page.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_response_wire_shape() {
        let page: PageResponse<String> = serde_json::from_str(
            r#"{"items": ["a", "b"], "page": {"index": 1, "size": 2, "totalPages": 3}}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.page.total_pages, 3);
        assert!(page.has_next());
    }

    #[test]
    fn test_last_page_has_no_next() {
        let page: PageResponse<i64> = serde_json::from_str(
            r#"{"items": [5], "page": {"index": 2, "size": 10, "totalPages": 3}}"#,
        )
        .unwrap();
        assert!(!page.has_next());
    }

    #[test]
    fn test_empty_listing() {
        let page: PageResponse<i64> = serde_json::from_str(
            r#"{"items": [], "page": {"index": 0, "size": 10, "totalPages": 0}}"#,
        )
        .unwrap();
        assert!(page.is_empty());
        assert!(!page.has_next());
    }
}
