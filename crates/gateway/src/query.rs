//! Deterministic query-parameter construction.
//!
//! Operations enumerate their parameters in a fixed allow-list order;
//! absent optional values are omitted entirely, never serialized as empty
//! or placeholder strings.

use std::fmt::Display;

use outreach_core::PageRequest;

/// Ordered query parameters for a single request.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    entries: Vec<(&'static str, String)>,
}

impl QueryParams {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Start from the page parameters every list operation carries.
    #[must_use]
    pub fn for_page(page: &PageRequest) -> Self {
        Self::new().set("pageIndex", page.index).set("pageSize", page.size)
    }

    /// Append a parameter.
    #[must_use]
    pub fn set(mut self, key: &'static str, value: impl Display) -> Self {
        self.entries.push((key, value.to_string()));
        self
    }

    /// Append a parameter when present; `None` entries are dropped.
    #[must_use]
    pub fn set_opt(mut self, key: &'static str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[(&'static str, String)] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
