//! The request shape sent by the UI: sort, paginate and filter.

use super::filter::FilterNode;
use serde::{Deserialize, Serialize};

/// Page size used when the request asks for zero or a negative size.
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// Largest limit or offset SQLite accepts as an integer.
const MAX_ROWS: u64 = i64::MAX as u64;

/// Pagination settings.
///
/// `page` is 1-based and takes precedence over `offset`: when a positive page
/// is given the explicit offset is ignored. Negative values are clamped
/// rather than rejected, and an offset past `i64::MAX` is capped there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginate {
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub page: i64,
}

impl Paginate {
    pub fn page(page: i64, size: i64) -> Self {
        Self { size, offset: 0, page }
    }

    pub fn window(offset: i64, size: i64) -> Self {
        Self { size, offset, page: 0 }
    }

    /// Effective row limit.
    pub fn limit(&self) -> u64 {
        u64::try_from(self.size).ok().filter(|&s| s > 0).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Effective row offset.
    pub fn effective_offset(&self) -> u64 {
        match u64::try_from(self.page) {
            Ok(page) if page > 0 => (page - 1).saturating_mul(self.limit()).min(MAX_ROWS),
            _ => u64::try_from(self.offset).unwrap_or(0),
        }
    }
}

/// A complete list request for one record kind.
///
/// Sort fields may be given in camelCase (wire) or snake_case (column) form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query<F> {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub asc: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub desc: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paginate: Option<Paginate>,
    #[serde(rename = "where", default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterNode<F>>,
}

impl<F> Default for Query<F> {
    fn default() -> Self {
        Self { asc: Vec::new(), desc: Vec::new(), paginate: None, filter: None }
    }
}

impl<F> Query<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ascending(mut self, field: impl Into<String>) -> Self {
        self.asc.push(field.into());
        self
    }

    pub fn descending(mut self, field: impl Into<String>) -> Self {
        self.desc.push(field.into());
        self
    }

    pub fn paginate(mut self, paginate: Paginate) -> Self {
        self.paginate = Some(paginate);
        self
    }

    pub fn filter(mut self, node: FilterNode<F>) -> Self {
        self.filter = Some(node);
        self
    }
}
