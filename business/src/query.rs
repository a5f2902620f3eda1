use serde::{Deserialize, Serialize};

use crate::{Record, TableError};

/// One page request, as the table emits it and a provider consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// 1-based page number.
    pub page: u32,
    pub rows_per_page: u32,
    /// Committed search term; empty means no filter.
    pub search: String,
}

impl PageQuery {
    pub fn new(page: u32, rows_per_page: u32, search: impl Into<String>) -> Self {
        Self {
            page,
            rows_per_page,
            search: search.into(),
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    /// At most `rows_per_page` rows.
    pub rows: Vec<Record>,
    /// Always at least 1, even for an empty filtered set.
    pub total_pages: u32,
}

/// The query boundary between a management page and its data source.
///
/// The in-memory [`SampleProvider`](crate::SampleProvider) implements this
/// by filtering and slicing a generated record set; a real deployment
/// would implement it with a backend query. Pages and the table widget
/// are written against this trait only, so both work unmodified either
/// way.
pub trait PageProvider {
    /// Fetch one page. Implementations reject pages outside
    /// `[1, total_pages]` with [`TableError::PageOutOfRange`]; clamping a
    /// stale page pointer is the caller's job, before it builds the query.
    fn fetch_page(&self, query: &PageQuery) -> Result<PageResult, TableError>;
}

/// `ceil(total_rows / rows_per_page)`, never below 1: a table always has
/// a page 1 to stand on, even when the filter matched nothing.
pub fn total_pages_for(total_rows: usize, rows_per_page: u32) -> u32 {
    let per_page = rows_per_page.max(1) as usize;
    (total_rows.div_ceil(per_page)).max(1) as u32
}
