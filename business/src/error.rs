use thiserror::Error;
use ustr::Ustr;

/// Errors raised at the table's boundaries.
///
/// The widget itself never panics on bad input; callers are expected to
/// validate columns once and clamp page windows before rendering. These
/// variants make both failures explicit instead of silently tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A column descriptor cannot drive cell rendering.
    #[error("invalid column spec: {reason}")]
    InvalidColumnSpec { reason: String },

    /// A page window violates `1 <= current_page <= total_pages` or has a
    /// non-positive rows-per-page.
    #[error(
        "invalid page window: current_page={current_page}, total_pages={total_pages}, rows_per_page={rows_per_page}"
    )]
    InvalidPageWindow {
        current_page: u32,
        total_pages: u32,
        rows_per_page: u32,
    },

    /// A provider was asked for a page outside `[1, total_pages]`.
    #[error("page {requested} out of range (dataset has {total_pages} pages)")]
    PageOutOfRange { requested: u32, total_pages: u32 },

    /// A row is missing a field a non-action column needs.
    #[error("row has no field '{field}'")]
    MissingField { field: Ustr },
}
