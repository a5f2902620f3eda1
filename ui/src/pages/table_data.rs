use gamedesk_business::{PageProvider as _, PageQuery, PageResult, PageWindow, Record, SampleProvider, TableError};

use crate::widgets::TableUiState;

/// Everything a management page owns to drive one paged table: the data
/// source, the authoritative page window, the current page of rows, and
/// the table's UI state.
pub struct TableData {
    pub provider: SampleProvider,
    pub window: PageWindow,
    pub rows: Vec<Record>,
    pub table: TableUiState,
}

impl TableData {
    /// Build and load page 1. The initial fetch happens here, not during
    /// render; rendering alone never issues a page request.
    pub fn new(provider: SampleProvider, rows_per_page: u32) -> Self {
        let mut data = Self {
            provider,
            window: PageWindow::first(rows_per_page),
            rows: Vec::new(),
            table: TableUiState::new(rows_per_page),
        };
        data.request(PageQuery::new(1, rows_per_page, ""));
        data
    }

    /// Serve a page request, clamping an out-of-range page to the valid
    /// range before retrying. Clamping is this caller's job: the widget
    /// never self-corrects, and the provider only rejects.
    pub fn request(&mut self, mut query: PageQuery) {
        match self.provider.fetch_page(&query) {
            Ok(result) => self.apply(&query, result),
            Err(TableError::PageOutOfRange { total_pages, .. }) => {
                query.page = query.page.clamp(1, total_pages);
                match self.provider.fetch_page(&query) {
                    Ok(result) => self.apply(&query, result),
                    Err(err) => self.fail(&err),
                }
            }
            Err(err) => self.fail(&err),
        }
    }

    /// Re-fetch the current page with the committed search term. Used
    /// after a mutation (add/edit/delete) so the table reflects it.
    pub fn refresh(&mut self) {
        self.request(PageQuery::new(
            self.window.current_page,
            self.table.rows_per_page(),
            self.table.committed_search(),
        ));
    }

    fn apply(&mut self, query: &PageQuery, result: PageResult) {
        self.window = PageWindow {
            current_page: query.page,
            total_pages: result.total_pages,
            rows_per_page: query.rows_per_page,
        }
        .clamp();
        self.rows = result.rows;
    }

    fn fail(&mut self, err: &TableError) {
        // Benign empty state; pagination naturally disables on one page.
        log::error!("page request failed: {err}");
        self.rows.clear();
        self.window = PageWindow::first(self.table.rows_per_page());
    }
}
