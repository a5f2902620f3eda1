use serde::{Deserialize, Serialize};

use crate::TableError;

/// Maximum number of numbered buttons in the pagination footer, not
/// counting the leading/trailing anchors.
const MAX_NUMBERED_BUTTONS: u32 = 5;

/// One entry in the rendered page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    /// A clickable page number.
    Number(u32),
    /// A disabled "..." separator.
    Ellipsis,
}

impl PageEntry {
    pub fn as_number(self) -> Option<u32> {
        match self {
            Self::Number(page) => Some(page),
            Self::Ellipsis => None,
        }
    }
}

/// Pagination state the caller passes into the table.
///
/// Invariant: `1 <= current_page <= total_pages` and `rows_per_page >= 1`.
/// [`PageWindow::new`] enforces it; callers that already hold a window use
/// [`PageWindow::clamp`] to repair a stale page pointer after the dataset
/// shrank. The widget itself never self-corrects a bad window, it only
/// disables prev/next at the boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub current_page: u32,
    pub total_pages: u32,
    pub rows_per_page: u32,
}

impl PageWindow {
    pub fn new(current_page: u32, total_pages: u32, rows_per_page: u32) -> Result<Self, TableError> {
        if total_pages < 1 || rows_per_page < 1 || current_page < 1 || current_page > total_pages {
            return Err(TableError::InvalidPageWindow {
                current_page,
                total_pages,
                rows_per_page,
            });
        }
        Ok(Self {
            current_page,
            total_pages,
            rows_per_page,
        })
    }

    /// First page of an untouched table.
    pub fn first(rows_per_page: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            rows_per_page: rows_per_page.max(1),
        }
    }

    /// Clamp `page` into this window's valid range.
    pub fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages.max(1))
    }

    /// Repair the window after `total_pages` changed underneath it.
    #[must_use]
    pub fn clamp(mut self) -> Self {
        self.total_pages = self.total_pages.max(1);
        self.rows_per_page = self.rows_per_page.max(1);
        self.current_page = self.current_page.clamp(1, self.total_pages);
        self
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Compute the bounded page-number strip.
    ///
    /// At most five numbered buttons, centered on `current_page` and
    /// clamped to `[1, total_pages]`; when the clamped range is short it
    /// is extended toward whichever end has room. Page 1 is prepended
    /// when the window starts past it (with an ellipsis when the gap is
    /// more than one page), and `total_pages` is appended symmetrically.
    pub fn page_entries(&self) -> Vec<PageEntry> {
        let first_page = 1u32;
        let last_page = self.total_pages.max(1);
        let current = self.current_page.clamp(first_page, last_page);

        let mut start = current.saturating_sub(2).max(first_page);
        let mut end = (current + 2).min(last_page);

        // Extend a short range toward the end that has room.
        let range = end - start + 1;
        if range < MAX_NUMBERED_BUTTONS {
            if start == first_page {
                end = (start + MAX_NUMBERED_BUTTONS - 1).min(last_page);
            } else {
                start = end
                    .saturating_sub(MAX_NUMBERED_BUTTONS - 1)
                    .max(first_page);
            }
        }

        let mut entries = Vec::new();
        if start > first_page {
            entries.push(PageEntry::Number(first_page));
            if start > first_page + 1 {
                entries.push(PageEntry::Ellipsis);
            }
        }
        for page in start..=end {
            entries.push(PageEntry::Number(page));
        }
        if end < last_page {
            if end < last_page - 1 {
                entries.push(PageEntry::Ellipsis);
            }
            entries.push(PageEntry::Number(last_page));
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::{PageEntry, PageWindow};
    use crate::TableError;

    fn entries(current_page: u32, total_pages: u32) -> Vec<PageEntry> {
        PageWindow {
            current_page,
            total_pages,
            rows_per_page: 10,
        }
        .page_entries()
    }

    fn numbers(entries: &[PageEntry]) -> Vec<u32> {
        entries.iter().filter_map(|e| e.as_number()).collect()
    }

    #[test]
    fn small_totals_list_every_page_without_ellipses() {
        for total in 1..=5 {
            for current in 1..=total {
                let strip = entries(current, total);
                assert_eq!(
                    numbers(&strip),
                    (1..=total).collect::<Vec<_>>(),
                    "current={current} total={total}"
                );
                assert!(
                    !strip.contains(&PageEntry::Ellipsis),
                    "current={current} total={total}"
                );
            }
        }
    }

    #[test]
    fn first_page_of_twelve() {
        use PageEntry::{Ellipsis, Number};
        assert_eq!(
            entries(1, 12),
            [
                Number(1),
                Number(2),
                Number(3),
                Number(4),
                Number(5),
                Ellipsis,
                Number(12),
            ]
        );
    }

    #[test]
    fn middle_page_of_twelve() {
        use PageEntry::{Ellipsis, Number};
        assert_eq!(
            entries(6, 12),
            [
                Number(1),
                Ellipsis,
                Number(4),
                Number(5),
                Number(6),
                Number(7),
                Number(8),
                Ellipsis,
                Number(12),
            ]
        );
    }

    #[test]
    fn last_page_of_twelve() {
        use PageEntry::{Ellipsis, Number};
        assert_eq!(
            entries(12, 12),
            [
                Number(1),
                Ellipsis,
                Number(8),
                Number(9),
                Number(10),
                Number(11),
                Number(12),
            ]
        );
    }

    #[test]
    fn window_adjacent_to_first_page_omits_ellipsis() {
        use PageEntry::{Ellipsis, Number};
        // current=4 of 12: window [2,6]; page 1 is adjacent, no gap.
        assert_eq!(
            entries(4, 12),
            [
                Number(1),
                Number(2),
                Number(3),
                Number(4),
                Number(5),
                Number(6),
                Ellipsis,
                Number(12),
            ]
        );
    }

    #[test]
    fn window_adjacent_to_last_page_omits_ellipsis() {
        use PageEntry::{Ellipsis, Number};
        // current=9 of 12: window [7,11]; page 12 is adjacent, no gap.
        assert_eq!(
            entries(9, 12),
            [
                Number(1),
                Ellipsis,
                Number(7),
                Number(8),
                Number(9),
                Number(10),
                Number(11),
                Number(12),
            ]
        );
    }

    #[test]
    fn bounded_shape_for_all_windows() {
        for total in 1..=40 {
            for current in 1..=total {
                let strip = entries(current, total);
                let nums = numbers(&strip);
                let windowed = strip
                    .iter()
                    .filter_map(|e| e.as_number())
                    .filter(|&p| p != 1 && p != total)
                    .count();
                // At most 5 in the core window; anchors add at most 2.
                assert!(windowed <= 5, "current={current} total={total}");
                assert!(nums.len() <= 7, "current={current} total={total}");
                assert!(
                    nums.contains(&current),
                    "strip must include the current page (current={current} total={total})"
                );
                let ellipses = strip
                    .iter()
                    .filter(|e| matches!(e, PageEntry::Ellipsis))
                    .count();
                assert!(ellipses <= 2, "current={current} total={total}");
                // Numbers are strictly increasing.
                assert!(
                    nums.windows(2).all(|pair| pair[0] < pair[1]),
                    "current={current} total={total}"
                );
            }
        }
    }

    #[test]
    fn new_rejects_out_of_range_windows() {
        assert!(matches!(
            PageWindow::new(0, 5, 10),
            Err(TableError::InvalidPageWindow { .. })
        ));
        assert!(matches!(
            PageWindow::new(6, 5, 10),
            Err(TableError::InvalidPageWindow { .. })
        ));
        assert!(matches!(
            PageWindow::new(1, 0, 10),
            Err(TableError::InvalidPageWindow { .. })
        ));
        assert!(matches!(
            PageWindow::new(1, 1, 0),
            Err(TableError::InvalidPageWindow { .. })
        ));
        assert!(PageWindow::new(3, 5, 10).is_ok());
    }

    #[test]
    fn clamp_repairs_stale_pointer() {
        let window = PageWindow {
            current_page: 9,
            total_pages: 4,
            rows_per_page: 10,
        }
        .clamp();
        assert_eq!(window.current_page, 4);

        let window = PageWindow {
            current_page: 3,
            total_pages: 0,
            rows_per_page: 0,
        }
        .clamp();
        assert_eq!(window.current_page, 1);
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.rows_per_page, 1);
    }

    #[test]
    fn prev_next_flags_at_boundaries() {
        let first = PageWindow {
            current_page: 1,
            total_pages: 3,
            rows_per_page: 10,
        };
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = PageWindow {
            current_page: 3,
            total_pages: 3,
            rows_per_page: 10,
        };
        assert!(last.has_prev());
        assert!(!last.has_next());

        let only = PageWindow {
            current_page: 1,
            total_pages: 1,
            rows_per_page: 10,
        };
        assert!(!only.has_prev());
        assert!(!only.has_next());
    }
}
