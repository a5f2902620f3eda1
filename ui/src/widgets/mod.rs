mod confirm_dialog;
mod input_dialog;
mod paged_table;

pub use confirm_dialog::{ConfirmChoice, confirm_dialog};
pub use input_dialog::{InputChoice, input_dialog};
pub use paged_table::{PagedTable, ROWS_PER_PAGE_CHOICES, RowActions, TableEvent, TableUiState};
