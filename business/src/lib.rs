//! Domain logic for the Gamedesk admin console.
//!
//! UI code stays "dumb": it renders state and reports events. Everything
//! that can be tested without a display lives here:
//! - column descriptors and their validation
//! - the page window and the page-number windowing algorithm
//! - the `PageProvider` boundary plus the in-memory sample providers
//! - form validation for the add/edit and password dialogs
//! - the session context passed down by the app shell

mod column;
mod error;
mod gender;
mod page_window;
mod query;
mod record;
mod sample;
mod session;
mod validate;

pub use column::{ColumnKind, ColumnSpec};
pub use error::TableError;
pub use gender::Gender;
pub use page_window::{PageEntry, PageWindow};
pub use query::{PageProvider, PageQuery, PageResult, total_pages_for};
pub use record::{CellValue, Record};
pub use sample::{SampleProvider, sample_categories, sample_games, sample_users};
pub use session::Session;
pub use validate::{
    CategoryForm, GameForm, UserForm, validate_category_form, validate_game_form,
    validate_password_reset, validate_user_form,
};
