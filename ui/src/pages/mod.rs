//! Management screens. Each page owns its data source and page window,
//! renders the shared paged table, and serves the table's events.

mod categories_page;
mod games_page;
mod table_data;
mod users_page;

pub use categories_page::{CategoriesOverlay, CategoriesPage};
pub use games_page::{GamesOverlay, GamesPage};
pub use table_data::TableData;
pub use users_page::{UsersOverlay, UsersPage};
