//! Custom Axum extractors.

pub mod current_user;
pub mod pagination;
pub mod path;
pub mod validated;

pub use current_user::CurrentUser;
pub use pagination::ListItemsParams;
pub use path::parse_item_id;
pub use validated::{ApiQuery, ValidatedJson};
