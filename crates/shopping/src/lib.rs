mod always_have;
mod error;
mod export;
mod list;
mod section;

pub use always_have::{AlwaysHaveItem, AlwaysHaveList};
pub use error::ShoppingError;
pub use export::{DEFAULT_SEARCH_BASE_URL, export_links, export_text};
pub use list::{GroceryItem, GroceryList};
pub use section::{StoreSection, classify_section, default_section_order};
