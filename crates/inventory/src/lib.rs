mod category;
mod error;
mod store;

pub use category::{FridgeCategory, classify_fridge, default_fridge_order};
pub use error::InventoryError;
pub use store::{InventoryItem, InventoryStore};
