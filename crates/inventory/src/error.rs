use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InventoryError {
    /// The mutation would leave an item with a negative or non-numeric
    /// quantity; the store is left untouched.
    #[error("invalid quantity {quantity} for {name:?}")]
    InvalidQuantity { name: String, quantity: f64 },

    #[error("no such item: {0}")]
    NotFound(String),
}
