use thiserror::Error;

use fridgeplan_inventory::InventoryError;

#[derive(Error, Debug)]
pub enum ShoppingError {
    #[error("invalid quantity {quantity} for {name:?}")]
    InvalidQuantity { name: String, quantity: f64 },

    #[error("no grocery item with id {0}")]
    NotFound(String),

    #[error("{0:?} is already on the always-have list")]
    AlreadyListed(String),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
