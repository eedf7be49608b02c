use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use fridgeplan_shared::normalize_name;

use crate::category::{FridgeCategory, classify_fridge};
use crate::error::InventoryError;

/// One on-hand ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Display name; casing of the first insert is kept.
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: FridgeCategory,
}

/// The fridge: the authoritative mapping of what is on hand.
///
/// Keyed by normalized name ([`normalize_name`]), so there is at most one
/// entry per name regardless of casing; duplicate inserts merge by summing
/// quantities. The store is purely in-memory; persistence is the caller's
/// concern, performed after a successful mutation.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryStore {
    items: BTreeMap<String, InventoryItem>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` to an item's quantity, creating the item if absent.
    ///
    /// On merge the existing unit is kept and the category is preserved
    /// unless explicitly overridden. A new item without an explicit category
    /// is filed by the classifier. Rejects any mutation whose resulting
    /// quantity would be negative, leaving the store untouched.
    pub fn upsert(
        &mut self,
        name: &str,
        delta: f64,
        unit: &str,
        category: Option<FridgeCategory>,
    ) -> Result<(), InventoryError> {
        if !delta.is_finite() {
            return Err(InventoryError::InvalidQuantity {
                name: name.to_string(),
                quantity: delta,
            });
        }

        let key = normalize_name(name);
        match self.items.get_mut(&key) {
            Some(item) => {
                let next = item.quantity + delta;
                if next < 0.0 {
                    return Err(InventoryError::InvalidQuantity {
                        name: item.name.clone(),
                        quantity: next,
                    });
                }
                item.quantity = next;
                if let Some(category) = category {
                    item.category = category;
                }
            }
            None => {
                if delta < 0.0 {
                    return Err(InventoryError::InvalidQuantity {
                        name: name.to_string(),
                        quantity: delta,
                    });
                }
                self.items.insert(
                    key,
                    InventoryItem {
                        name: name.trim().to_string(),
                        quantity: delta,
                        unit: unit.to_string(),
                        category: category.unwrap_or_else(|| classify_fridge(name)),
                    },
                );
            }
        }
        Ok(())
    }

    /// Overwrite an item's quantity. Fails for quantities ≤ 0; callers
    /// wanting to drop an item use [`InventoryStore::remove`] instead.
    pub fn set_quantity(&mut self, name: &str, quantity: f64) -> Result<(), InventoryError> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(InventoryError::InvalidQuantity {
                name: name.to_string(),
                quantity,
            });
        }

        let key = normalize_name(name);
        let item = self
            .items
            .get_mut(&key)
            .ok_or_else(|| InventoryError::NotFound(name.to_string()))?;
        item.quantity = quantity;
        Ok(())
    }

    /// Delete an item, returning it. Absent items report `NotFound`, which
    /// callers may treat as benign.
    pub fn remove(&mut self, name: &str) -> Result<InventoryItem, InventoryError> {
        self.items
            .remove(&normalize_name(name))
            .ok_or_else(|| InventoryError::NotFound(name.to_string()))
    }

    /// Case-insensitive lookup.
    pub fn find(&self, name: &str) -> Option<&InventoryItem> {
        self.items.get(&normalize_name(name))
    }

    /// Snapshot of all items, ordered by normalized name, stable across
    /// calls so grouped views render consistently.
    pub fn all(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
