use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use fridgeplan_inventory::InventoryStore;
use fridgeplan_mealplan::MissingEntry;
use fridgeplan_shared::{CategoryConfig, same_name, sorted_for_display};

use crate::error::ShoppingError;
use crate::section::{StoreSection, classify_section};

/// One item to buy.
///
/// Identity is the `id`, not the name: manual entries and derived entries
/// coexist before merging, so equality-by-name only governs quantity
/// summation on add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: String,
    /// Display name; casing of the first add is kept.
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub section: StoreSection,
}

/// The accumulated shopping list.
///
/// Adding an entry whose name matches an existing item (case-insensitively)
/// sums quantities into that item; otherwise a new item is appended with a
/// fresh identity and a classifier-assigned store section.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroceryList {
    items: Vec<GroceryItem>,
}

impl GroceryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, merging case-insensitively by name.
    ///
    /// Units are not reconciled on merge: the most recent unit wins. The
    /// two legitimately differ only in display ("" vs "g"), and nothing
    /// downstream computes across units.
    pub fn add(&mut self, name: &str, quantity: f64, unit: &str) -> Result<(), ShoppingError> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(ShoppingError::InvalidQuantity {
                name: name.to_string(),
                quantity,
            });
        }

        match self
            .items
            .iter_mut()
            .find(|item| same_name(&item.name, name))
        {
            Some(item) => {
                item.quantity += quantity;
                item.unit = unit.to_string();
            }
            None => self.items.push(GroceryItem {
                id: Ulid::new().to_string(),
                name: name.trim().to_string(),
                quantity,
                unit: unit.to_string(),
                section: classify_section(name),
            }),
        }
        Ok(())
    }

    /// Feed computed shortfalls into the list.
    pub fn add_missing(&mut self, entries: &[MissingEntry]) -> Result<(), ShoppingError> {
        for entry in entries {
            self.add(&entry.name, entry.quantity, &entry.unit)?;
        }
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<GroceryItem, ShoppingError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| ShoppingError::NotFound(id.to_string()))?;
        Ok(self.items.remove(index))
    }

    pub fn set_quantity(&mut self, id: &str, quantity: f64) -> Result<(), ShoppingError> {
        let item = self.item_mut(id)?;
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(ShoppingError::InvalidQuantity {
                name: item.name.clone(),
                quantity,
            });
        }
        item.quantity = quantity;
        Ok(())
    }

    pub fn increase(&mut self, id: &str) -> Result<(), ShoppingError> {
        let item = self.item_mut(id)?;
        item.quantity += 1.0;
        Ok(())
    }

    /// Step a quantity down by one; quantities never drop below 1 this way
    /// (delete the item instead).
    pub fn decrease(&mut self, id: &str) -> Result<(), ShoppingError> {
        let item = self.item_mut(id)?;
        if item.quantity > 1.0 {
            item.quantity -= 1.0;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&GroceryItem> {
        self.items.iter().find(|item| same_name(&item.name, name))
    }

    /// Transfer every item into the fridge, then empty the list.
    ///
    /// The transfer is one logical operation: all upserts are applied to a
    /// working copy of the inventory, which replaces the original only when
    /// every item has gone through. A failure therefore changes neither
    /// store, and re-running after a failure cannot double-add. Fridge
    /// categories are assigned by the fridge classifier on first insert.
    pub fn send_to_inventory(
        &mut self,
        inventory: &mut InventoryStore,
    ) -> Result<usize, ShoppingError> {
        let mut staged = inventory.clone();
        for item in &self.items {
            staged.upsert(&item.name, item.quantity, &item.unit, None)?;
        }

        let transferred = self.items.len();
        *inventory = staged;
        self.items.clear();
        Ok(transferred)
    }

    /// Items grouped by store section, sections in the given display order,
    /// empty sections omitted. Items whose section is absent from the
    /// configuration fall into the `other` group.
    pub fn grouped<'a>(
        &'a self,
        order: &[CategoryConfig],
    ) -> Vec<(CategoryConfig, Vec<&'a GroceryItem>)> {
        let configs = sorted_for_display(order);
        let known: HashSet<&str> = configs.iter().map(|c| c.id.as_str()).collect();

        configs
            .iter()
            .map(|config| {
                let members: Vec<&GroceryItem> = self
                    .items
                    .iter()
                    .filter(|item| {
                        item.section.id() == config.id
                            || (config.id == "other" && !known.contains(item.section.id()))
                    })
                    .collect();
                (config.clone(), members)
            })
            .filter(|(_, members)| !members.is_empty())
            .collect()
    }

    fn item_mut(&mut self, id: &str) -> Result<&mut GroceryItem, ShoppingError> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ShoppingError::NotFound(id.to_string()))
    }
}
