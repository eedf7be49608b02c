use serde::{Deserialize, Serialize};
use ulid::Ulid;

use fridgeplan_mealplan::MissingEntry;
use fridgeplan_shared::same_name;

use crate::error::ShoppingError;

/// One pantry staple the household always keeps in stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlwaysHaveItem {
    pub id: String,
    pub name: String,
}

/// Staples that never need buying: salt, oil, and whatever else the user
/// declares always on hand. Shortfalls for these names are dropped before
/// they reach the grocery list.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlwaysHaveList {
    items: Vec<AlwaysHaveItem>,
}

impl AlwaysHaveList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a staple. Names are deduplicated case-insensitively.
    pub fn add(&mut self, name: &str) -> Result<AlwaysHaveItem, ShoppingError> {
        let trimmed = name.trim();
        if self.contains(trimmed) {
            return Err(ShoppingError::AlreadyListed(trimmed.to_string()));
        }
        let item = AlwaysHaveItem {
            id: Ulid::new().to_string(),
            name: trimmed.to_string(),
        };
        self.items.push(item.clone());
        Ok(item)
    }

    pub fn remove(&mut self, id: &str) -> Result<AlwaysHaveItem, ShoppingError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| ShoppingError::NotFound(id.to_string()))?;
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| same_name(&item.name, name))
    }

    /// Items sorted by name for display.
    pub fn sorted(&self) -> Vec<&AlwaysHaveItem> {
        let mut items: Vec<&AlwaysHaveItem> = self.items.iter().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Drop shortfall entries whose names are staples.
    pub fn filter_missing(&self, entries: Vec<MissingEntry>) -> Vec<MissingEntry> {
        entries
            .into_iter()
            .filter(|entry| !self.contains(&entry.name))
            .collect()
    }
}
