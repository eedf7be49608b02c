//! User-configurable display ordering for category groupings.
//!
//! Grouped views (the fridge by category, the grocery list by store section)
//! render their groups in a persisted, user-editable permutation. This order
//! is independent of the classifier's internal bucket priority: one decides
//! where an item is filed, the other decides where its group appears on
//! screen.

use serde::{Deserialize, Serialize};

/// One entry of a display-order configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Stable identifier matching a category or section tag.
    pub id: String,
    /// Human-readable group heading.
    pub name: String,
    /// Position in the rendered list; lower comes first.
    pub order: u32,
}

impl CategoryConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>, order: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            order,
        }
    }
}

/// Sort a configuration into display order. The sort is stable, so entries
/// sharing an `order` value keep their persisted relative position.
pub fn sorted_for_display(configs: &[CategoryConfig]) -> Vec<CategoryConfig> {
    let mut sorted = configs.to_vec();
    sorted.sort_by_key(|c| c.order);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_for_display_orders_by_position() {
        let configs = vec![
            CategoryConfig::new("pantry", "Pantry", 2),
            CategoryConfig::new("produce", "Produce", 0),
            CategoryConfig::new("dairy", "Dairy", 1),
        ];

        let sorted = sorted_for_display(&configs);
        let ids: Vec<&str> = sorted.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["produce", "dairy", "pantry"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_positions() {
        let configs = vec![
            CategoryConfig::new("a", "A", 1),
            CategoryConfig::new("b", "B", 1),
            CategoryConfig::new("c", "C", 0),
        ];

        let sorted = sorted_for_display(&configs);
        let ids: Vec<&str> = sorted.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }
}
