//! Shopping list model

use serde::{Deserialize, Serialize};

use super::ids::ShoppingItemId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: ShoppingItemId,
    pub name: String,
    pub quantity: u32,
    pub unit: String,
    #[serde(default)]
    pub checked: bool,
}

impl ShoppingItem {
    pub fn new(name: impl Into<String>, quantity: u32, unit: impl Into<String>) -> Self {
        Self {
            id: ShoppingItemId::new(),
            name: name.into(),
            quantity,
            unit: unit.into(),
            checked: false,
        }
    }

    /// Flip the checked state
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut item = ShoppingItem::new("치즈", 200, "g");
        assert!(!item.checked);
        item.toggle();
        assert!(item.checked);
        item.toggle();
        assert!(!item.checked);
    }
}
