//! Fridge inventory model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::InventoryItemId;
use crate::error::ValidationError;

/// Broad food category, used only for display grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Dairy,
    Fruit,
    Meat,
    Vegetable,
    #[default]
    Etc,
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Dairy => "유제품",
            Self::Fruit => "과일",
            Self::Meat => "육류",
            Self::Vegetable => "채소",
            Self::Etc => "기타",
        };
        write!(f, "{}", label)
    }
}

/// A fridge or pantry entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub name: String,
    pub quantity: u32,
    pub unit: String,
    pub expiry_date: NaiveDate,
    #[serde(default)]
    pub category: FoodCategory,
}

impl InventoryItem {
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        unit: impl Into<String>,
        expiry_date: NaiveDate,
        category: FoodCategory,
    ) -> Self {
        Self {
            id: InventoryItemId::new(),
            name: name.into(),
            quantity,
            unit: unit.into(),
            expiry_date,
            category,
        }
    }
}

/// Raw input from the "add to fridge" form
#[derive(Debug, Clone, Default)]
pub struct InventoryDraft {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub expiry_date: String,
}

impl InventoryDraft {
    /// Validate the draft; items added by hand are filed under [`FoodCategory::Etc`]
    pub fn validate(&self) -> Result<InventoryItem, ValidationError> {
        if [&self.name, &self.quantity, &self.unit, &self.expiry_date]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(ValidationError::MissingFields);
        }

        let quantity = self
            .quantity
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| ValidationError::InvalidQuantity(self.quantity.trim().to_string()))?;

        let expiry_date = NaiveDate::parse_from_str(self.expiry_date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(self.expiry_date.trim().to_string()))?;

        Ok(InventoryItem::new(
            self.name.trim(),
            quantity,
            self.unit.trim(),
            expiry_date,
            FoodCategory::Etc,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> InventoryDraft {
        InventoryDraft {
            name: "두부".into(),
            quantity: "2".into(),
            unit: "모".into(),
            expiry_date: "2024-01-11".into(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let item = draft().validate().unwrap();
        assert_eq!(item.name, "두부");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.category, FoodCategory::Etc);
        assert_eq!(item.expiry_date, NaiveDate::from_ymd_opt(2024, 1, 11).unwrap());
    }

    #[test]
    fn test_missing_unit() {
        let mut d = draft();
        d.unit = String::new();
        assert_eq!(d.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_bad_quantity_and_date() {
        let mut d = draft();
        d.quantity = "0".into();
        assert!(matches!(d.validate(), Err(ValidationError::InvalidQuantity(_))));

        let mut d = draft();
        d.expiry_date = "11/01/2024".into();
        assert!(matches!(d.validate(), Err(ValidationError::InvalidDate(_))));
    }
}
