//! Shopping page views: fridge contents, recipes and the shopping list

use serde::Serialize;
use tabled::Tabled;

use super::report::{format_header, labeled};
use crate::models::{InventoryItem, Recipe, ShoppingItem};
use crate::services::{Expiry, FridgeSummary, RecipeAvailability};

const LABEL_WIDTH: usize = 16;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct InventoryRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "재료")]
    pub name: String,
    #[tabled(rename = "수량")]
    pub quantity: String,
    #[tabled(rename = "분류")]
    pub category: String,
    #[tabled(rename = "유통기한")]
    pub expiry_date: String,
    #[tabled(rename = "상태")]
    pub status: String,
}

impl InventoryRow {
    pub fn new(item: &InventoryItem, expiry: Expiry) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            quantity: format!("{}{}", item.quantity, item.unit),
            category: item.category.to_string(),
            expiry_date: item.expiry_date.to_string(),
            status: expiry.to_string(),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RecipeRow {
    #[tabled(rename = "요리")]
    pub name: String,
    #[tabled(rename = "재료")]
    pub ingredients: String,
    #[tabled(rename = "시간")]
    pub cook_time: String,
    #[tabled(rename = "난이도")]
    pub difficulty: String,
    #[tabled(rename = "가능")]
    pub available: String,
    #[tabled(rename = "부족한 재료")]
    pub missing: String,
}

impl RecipeRow {
    pub fn new(recipe: &Recipe, availability: &RecipeAvailability) -> Self {
        Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.join(", "),
            cook_time: recipe.cook_time_label(),
            difficulty: recipe.difficulty.to_string(),
            available: if availability.available { "가능" } else { "불가" }.to_string(),
            missing: availability.missing.join(", "),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ShoppingRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "완료")]
    pub checked: String,
    #[tabled(rename = "품목")]
    pub name: String,
    #[tabled(rename = "수량")]
    pub quantity: String,
}

impl From<&ShoppingItem> for ShoppingRow {
    fn from(item: &ShoppingItem) -> Self {
        Self {
            id: item.id.to_string(),
            checked: if item.checked { "✓" } else { "" }.to_string(),
            name: item.name.clone(),
            quantity: format!("{}{}", item.quantity, item.unit),
        }
    }
}

pub fn format_fridge_overview(summary: &FridgeSummary) -> String {
    [
        format_header("장보기 & 식사 도우미"),
        labeled("냉장고 재료", summary.total_items, LABEL_WIDTH),
        labeled("만들 수 있는 요리", summary.available_recipes, LABEL_WIDTH),
        labeled("유통기한 임박", summary.expiring_items, LABEL_WIDTH),
        labeled("장보기 완료", summary.shopping_progress(), LABEL_WIDTH),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodCategory;
    use chrono::NaiveDate;

    #[test]
    fn test_inventory_row_status_text() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        let milk = InventoryItem::new("우유", 1, "팩", today, FoodCategory::Dairy);
        let row = InventoryRow::new(&milk, Expiry::classify(milk.expiry_date, today));
        assert_eq!(row.status, "0일 남음");
        assert_eq!(row.quantity, "1팩");

        let yesterday = today.pred_opt().unwrap();
        let row = InventoryRow::new(&milk, Expiry::classify(yesterday, today));
        assert_eq!(row.status, "유통기한 만료");
    }

    #[test]
    fn test_overview_counts() {
        let summary = FridgeSummary {
            total_items: 4,
            expiring_items: 3,
            available_recipes: 3,
            shopping_done: 1,
            shopping_total: 4,
        };
        let text = format_fridge_overview(&summary);
        assert!(text.contains("1/4"));
        assert!(text.contains("유통기한 임박"));
    }
}
