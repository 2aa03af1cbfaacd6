//! Fridge service
//!
//! Expiry classification for inventory items, recipe availability and the
//! counters shown at the top of the shopping page.
//!
//! Dates are compared as calendar days: an item expiring today has 0 days
//! left and is still in the warning window, an item that expired yesterday
//! has -1 days left and is expired.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use tracing::info;

use crate::error::{HomekeeperError, HomekeeperResult};
use crate::models::{InventoryDraft, InventoryItem, Recipe, ShoppingItem, ShoppingItemId};

/// Default number of days left at which an item starts to warn
pub const DEFAULT_WARNING_DAYS: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryStatus {
    Expired,
    Warning,
    Ok,
}

impl ExpiryStatus {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Expired => "red",
            Self::Warning => "orange",
            Self::Ok => "green",
        }
    }
}

/// Result of classifying one expiry date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Expiry {
    pub status: ExpiryStatus,
    /// Calendar days from today to the expiry date; negative once expired
    pub days_left: i64,
}

impl Expiry {
    /// Classify with the default two-day warning window
    pub fn classify(expiry_date: NaiveDate, today: NaiveDate) -> Self {
        Self::classify_with_window(expiry_date, today, DEFAULT_WARNING_DAYS)
    }

    pub fn classify_with_window(expiry_date: NaiveDate, today: NaiveDate, warning_days: i64) -> Self {
        let days_left = (expiry_date - today).num_days();
        let status = if days_left < 0 {
            ExpiryStatus::Expired
        } else if days_left <= warning_days {
            ExpiryStatus::Warning
        } else {
            ExpiryStatus::Ok
        };
        Self { status, days_left }
    }

    /// True for warning or expired items
    pub fn needs_attention(&self) -> bool {
        self.status != ExpiryStatus::Ok
    }
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            ExpiryStatus::Expired => write!(f, "유통기한 만료"),
            _ => write!(f, "{}일 남음", self.days_left),
        }
    }
}

/// How a recipe's availability is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityPolicy {
    /// Use the flag stored on the recipe
    #[default]
    Stored,
    /// Available only when every ingredient is in the fridge and not expired
    MatchInventory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeAvailability {
    pub available: bool,
    /// Ingredients not found in the fridge; empty under the stored policy
    pub missing: Vec<String>,
}

/// Decide whether `recipe` can be cooked
pub fn recipe_availability(
    recipe: &Recipe,
    inventory: &[InventoryItem],
    today: NaiveDate,
    policy: AvailabilityPolicy,
) -> RecipeAvailability {
    match policy {
        AvailabilityPolicy::Stored => RecipeAvailability {
            available: recipe.available,
            missing: Vec::new(),
        },
        AvailabilityPolicy::MatchInventory => {
            let missing: Vec<String> = recipe
                .ingredients
                .iter()
                .filter(|ingredient| {
                    !inventory.iter().any(|item| {
                        item.name.trim() == ingredient.trim()
                            && item.quantity > 0
                            && Expiry::classify(item.expiry_date, today).status
                                != ExpiryStatus::Expired
                    })
                })
                .cloned()
                .collect();
            RecipeAvailability {
                available: missing.is_empty(),
                missing,
            }
        }
    }
}

/// Counters for the shopping page header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FridgeSummary {
    pub total_items: usize,
    pub expiring_items: usize,
    pub available_recipes: usize,
    pub shopping_done: usize,
    pub shopping_total: usize,
}

impl FridgeSummary {
    /// "checked/total" as shown on the shopping-list card
    pub fn shopping_progress(&self) -> String {
        format!("{}/{}", self.shopping_done, self.shopping_total)
    }
}

/// The fridge, recipe book and shopping list owned by the shopping page
#[derive(Debug, Clone)]
pub struct Pantry {
    items: Vec<InventoryItem>,
    recipes: Vec<Recipe>,
    shopping: Vec<ShoppingItem>,
    warning_days: i64,
}

impl Default for Pantry {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }
}

impl Pantry {
    pub fn new(items: Vec<InventoryItem>, recipes: Vec<Recipe>, shopping: Vec<ShoppingItem>) -> Self {
        Self {
            items,
            recipes,
            shopping,
            warning_days: DEFAULT_WARNING_DAYS,
        }
    }

    pub fn with_warning_days(mut self, warning_days: i64) -> Self {
        self.warning_days = warning_days;
        self
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn shopping(&self) -> &[ShoppingItem] {
        &self.shopping
    }

    pub fn expiry_of(&self, item: &InventoryItem, today: NaiveDate) -> Expiry {
        Expiry::classify_with_window(item.expiry_date, today, self.warning_days)
    }

    /// Items that are expired or inside the warning window, soonest first
    pub fn expiring(&self, today: NaiveDate) -> Vec<(&InventoryItem, Expiry)> {
        let mut expiring: Vec<_> = self
            .items
            .iter()
            .map(|item| (item, self.expiry_of(item, today)))
            .filter(|(_, expiry)| expiry.needs_attention())
            .collect();
        expiring.sort_by_key(|(_, expiry)| expiry.days_left);
        expiring
    }

    /// Recipes paired with their availability under `policy`
    pub fn recipe_book(
        &self,
        today: NaiveDate,
        policy: AvailabilityPolicy,
    ) -> Vec<(&Recipe, RecipeAvailability)> {
        self.recipes
            .iter()
            .map(|recipe| (recipe, recipe_availability(recipe, &self.items, today, policy)))
            .collect()
    }

    pub fn summary(&self, today: NaiveDate, policy: AvailabilityPolicy) -> FridgeSummary {
        FridgeSummary {
            total_items: self.items.len(),
            expiring_items: self.expiring(today).len(),
            available_recipes: self
                .recipe_book(today, policy)
                .iter()
                .filter(|(_, availability)| availability.available)
                .count(),
            shopping_done: self.shopping.iter().filter(|s| s.checked).count(),
            shopping_total: self.shopping.len(),
        }
    }

    /// Validate a form submission and add it to the fridge
    pub fn add_item(&mut self, draft: &InventoryDraft) -> HomekeeperResult<&InventoryItem> {
        let item = draft.validate()?;
        info!(id = %item.id, name = %item.name, expiry = %item.expiry_date, "fridge item added");
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Flip a shopping-list entry between checked and unchecked
    pub fn toggle_shopping(&mut self, id: ShoppingItemId) -> HomekeeperResult<bool> {
        let item = self
            .shopping
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| HomekeeperError::shopping_item_not_found(id.to_string()))?;
        item.toggle();
        Ok(item.checked)
    }
}
