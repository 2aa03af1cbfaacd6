//! Recipe model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RecipeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Easy => "쉬움",
            Self::Medium => "보통",
            Self::Hard => "어려움",
        };
        write!(f, "{}", label)
    }
}

/// A recipe suggestion
///
/// `available` is a stored flag. It is not recomputed from the fridge unless
/// the caller opts into ingredient matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: Vec<String>,
    pub cook_time_minutes: u32,
    pub difficulty: Difficulty,
    pub available: bool,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        ingredients: &[&str],
        cook_time_minutes: u32,
        difficulty: Difficulty,
        available: bool,
    ) -> Self {
        Self {
            id: RecipeId::new(),
            name: name.into(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            cook_time_minutes,
            difficulty,
            available,
        }
    }

    /// Cook time as shown on the recipe card, e.g. "15분"
    pub fn cook_time_label(&self) -> String {
        format!("{}분", self.cook_time_minutes)
    }
}
