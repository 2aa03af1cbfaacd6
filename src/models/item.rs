//! Recommended household items

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::RecommendedItemId;
use super::money::Money;
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Kitchen,
    Living,
    Electronics,
    Clothing,
}

impl ItemCategory {
    pub fn all() -> &'static [Self] {
        &[Self::Kitchen, Self::Living, Self::Electronics, Self::Clothing]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Kitchen => "kitchen",
            Self::Living => "living",
            Self::Electronics => "electronics",
            Self::Clothing => "clothing",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Kitchen => "주방용품",
            Self::Living => "생활용품",
            Self::Electronics => "전자제품",
            Self::Clothing => "의류",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for ItemCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(s) || c.to_string() == s)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedItem {
    pub id: RecommendedItemId,
    pub name: String,
    pub category: ItemCategory,
    pub price: Money,
    pub original_price: Money,
    /// Average review score out of 5
    pub rating: f64,
    pub reviews: u32,
    pub features: Vec<String>,
    /// One-line digest of the reviews
    pub review_summary: String,
}

impl RecommendedItem {
    pub fn new(
        name: impl Into<String>,
        category: ItemCategory,
        price: Money,
        original_price: Money,
    ) -> Self {
        Self {
            id: RecommendedItemId::new(),
            name: name.into(),
            category,
            price,
            original_price,
            rating: 0.0,
            reviews: 0,
            features: Vec::new(),
            review_summary: String::new(),
        }
    }

    pub fn with_reviews(mut self, rating: f64, reviews: u32, summary: impl Into<String>) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self.review_summary = summary.into();
        self
    }

    pub fn with_features(mut self, features: &[&str]) -> Self {
        self.features = features.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Discount off the original price, rounded to the nearest whole percent
    pub fn discount_percent(&self) -> u32 {
        if !self.original_price.is_positive() || self.price >= self.original_price {
            return 0;
        }
        let saved = (self.original_price - self.price).won();
        let original = self.original_price.won();
        ((saved * 200 + original) / (2 * original)) as u32
    }
}
