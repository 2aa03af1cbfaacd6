//! Community, recommendation and emergency pages
//!
//! Category filters and sort orders over the sample lists, plus the small
//! counters each page shows in its header.

use serde::Serialize;
use std::cmp::Ordering;

use crate::models::{
    CommunityGroup, CommunityPost, CounselingService, EmergencyContact, EmergencyGuide,
    ItemCategory, RecommendedItem, StressBand,
};

/// Posts in `category`, or every post when `category` is `None`
pub fn posts_in<'a>(posts: &'a [CommunityPost], category: Option<&str>) -> Vec<&'a CommunityPost> {
    posts
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunitySummary {
    pub posts: usize,
    pub groups: usize,
    pub total_members: u32,
    pub total_likes: u32,
}

impl CommunitySummary {
    pub fn compute(posts: &[CommunityPost], groups: &[CommunityGroup]) -> Self {
        Self {
            posts: posts.len(),
            groups: groups.len(),
            total_members: groups.iter().map(|g| g.members).sum(),
            total_likes: posts.iter().map(|p| p.likes).sum(),
        }
    }
}

/// Sort orders offered on the recommendations page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemSort {
    /// Most reviewed first
    #[default]
    Popular,
    Rating,
    PriceLow,
    PriceHigh,
    Discount,
}

/// Items in `category` (all when `None`), in the requested order
pub fn recommended<'a>(
    items: &'a [RecommendedItem],
    category: Option<ItemCategory>,
    sort: ItemSort,
) -> Vec<&'a RecommendedItem> {
    let mut selected: Vec<_> = items
        .iter()
        .filter(|i| category.map_or(true, |c| i.category == c))
        .collect();

    match sort {
        ItemSort::Popular => selected.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
        ItemSort::Rating => selected.sort_by(|a, b| {
            b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
        }),
        ItemSort::PriceLow => selected.sort_by_key(|i| i.price),
        ItemSort::PriceHigh => selected.sort_by(|a, b| b.price.cmp(&a.price)),
        ItemSort::Discount => selected.sort_by(|a, b| b.discount_percent().cmp(&a.discount_percent())),
    }
    selected
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemsSummary {
    pub items: usize,
    /// Mean discount across items, whole percent
    pub average_discount: u32,
    /// Mean rating out of 5, `None` when there are no items
    pub average_rating: Option<f64>,
    /// Name of the most reviewed item
    pub most_popular: Option<String>,
}

impl ItemsSummary {
    pub fn compute(items: &[RecommendedItem]) -> Self {
        let n = items.len();
        let average_discount = if n == 0 {
            0
        } else {
            items.iter().map(|i| i.discount_percent()).sum::<u32>() / n as u32
        };
        let average_rating = if n == 0 {
            None
        } else {
            Some(items.iter().map(|i| i.rating).sum::<f64>() / n as f64)
        };
        Self {
            items: n,
            average_discount,
            average_rating,
            most_popular: items.iter().max_by_key(|i| i.reviews).map(|i| i.name.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencySummary {
    pub contacts: usize,
    pub counseling_services: usize,
    pub stress_score: u8,
    pub stress_band: StressBand,
}

impl EmergencySummary {
    pub fn compute(
        contacts: &[EmergencyContact],
        services: &[CounselingService],
        stress_score: u8,
    ) -> Self {
        Self {
            contacts: contacts.len(),
            counseling_services: services.len(),
            stress_score,
            stress_band: StressBand::classify(stress_score),
        }
    }
}

/// Guides matching `query`, in listing order; all guides when `query` is blank
pub fn search_guides<'a>(guides: &'a [EmergencyGuide], query: Option<&str>) -> Vec<&'a EmergencyGuide> {
    guides
        .iter()
        .filter(|g| query.map_or(true, |q| g.matches(q)))
        .collect()
}

/// The guide with code `id`, ignoring case and surrounding whitespace
pub fn find_guide<'a>(guides: &'a [EmergencyGuide], id: &str) -> Option<&'a EmergencyGuide> {
    let id = id.trim();
    guides.iter().find(|g| g.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn item(name: &str, category: ItemCategory, price: i64, original: i64, rating: f64, reviews: u32) -> RecommendedItem {
        RecommendedItem::new(name, category, Money::from_won(price), Money::from_won(original))
            .with_reviews(rating, reviews, "")
    }

    fn items() -> Vec<RecommendedItem> {
        vec![
            item("밥솥", ItemCategory::Kitchen, 89_000, 120_000, 4.8, 1234),
            item("건조대", ItemCategory::Living, 35_000, 45_000, 4.6, 856),
            item("스탠드", ItemCategory::Electronics, 25_000, 35_000, 4.7, 642),
        ]
    }

    #[test]
    fn test_posts_filter() {
        let posts = vec![
            CommunityPost::new("곰팡이", "a", "청소", 2, ""),
            CommunityPost::new("볶음밥", "b", "요리", 4, ""),
        ];
        assert_eq!(posts_in(&posts, None).len(), 2);
        assert_eq!(posts_in(&posts, Some("요리"))[0].title, "볶음밥");
        assert!(posts_in(&posts, Some("절약")).is_empty());
    }

    #[test]
    fn test_recommended_sorting() {
        let items = items();
        let names = |v: Vec<&RecommendedItem>| v.iter().map(|i| i.name.clone()).collect::<Vec<_>>();

        assert_eq!(names(recommended(&items, None, ItemSort::Popular))[0], "밥솥");
        assert_eq!(names(recommended(&items, None, ItemSort::PriceLow))[0], "스탠드");
        assert_eq!(
            names(recommended(&items, None, ItemSort::PriceHigh)),
            vec!["밥솥", "건조대", "스탠드"]
        );
        assert_eq!(names(recommended(&items, None, ItemSort::Discount))[0], "스탠드");
        assert_eq!(
            names(recommended(&items, Some(ItemCategory::Living), ItemSort::Rating)),
            vec!["건조대"]
        );
    }

    #[test]
    fn test_items_summary() {
        let summary = ItemsSummary::compute(&items());
        assert_eq!(summary.items, 3);
        assert_eq!(summary.most_popular.as_deref(), Some("밥솥"));
        // (26 + 22 + 29) / 3
        assert_eq!(summary.average_discount, 25);

        let empty = ItemsSummary::compute(&[]);
        assert_eq!(empty.average_rating, None);
        assert_eq!(empty.average_discount, 0);
    }

    #[test]
    fn test_emergency_summary() {
        let contacts = vec![EmergencyContact::new("119", "119")];
        let summary = EmergencySummary::compute(&contacts, &[], 65);
        assert_eq!(summary.stress_band, StressBand::Caution);
        assert_eq!(summary.contacts, 1);
    }

    #[test]
    fn test_guide_search_and_lookup() {
        let guides = crate::fixtures::emergency_guides();

        assert_eq!(search_guides(&guides, None).len(), 4);
        assert_eq!(search_guides(&guides, Some("  ")).len(), 4);

        // "가스밸브" is a step of both the fire and the gas-leak guide
        let ids: Vec<_> = search_guides(&guides, Some("가스밸브"))
            .iter()
            .map(|g| g.id.as_str())
            .collect();
        assert_eq!(ids, vec!["fire", "gas"]);

        assert_eq!(search_guides(&guides, Some("정전"))[0].id, "electric");
        assert!(search_guides(&guides, Some("지진")).is_empty());

        assert_eq!(find_guide(&guides, " Water ").map(|g| g.title.as_str()), Some("수도 고장"));
        assert!(find_guide(&guides, "flood").is_none());
    }
}
