//! Core data models for Homekeeper
//!
//! Plain in-memory records for each dashboard: expenses, fridge inventory,
//! recipes, shopping list, schedule, calendar events, community posts,
//! emergency contacts, recommended items and the user profile.

pub mod community;
pub mod emergency;
pub mod event;
pub mod expense;
pub mod ids;
pub mod inventory;
pub mod item;
pub mod money;
pub mod recipe;
pub mod schedule;
pub mod shopping;
pub mod user;

pub use community::{CommunityGroup, CommunityPost, POST_CATEGORIES};
pub use emergency::{CounselingService, EmergencyContact, EmergencyGuide, StressBand};
pub use event::{Event, EventKind, Priority};
pub use expense::{Expense, ExpenseCategory, ExpenseDraft, MAX_EXPENSE};
pub use ids::{
    ContactId, EventId, ExpenseId, FacilityId, GroupId, InventoryItemId, PostId, RecipeId,
    RecommendedItemId, ScheduleItemId, ShoppingItemId,
};
pub use inventory::{FoodCategory, InventoryDraft, InventoryItem};
pub use item::{ItemCategory, RecommendedItem};
pub use money::Money;
pub use recipe::{Difficulty, Recipe};
pub use schedule::{Facility, ScheduleItem, ScheduleKind, TaskStatus};
pub use shopping::ShoppingItem;
pub use user::{AuthProviderKind, ProfileUpdate, UserProfile};
