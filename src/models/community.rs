//! Community board models

use serde::{Deserialize, Serialize};

use super::ids::{GroupId, PostId};

/// Board categories offered as filters; "전체" is represented by `None`
pub const POST_CATEGORIES: &[&str] = &["요리", "청소", "절약", "공동구매", "기타"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPost {
    pub id: PostId,
    pub title: String,
    pub author: String,
    pub category: String,
    pub likes: u32,
    pub comments: u32,
    /// Age of the post in hours, rendered as "N시간 전"
    pub hours_ago: u32,
    pub content: String,
}

impl CommunityPost {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        hours_ago: u32,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: PostId::new(),
            title: title.into(),
            author: author.into(),
            category: category.into(),
            likes: 0,
            comments: 0,
            hours_ago,
            content: content.into(),
        }
    }

    pub fn with_engagement(mut self, likes: u32, comments: u32) -> Self {
        self.likes = likes;
        self.comments = comments;
        self
    }

    pub fn posted_label(&self) -> String {
        format!("{}시간 전", self.hours_ago)
    }
}

/// A neighbourhood or interest group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityGroup {
    pub id: GroupId,
    pub name: String,
    pub members: u32,
    pub category: String,
}

impl CommunityGroup {
    pub fn new(name: impl Into<String>, members: u32, category: impl Into<String>) -> Self {
        Self {
            id: GroupId::new(),
            name: name.into(),
            members,
            category: category.into(),
        }
    }
}
