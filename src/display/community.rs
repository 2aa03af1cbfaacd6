//! Community, recommended items and emergency page views

use serde::Serialize;
use tabled::Tabled;

use super::report::{format_header, labeled, truncate};
use crate::models::{
    CommunityGroup, CommunityPost, CounselingService, EmergencyContact, EmergencyGuide,
    RecommendedItem,
};
use crate::services::{CommunitySummary, EmergencySummary, ItemsSummary};

const LABEL_WIDTH: usize = 14;
const TITLE_CHARS: usize = 24;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PostRow {
    #[tabled(rename = "분류")]
    pub category: String,
    #[tabled(rename = "제목")]
    pub title: String,
    #[tabled(rename = "작성자")]
    pub author: String,
    #[tabled(rename = "좋아요")]
    pub likes: u32,
    #[tabled(rename = "댓글")]
    pub comments: u32,
    #[tabled(rename = "작성")]
    pub posted: String,
}

impl From<&CommunityPost> for PostRow {
    fn from(post: &CommunityPost) -> Self {
        Self {
            category: post.category.clone(),
            title: truncate(&post.title, TITLE_CHARS),
            author: post.author.clone(),
            likes: post.likes,
            comments: post.comments,
            posted: post.posted_label(),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct GroupRow {
    #[tabled(rename = "모임")]
    pub name: String,
    #[tabled(rename = "분류")]
    pub category: String,
    #[tabled(rename = "멤버")]
    pub members: u32,
}

impl From<&CommunityGroup> for GroupRow {
    fn from(group: &CommunityGroup) -> Self {
        Self {
            name: group.name.clone(),
            category: group.category.clone(),
            members: group.members,
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ItemRow {
    #[tabled(rename = "상품")]
    pub name: String,
    #[tabled(rename = "분류")]
    pub category: String,
    #[tabled(rename = "가격")]
    pub price: String,
    #[tabled(rename = "할인")]
    pub discount: String,
    #[tabled(rename = "평점")]
    pub rating: String,
    #[tabled(rename = "리뷰")]
    pub reviews: u32,
    #[tabled(rename = "리뷰 요약")]
    pub review_summary: String,
}

impl From<&RecommendedItem> for ItemRow {
    fn from(item: &RecommendedItem) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.to_string(),
            price: item.price.format_suffix(),
            discount: format!("{}%", item.discount_percent()),
            rating: format!("{:.1}", item.rating),
            reviews: item.reviews,
            review_summary: item.review_summary.clone(),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ContactRow {
    #[tabled(rename = "기관")]
    pub name: String,
    #[tabled(rename = "번호")]
    pub number: String,
}

impl From<&EmergencyContact> for ContactRow {
    fn from(contact: &EmergencyContact) -> Self {
        Self {
            name: contact.name.clone(),
            number: contact.number.clone(),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CounselingRow {
    #[tabled(rename = "상담기관")]
    pub name: String,
    #[tabled(rename = "유형")]
    pub kind: String,
    #[tabled(rename = "전화")]
    pub phone: String,
    #[tabled(rename = "주소")]
    pub address: String,
}

impl From<&CounselingService> for CounselingRow {
    fn from(service: &CounselingService) -> Self {
        Self {
            name: service.name.clone(),
            kind: service.kind.clone(),
            phone: service.phone.clone(),
            address: service.address.clone(),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct GuideRow {
    #[tabled(rename = "코드")]
    pub id: String,
    #[tabled(rename = "상황")]
    pub title: String,
    #[tabled(rename = "설명")]
    pub description: String,
    #[tabled(rename = "단계")]
    pub steps: usize,
}

impl From<&EmergencyGuide> for GuideRow {
    fn from(guide: &EmergencyGuide) -> Self {
        Self {
            id: guide.id.clone(),
            title: guide.title.clone(),
            description: guide.description.clone(),
            steps: guide.steps.len(),
        }
    }
}

/// A selected guide with its numbered steps
pub fn format_guide(guide: &EmergencyGuide) -> String {
    let mut lines = vec![format_header(&format!("{} 대처법", guide.title))];
    lines.extend(
        guide
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step)),
    );
    lines.join("\n")
}

pub fn format_community_overview(summary: &CommunitySummary) -> String {
    [
        format_header("커뮤니티"),
        labeled("게시글", summary.posts, LABEL_WIDTH),
        labeled("모임", summary.groups, LABEL_WIDTH),
        labeled("모임 멤버", summary.total_members, LABEL_WIDTH),
        labeled("받은 좋아요", summary.total_likes, LABEL_WIDTH),
    ]
    .join("\n")
}

pub fn format_items_overview(summary: &ItemsSummary) -> String {
    let rating = summary
        .average_rating
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| "-".to_string());
    [
        format_header("아이템 추천"),
        labeled("추천 상품", summary.items, LABEL_WIDTH),
        labeled("평균 할인율", format!("{}%", summary.average_discount), LABEL_WIDTH),
        labeled("평균 평점", rating, LABEL_WIDTH),
        labeled(
            "인기 상품",
            summary.most_popular.as_deref().unwrap_or("-"),
            LABEL_WIDTH,
        ),
    ]
    .join("\n")
}

pub fn format_emergency_overview(summary: &EmergencySummary) -> String {
    [
        format_header("비상연락"),
        labeled("긴급 연락처", summary.contacts, LABEL_WIDTH),
        labeled("상담 기관", summary.counseling_services, LABEL_WIDTH),
        labeled(
            "스트레스 지수",
            format!("{}% ({})", summary.stress_score, summary.stress_band),
            LABEL_WIDTH,
        ),
    ]
    .join("\n")
}
