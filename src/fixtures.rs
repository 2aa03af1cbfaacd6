//! Sample data each dashboard starts from
//!
//! Nothing is persisted: every run of the CLI begins with these lists.

use chrono::{NaiveDate, NaiveTime};

use crate::models::{
    CommunityGroup, CommunityPost, CounselingService, Difficulty, EmergencyContact, EmergencyGuide, Event,
    EventKind, Expense, ExpenseCategory, Facility, FoodCategory, InventoryItem, ItemCategory,
    Money, Priority, Recipe, RecommendedItem, ScheduleItem, ScheduleKind, ShoppingItem, TaskStatus,
};
use crate::services::Pantry;

/// Account the in-memory auth collaborator is seeded with
pub const DEMO_EMAIL: &str = "demo@homekeeper.kr";
pub const DEMO_PASSWORD: &str = "password123";
pub const DEMO_NAME: &str = "김자취";

/// Stress score shown on the emergency page until the user supplies one
pub const SAMPLE_STRESS_SCORE: u8 = 65;

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default()
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

pub fn expenses() -> Vec<Expense> {
    let won = Money::from_won;
    vec![
        Expense::new(won(500_000), ExpenseCategory::Rent, "월세", jan(1)),
        Expense::new(won(80_000), ExpenseCategory::Utilities, "전기세", jan(2)),
        Expense::new(won(25_000), ExpenseCategory::Food, "마트 장보기", jan(3)),
        Expense::new(won(15_000), ExpenseCategory::Transport, "지하철", jan(4)),
        Expense::new(won(45_000), ExpenseCategory::Communication, "휴대폰 요금", jan(5)),
    ]
}

pub fn inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new("계란", 4, "개", jan(10), FoodCategory::Dairy),
        InventoryItem::new("우유", 1, "팩", jan(8), FoodCategory::Dairy),
        InventoryItem::new("사과", 3, "개", jan(12), FoodCategory::Fruit),
        InventoryItem::new("닭가슴살", 500, "g", jan(9), FoodCategory::Meat),
    ]
}

pub fn recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("계란볶음밥", &["계란", "밥", "파"], 15, Difficulty::Easy, true),
        Recipe::new("사과 샐러드", &["사과", "양상추", "드레싱"], 10, Difficulty::Easy, true),
        Recipe::new(
            "닭가슴살 스테이크",
            &["닭가슴살", "올리브오일", "소금"],
            20,
            Difficulty::Medium,
            true,
        ),
        Recipe::new("파스타", &["파스타면", "토마토소스", "치즈"], 25, Difficulty::Medium, false),
    ]
}

pub fn shopping_list() -> Vec<ShoppingItem> {
    let mut cheese = ShoppingItem::new("치즈", 200, "g");
    cheese.toggle();
    vec![
        ShoppingItem::new("파스타면", 1, "봉"),
        ShoppingItem::new("토마토소스", 1, "병"),
        cheese,
        ShoppingItem::new("양상추", 1, "포기"),
    ]
}

pub fn pantry(warning_days: i64) -> Pantry {
    Pantry::new(inventory(), recipes(), shopping_list()).with_warning_days(warning_days)
}

pub fn schedule() -> Vec<ScheduleItem> {
    vec![
        ScheduleItem::new("전기 검침", ScheduleKind::Utilities, jan(15), TaskStatus::Pending),
        ScheduleItem::new("가스 안전점검", ScheduleKind::Safety, jan(20), TaskStatus::Pending),
        ScheduleItem::new(
            "정수기 필터 교체",
            ScheduleKind::Maintenance,
            jan(25),
            TaskStatus::Completed,
        ),
        ScheduleItem::new("분리수거", ScheduleKind::Cleaning, jan(8), TaskStatus::Overdue),
    ]
}

pub fn facilities() -> Vec<Facility> {
    vec![
        Facility::new("세탁소", "laundry", 50, "서울시 강남구 역삼동 123-45"),
        Facility::new("편의점", "convenience", 30, "서울시 강남구 역삼동 123-46"),
        Facility::new("마트", "mart", 200, "서울시 강남구 역삼동 123-47"),
        Facility::new("택배함", "delivery", 10, "서울시 강남구 역삼동 123-48"),
    ]
}

pub fn events() -> Vec<Event> {
    vec![
        Event::new("중간고사", EventKind::Study, jan(15), at(9, 0), Priority::High),
        Event::new("알바 (카페)", EventKind::Work, jan(8), at(14, 0), Priority::Medium),
        Event::new("전기세 납부", EventKind::Life, jan(10), at(18, 0), Priority::High),
        Event::new("친구 만나기", EventKind::Personal, jan(12), at(19, 0), Priority::Low),
        Event::new("과제 제출", EventKind::Study, jan(9), at(23, 59), Priority::High),
    ]
}

pub fn posts() -> Vec<CommunityPost> {
    vec![
        CommunityPost::new(
            "자취방 곰팡이 제거 꿀팁 공유합니다!",
            "자취고수",
            "청소",
            2,
            "베이킹소다와 식초를 이용한 천연 곰팡이 제거법...",
        )
        .with_engagement(24, 8),
        CommunityPost::new(
            "혼자 먹기 좋은 간단 요리 레시피",
            "요리초보",
            "요리",
            4,
            "계란볶음밥 맛있게 만드는 법을 알려드릴게요...",
        )
        .with_engagement(18, 12),
        CommunityPost::new(
            "강남역 근처 공동구매 하실 분?",
            "절약왕",
            "공동구매",
            6,
            "생필품 대량 구매로 배송비 절약해요!",
        )
        .with_engagement(15, 6),
    ]
}

pub fn groups() -> Vec<CommunityGroup> {
    vec![
        CommunityGroup::new("강남구 자취생 모임", 156, "지역"),
        CommunityGroup::new("요리 초보 탈출", 89, "요리"),
        CommunityGroup::new("절약 생활 꿀팁", 234, "절약"),
        CommunityGroup::new("청소 마스터", 67, "청소"),
    ]
}

pub fn emergency_contacts() -> Vec<EmergencyContact> {
    vec![
        EmergencyContact::new("종합상황실 (화재/구급/구조)", "119"),
        EmergencyContact::new("경찰서 (신고)", "112"),
        EmergencyContact::new("가스안전공사", "1544-4500"),
        EmergencyContact::new("수도사업소", "120"),
        EmergencyContact::new("전력공사", "123"),
        EmergencyContact::new("자살예방상담전화", "1393"),
    ]
}

pub fn counseling_services() -> Vec<CounselingService> {
    let service = |name: &str, phone: &str, address: &str, kind: &str| CounselingService {
        name: name.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        kind: kind.to_string(),
    };
    vec![
        service("청년 마음건강센터", "02-1234-5678", "서울시 강남구", "상담소"),
        service("서울시 정신건강센터", "02-2345-6789", "서울시 중구", "센터"),
        service("대학생 상담센터", "02-3456-7890", "서울시 서초구", "상담소"),
    ]
}

/// Guides listed on the emergency manual page
pub fn emergency_guides() -> Vec<EmergencyGuide> {
    vec![
        EmergencyGuide::new(
            "fire",
            "화재 발생",
            "화재 발생 시 대처 방법",
            &[
                "119에 즉시 신고",
                "가스밸브 차단",
                "젖은 수건으로 코와 입 막기",
                "낮은 자세로 대피",
                "엘리베이터 사용 금지",
            ],
        ),
        EmergencyGuide::new(
            "gas",
            "가스 누출",
            "가스 냄새가 날 때 대처법",
            &[
                "전기 스위치 절대 건드리지 말기",
                "창문 열어 환기",
                "가스밸브 잠그기",
                "가스회사에 신고",
                "건물 밖으로 대피",
            ],
        ),
        EmergencyGuide::new(
            "water",
            "수도 고장",
            "물이 안 나오거나 누수 시",
            &[
                "수도꼭지 확인",
                "다른 집도 같은 상황인지 확인",
                "수도 계량기 확인",
                "관리사무소에 연락",
                "응급 수리업체 연락",
            ],
        ),
        EmergencyGuide::new(
            "electric",
            "전기 고장",
            "정전이나 전기 문제 발생 시",
            &[
                "차단기 확인",
                "다른 집 상황 확인",
                "전력회사에 신고",
                "전기기기 플러그 뽑기",
                "전문업체 연락",
            ],
        ),
    ]
}

pub fn recommended_items() -> Vec<RecommendedItem> {
    let won = Money::from_won;
    vec![
        RecommendedItem::new("미니 전기밥솥", ItemCategory::Kitchen, won(89_000), won(120_000))
            .with_reviews(4.8, 1234, "10명이 이 제품은 전기세 아낀다고 함")
            .with_features(&["1-2인용", "전기세 절약", "간편 조리"]),
        RecommendedItem::new("접이식 건조대", ItemCategory::Living, won(35_000), won(45_000))
            .with_reviews(4.6, 856, "원룸에서 사용하기 최적이라는 후기 다수")
            .with_features(&["공간 절약", "튼튼함", "이동 편리"]),
        RecommendedItem::new("LED 스탠드", ItemCategory::Electronics, won(25_000), won(35_000))
            .with_reviews(4.7, 642, "야간 학습용으로 인기가 높음")
            .with_features(&["눈 보호", "밝기 조절", "USB 충전"]),
        RecommendedItem::new("원룸 수납함 세트", ItemCategory::Living, won(45_000), won(60_000))
            .with_reviews(4.5, 423, "좁은 공간 활용도가 뛰어나다는 평가")
            .with_features(&["다용도", "조립 간편", "내구성"]),
    ]
}
