//! Route table and menu views

use serde::Serialize;
use tabled::Tabled;

use crate::navigation::{MenuEntry, Route, RouteDecision};

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RouteRow {
    #[tabled(rename = "경로")]
    pub path: String,
    #[tabled(rename = "페이지")]
    pub page: String,
    #[tabled(rename = "로그인 필요")]
    pub protected: String,
}

impl From<&Route> for RouteRow {
    fn from(route: &Route) -> Self {
        Self {
            path: route.path.to_string(),
            page: route.page.to_string(),
            protected: if route.protected { "예" } else { "" }.to_string(),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MenuRow {
    #[tabled(rename = "현재")]
    pub active: String,
    #[tabled(rename = "메뉴")]
    pub label: String,
    #[tabled(rename = "경로")]
    pub path: String,
}

impl MenuRow {
    pub fn new(entry: &MenuEntry, current_path: &str) -> Self {
        Self {
            active: if entry.is_active(current_path) { "▶" } else { "" }.to_string(),
            label: entry.label.to_string(),
            path: entry.path.to_string(),
        }
    }
}

pub fn format_decision(path: &str, decision: &RouteDecision) -> String {
    match decision {
        RouteDecision::Render { page } => format!("{} -> {}", path, page),
        RouteDecision::Redirect { to, from } => {
            format!("{} -> redirect {} (from={})", path, to, from)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{resolve, MENU};

    #[test]
    fn test_redirect_text() {
        let decision = resolve("/profile", false).unwrap();
        assert_eq!(
            format_decision("/profile", &decision),
            "/profile -> redirect /login (from=/profile)"
        );
    }

    #[test]
    fn test_menu_row_marks_active() {
        assert_eq!(MenuRow::new(&MENU[0], "/").active, "▶");
        assert_eq!(MenuRow::new(&MENU[1], "/").active, "");
    }
}
