//! Navigation shell: route table, protected-route redirect, and side menu

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{HomekeeperError, HomekeeperResult};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Budget,
    Shopping,
    Schedule,
    Community,
    Emergency,
    Items,
    Calendar,
    Manual,
    Login,
    Register,
    Profile,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Home => "home",
            Self::Budget => "budget",
            Self::Shopping => "shopping",
            Self::Schedule => "schedule",
            Self::Community => "community",
            Self::Emergency => "emergency",
            Self::Items => "items",
            Self::Calendar => "calendar",
            Self::Manual => "manual",
            Self::Login => "login",
            Self::Register => "register",
            Self::Profile => "profile",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
    /// Requires a signed-in user
    pub protected: bool,
}

const fn route(path: &'static str, page: Page) -> Route {
    Route {
        path,
        page,
        protected: false,
    }
}

pub static ROUTES: &[Route] = &[
    route("/", Page::Home),
    route("/budget", Page::Budget),
    route("/shopping", Page::Shopping),
    route("/schedule", Page::Schedule),
    route("/community", Page::Community),
    route("/emergency", Page::Emergency),
    route("/items", Page::Items),
    route("/calendar", Page::Calendar),
    route("/manual", Page::Manual),
    route("/login", Page::Login),
    route("/register", Page::Register),
    Route {
        path: "/profile",
        page: Page::Profile,
        protected: true,
    },
];

/// What the shell does with a requested path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RouteDecision {
    Render { page: Page },
    /// Send the user to `to`; `from` is where login should return afterwards
    Redirect { to: String, from: String },
}

pub fn find(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}

/// Resolve `path` for a user who is or is not signed in
pub fn resolve(path: &str, signed_in: bool) -> HomekeeperResult<RouteDecision> {
    let route = find(path).ok_or_else(|| HomekeeperError::route_not_found(path))?;

    if route.protected && !signed_in {
        debug!(path, "redirecting unauthenticated visit to login");
        return Ok(RouteDecision::Redirect {
            to: LOGIN_PATH.to_string(),
            from: route.path.to_string(),
        });
    }

    Ok(RouteDecision::Render { page: route.page })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub path: &'static str,
    pub label: &'static str,
}

/// Side and mobile menu, in display order
pub static MENU: &[MenuEntry] = &[
    MenuEntry { path: "/", label: "홈" },
    MenuEntry { path: "/budget", label: "가계부" },
    MenuEntry { path: "/shopping", label: "장보기" },
    MenuEntry { path: "/schedule", label: "집관리" },
    MenuEntry { path: "/calendar", label: "일정관리" },
    MenuEntry { path: "/community", label: "커뮤니티" },
    MenuEntry { path: "/items", label: "아이템추천" },
    MenuEntry { path: "/emergency", label: "비상연락" },
    MenuEntry { path: "/manual", label: "긴급대처" },
    MenuEntry { path: "/login", label: "로그인" },
];

impl MenuEntry {
    /// Exact path match; `/budget/x` does not activate `/budget`
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

pub fn active_entry(current_path: &str) -> Option<&'static MenuEntry> {
    MENU.iter().find(|entry| entry.is_active(current_path))
}

/// Mobile menu open/closed state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Follow an entry; the mobile menu closes after a pick
    pub fn select(&mut self, entry: &MenuEntry) -> &'static str {
        self.open = false;
        find(entry.path).map(|route| route.path).unwrap_or(HOME_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_path_resolves_to_one_page() {
        assert_eq!(ROUTES.len(), 12);
        for route in ROUTES {
            assert_eq!(
                resolve(route.path, true).unwrap(),
                RouteDecision::Render { page: route.page }
            );
        }
    }

    #[test]
    fn test_profile_requires_sign_in() {
        assert_eq!(
            resolve("/profile", false).unwrap(),
            RouteDecision::Redirect {
                to: "/login".into(),
                from: "/profile".into(),
            }
        );
        assert_eq!(
            resolve("/budget", false).unwrap(),
            RouteDecision::Render { page: Page::Budget }
        );
    }

    #[test]
    fn test_unknown_path() {
        let err = resolve("/nowhere", true).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_menu_entries_are_routes() {
        for entry in MENU {
            assert!(find(entry.path).is_some(), "{} has no route", entry.path);
        }
        assert_eq!(active_entry("/calendar").map(|e| e.label), Some("일정관리"));
        assert!(active_entry("/profile").is_none());
        assert!(!MENU[1].is_active("/budget/2024"));
    }

    #[test]
    fn test_menu_toggle_and_select() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.select(&MENU[2]), "/shopping");
        assert!(!menu.is_open());
    }
}
