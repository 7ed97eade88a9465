//! View resolution.
//!
//! Maps the authentication state and the current path to the top-level view.
//! Unauthenticated visitors only ever see the login view (exactly on
//! [`LOGIN_PATH`]) or the public landing view; authenticated users get the
//! page registered for the path, or the terminal not-found view.

use super::nav::Visibility;
use super::persona::Citizenship;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Root token; the dashboard when authenticated.
pub const ROOT_PATH: &str = "/";

/// Token of the sign-in view.
pub const LOGIN_PATH: &str = "/login";

/// Authenticated pages reachable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Dashboard,
    Profile,
    Documents,
    Calendar,
    Progress,
    Map,
    Timetable,
    Inbox,
    Tasks,
    Help,
    Admin,
    Housing,
    Life,
    It,
    Visa,
}

impl Page {
    /// Path token registered for the page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => ROOT_PATH,
            Self::Profile => "/profile",
            Self::Documents => "/documents",
            Self::Calendar => "/calendar",
            Self::Progress => "/progress",
            Self::Map => "/map",
            Self::Timetable => "/timetable",
            Self::Inbox => "/inbox",
            Self::Tasks => "/tasks",
            Self::Help => "/help",
            Self::Admin => "/admin",
            Self::Housing => "/housing",
            Self::Life => "/life",
            Self::It => "/it",
            Self::Visa => "/visa",
        }
    }

    /// Exact lookup in the static path table.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::iter().find(|page| page.path() == path)
    }

    /// Page heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Profile => "Profile & Settings",
            Self::Documents => "My Documents",
            Self::Calendar => "My Calendar",
            Self::Progress => "Course Progress & Results",
            Self::Map => "Campus Map",
            Self::Timetable => "My Timetable",
            Self::Inbox => "Inbox & Notices",
            Self::Tasks => "My Tasks & Enquiries",
            Self::Help => "How can we help?",
            Self::Admin => "Student Admin & Finance",
            Self::Housing => "Accommodation & Wellbeing",
            Self::Life => "Student Life",
            Self::It => "IT Services",
            Self::Visa => "Student Visa Compliance",
        }
    }

    /// Persona precondition the page enforces on itself. A page whose guard
    /// rejects the active persona sends the user back to [`ROOT_PATH`].
    #[must_use]
    pub fn guard(self) -> Option<Visibility> {
        match self {
            Self::Visa => Some(Visibility::RequiresCitizenship(Citizenship::International)),
            _ => None,
        }
    }
}

/// Top-level view selected by [`resolve_view`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "view", content = "page")]
pub enum View {
    /// Public landing page; the default for every unauthenticated path.
    #[default]
    Landing,
    /// Sign-in page.
    Login,
    /// An authenticated page.
    Page(Page),
    /// Unknown authenticated path. Leaving it requires explicit navigation.
    NotFound,
}

impl View {
    #[must_use]
    pub const fn page(self) -> Option<Page> {
        match self {
            Self::Page(page) => Some(page),
            _ => None,
        }
    }
}

/// Selects the view for the given authentication state and path.
#[must_use]
pub fn resolve_view(authenticated: bool, path: &str) -> View {
    if !authenticated {
        return if path == LOGIN_PATH {
            View::Login
        } else {
            View::Landing
        };
    }
    Page::from_path(path).map_or(View::NotFound, View::Page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::persona::Persona;
    use test_case::test_case;

    #[test_case(false, "/", View::Landing ; "anonymous root")]
    #[test_case(false, "/login", View::Login ; "anonymous login")]
    #[test_case(false, "/admin", View::Landing ; "anonymous deep link")]
    #[test_case(false, "/zzz", View::Landing ; "anonymous unknown")]
    #[test_case(false, "/login/", View::Landing ; "anonymous login with slash")]
    #[test_case(true, "/", View::Page(Page::Dashboard) ; "dashboard")]
    #[test_case(true, "/admin", View::Page(Page::Admin) ; "admin")]
    #[test_case(true, "/visa", View::Page(Page::Visa) ; "visa")]
    #[test_case(true, "/zzz", View::NotFound ; "unknown")]
    #[test_case(true, "/login", View::NotFound ; "login while authenticated")]
    #[test_case(true, "/topic/library", View::NotFound ; "topic link")]
    #[test_case(true, "", View::NotFound ; "empty path")]
    fn test_resolve_view(authenticated: bool, path: &str, expected: View) {
        assert_eq!(resolve_view(authenticated, path), expected);
    }

    #[test]
    fn test_every_page_round_trips_through_its_path() {
        for page in Page::iter() {
            assert_eq!(Page::from_path(page.path()), Some(page));
            assert_eq!(resolve_view(true, page.path()), View::Page(page));
        }
    }

    #[test]
    fn test_only_visa_is_guarded() {
        let guarded: Vec<_> = Page::iter().filter(|page| page.guard().is_some()).collect();
        assert_eq!(guarded, vec![Page::Visa]);
    }

    #[test]
    fn test_visa_guard_checks_citizenship() {
        let guard = Page::Visa.guard().unwrap();
        let domestic = Persona::default();
        let international = Persona {
            citizenship: Citizenship::International,
            ..Persona::default()
        };
        assert!(!guard.allows(&domestic));
        assert!(guard.allows(&international));
    }

    #[test]
    fn test_view_serde_shape() {
        let json = serde_json::to_string(&View::Page(Page::Inbox)).unwrap();
        assert_eq!(json, r#"{"view":"page","page":"inbox"}"#);
        let back: View = serde_json::from_str(&json).unwrap();
        assert_eq!(back, View::Page(Page::Inbox));
    }
}
