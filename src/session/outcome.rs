use serde::Serialize;

use crate::browser::{HistoryEntry, NavigationError, SearchHit};
use crate::users::DirectoryError;

/// Navigator operation that produced a `NavigationFailed` outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    Back,
    Forward,
    Current,
    History,
    Search,
    Clear,
}

/// Directory operation that produced a `DirectoryFailed` outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAction {
    SignUp,
    LogIn,
    ViewHistory,
}

/// Result of one session command, independent of how it is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Outcome<'a> {
    SignedUp {
        username: &'a str,
    },
    LoggedIn {
        username: &'a str,
        admin: bool,
    },
    LoggedOut {
        username: &'a str,
        admin: bool,
    },
    Visited {
        url: &'a str,
    },
    WentBack {
        url: &'a str,
    },
    WentForward {
        url: &'a str,
    },
    Current {
        url: &'a str,
    },
    History {
        owner: &'a str,
        entries: Vec<HistoryEntry<'a>>,
    },
    Found {
        keyword: &'a str,
        hits: Vec<SearchHit<'a>>,
    },
    Cleared {
        released: usize,
    },
    Users {
        names: Vec<&'a str>,
    },
    NavigationFailed {
        action: NavAction,
        #[serde(flatten)]
        error: NavigationError,
    },
    DirectoryFailed {
        action: UserAction,
        #[serde(flatten)]
        error: DirectoryError,
    },
    InvalidChoice {
        input: &'a str,
    },
    Goodbye,
}

impl<'a> Outcome<'a> {
    /// Whether the command did what was asked.
    pub fn is_success(&self) -> bool {
        !matches!(
            self,
            Outcome::NavigationFailed { .. }
                | Outcome::DirectoryFailed { .. }
                | Outcome::InvalidChoice { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::Boundary;

    #[test]
    fn test_json_shape() {
        let outcome = Outcome::NavigationFailed {
            action: NavAction::Back,
            error: NavigationError::AtBoundary {
                edge: Boundary::Start,
            },
        };

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "event": "navigation_failed",
                "action": "back",
                "error": "at_boundary",
                "edge": "start",
            })
        );
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_history_serializes_entries() {
        let outcome = Outcome::History {
            owner: "alice",
            entries: vec![HistoryEntry {
                position: 1,
                url: "a.com",
                is_current: true,
            }],
        };

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["event"], "history");
        assert_eq!(value["entries"][0]["url"], "a.com");
        assert_eq!(value["entries"][0]["is_current"], true);
        assert!(outcome.is_success());
    }
}
