//! Route Resolution
//!
//! Pure mapping from the location fragment to a known view.

use std::cell::Cell;
use std::rc::Rc;

/// Routable views
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    Board,
}

impl View {
    pub const ALL: [View; 2] = [View::Home, View::Board];

    pub fn name(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Board => "board",
        }
    }

    pub fn from_name(name: &str) -> Option<View> {
        Self::ALL.into_iter().find(|view| view.name() == name)
    }

    /// Location fragment that selects this view
    pub fn hash(self) -> String {
        format!("#/{}", self.name())
    }

    /// Static markup resource for this view
    pub fn fragment_path(self, views_base: &str) -> String {
        format!("{}/{}.html", views_base.trim_end_matches('/'), self.name())
    }
}

/// Strip `#/` and resolve; empty or unknown fragments land on `Home`.
///
/// Only the exact `#/<name>` form selects a view, so `#board` or
/// `/board` fall back to `Home` too.
pub fn resolve_view(hash: &str) -> View {
    hash.strip_prefix("#/")
        .and_then(View::from_name)
        .unwrap_or(View::Home)
}

/// Ticket handed out per navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationTicket(u64);

/// Generation counter so a slow fragment fetch cannot overwrite a newer view
#[derive(Clone, Debug, Default)]
pub struct NavigationGuard {
    generation: Rc<Cell<u64>>,
}

impl NavigationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a navigation, invalidating every earlier ticket
    pub fn begin(&self) -> NavigationTicket {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        NavigationTicket(next)
    }

    pub fn is_current(&self, ticket: NavigationTicket) -> bool {
        self.generation.get() == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_views() {
        assert_eq!(resolve_view("#/home"), View::Home);
        assert_eq!(resolve_view("#/board"), View::Board);
    }

    #[test]
    fn test_resolve_empty_fragment_is_home() {
        assert_eq!(resolve_view(""), View::Home);
        assert_eq!(resolve_view("#"), View::Home);
        assert_eq!(resolve_view("#/"), View::Home);
    }

    #[test]
    fn test_resolve_unknown_fragment_is_home() {
        for hash in ["#/settings", "#/Board", "#/board/1", "#board", "#home", "/board", "board", "#board-x", "garbage"] {
            assert_eq!(resolve_view(hash), View::Home, "hash {hash}");
        }
    }

    #[test]
    fn test_view_hash_round_trips() {
        for view in View::ALL {
            assert_eq!(resolve_view(&view.hash()), view);
        }
    }

    #[test]
    fn test_fragment_path() {
        assert_eq!(View::Home.fragment_path("views"), "views/home.html");
        assert_eq!(View::Board.fragment_path("views/"), "views/board.html");
    }

    #[test]
    fn test_later_navigation_invalidates_earlier_ticket() {
        let guard = NavigationGuard::new();
        let first = guard.begin();
        assert!(guard.is_current(first));

        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_guard_clones_share_generation() {
        let guard = NavigationGuard::new();
        let ticket = guard.begin();
        guard.clone().begin();
        assert!(!guard.is_current(ticket));
    }
}
