//! Feed-follow search state
//!
//! The search box resolves a typed user name to an id against the user list
//! the dashboard already fetched. Resolution never touches the network.

use crate::domain::entities::user::find_by_name;
use crate::domain::entities::{User, UserId};

/// Events the search bar emits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The text in the box changed
    Changed(String),
    /// "Get" was pressed
    Submit,
    /// "Clear" was pressed
    Clear,
}

/// Local UI state behind the search box
///
/// All four fields reset together on clear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub search_text: String,
    pub user_id: Option<UserId>,
    pub show_results: bool,
    pub show_empty_result: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store new text; any edit hides previous results
    pub fn change_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.show_results = false;
        self.show_empty_result = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Resolve the current text against `users`.
    ///
    /// Returns the id to fetch feed follows for on a match. `None` for `users`
    /// means the list is not available (still loading or failed), which
    /// resolves like a miss.
    pub fn resolve_user_by_name(&mut self, users: Option<&[User]>) -> Option<UserId> {
        match users.and_then(|users| find_by_name(users, &self.search_text)) {
            Some(user) => {
                self.user_id = Some(user.id.clone());
                self.show_results = true;
                self.user_id.clone()
            }
            None => {
                tracing::debug!(name = %self.search_text, "No user matches search");
                self.show_empty_result = true;
                None
            }
        }
    }

    /// The resolved user had no feed follows
    pub fn mark_empty_result(&mut self) {
        self.show_empty_result = true;
    }

    /// The resolved user's follows came back with rows, or failed
    pub fn clear_empty_result(&mut self) {
        self.show_empty_result = false;
    }

    /// Whether the feed-follows panel is mounted, and for whom
    pub fn mounted_user(&self) -> Option<&UserId> {
        if self.show_results {
            self.user_id.as_ref()
        } else {
            None
        }
    }
}
