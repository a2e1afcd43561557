//! Application layer
//!
//! The dashboard coordinator and the local UI state it owns.

pub mod command;
pub mod dashboard;
pub mod query_state;
pub mod search;

pub use command::{help_text, parse_command, Command};
pub use dashboard::Dashboard;
pub use query_state::QueryState;
#[cfg(test)]
pub use search::SearchEvent;
