//! View layer
//!
//! Renders the dashboard to markdown-flavoured text for the terminal.

pub mod page;
pub mod panels;
pub mod query_result;
pub mod search_bar;

pub use page::render_page;
