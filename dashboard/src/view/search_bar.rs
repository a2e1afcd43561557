//! Search bar
//!
//! Stateless: shows the text it is given. Events reach the dashboard as
//! `SearchEvent`s parsed from terminal input.

/// Render the input box with its two buttons
pub fn render_search_bar(value: &str) -> String {
    format!("[ {} ] (Get) (Clear)\n", value)
}
