//! Generic query-result renderer
//!
//! Every panel is the same three-way switch over its query state; only the
//! row renderer differs.

use std::collections::HashSet;
use std::fmt;

use crate::app::QueryState;
use crate::domain::entities::Keyed;

pub const LOADING: &str = "Loading...";

/// One rendered list item, keyed by the item's id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: String,
    pub lines: Vec<String>,
}

/// What a panel shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    Loading,
    Error(String),
    Rows(Vec<Row>),
}

impl PanelView {
    #[cfg(test)]
    pub fn rows(&self) -> &[Row] {
        match self {
            PanelView::Rows(rows) => rows,
            _ => &[],
        }
    }
}

impl fmt::Display for PanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelView::Loading => writeln!(f, "{}", LOADING),
            PanelView::Error(message) => writeln!(f, "Error : {}", message),
            PanelView::Rows(rows) => {
                for row in rows {
                    let mut lines = row.lines.iter();
                    if let Some(first) = lines.next() {
                        writeln!(f, "- {}", first)?;
                    }
                    for line in lines {
                        writeln!(f, "  {}", line)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Render a list query with `render_row` producing the lines of each item
pub fn render_query<T, F>(state: &QueryState<Vec<T>>, render_row: F) -> PanelView
where
    T: Keyed,
    F: Fn(&T) -> Vec<String>,
{
    match state {
        QueryState::Loading => PanelView::Loading,
        QueryState::Failed(message) => PanelView::Error(message.clone()),
        QueryState::Ready(items) => {
            let mut seen = HashSet::new();
            let rows = items
                .iter()
                .map(|item| {
                    if !seen.insert(item.key()) {
                        tracing::warn!(key = item.key(), "Duplicate row key in query result");
                    }
                    Row {
                        key: item.key().to_string(),
                        lines: render_row(item),
                    }
                })
                .collect();
            PanelView::Rows(rows)
        }
    }
}
