//! Outcome of one query execution

use crate::error::QueryError;

/// What a panel knows about its query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<T> {
    /// Not resolved yet
    Loading,
    /// Failed; holds the message to show
    Failed(String),
    Ready(T),
}

impl<T> QueryState<T> {
    /// The data, if the query succeeded
    pub fn ready(&self) -> Option<&T> {
        match self {
            QueryState::Ready(data) => Some(data),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Loading
    }
}

impl<T> From<Result<T, QueryError>> for QueryState<T> {
    fn from(result: Result<T, QueryError>) -> Self {
        match result {
            Ok(data) => QueryState::Ready(data),
            Err(e) => QueryState::Failed(e.to_string()),
        }
    }
}
