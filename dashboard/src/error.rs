//! Error types for the dashboard
//!
//! - `QueryError`: a failed GraphQL query; its `Display` is the message a panel shows
//! - `ParseError`: terminal input that is not a known command

use thiserror::Error;

/// Errors from executing a GraphQL query
///
/// Panels do not distinguish between these; they all render as
/// `Error : <message>`.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("Response not successful: Received status code {status}")]
    Http { status: u16, body: String },

    #[error("{}", .0.join("\n"))]
    GraphQl(Vec<String>),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Parse error for terminal commands
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}
