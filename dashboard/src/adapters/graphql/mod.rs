//! GraphQL adapter
//!
//! Query documents and the HTTP client that executes them.

pub mod client;
pub mod queries;

pub use client::GraphQlClient;
