//! Test utilities
//!
//! Manual mock implementations, test fixtures, and a local GraphQL stub
//! server for exercising the real HTTP client.

pub mod graphql_stub;
pub mod mocks;

pub use fixtures::*;
pub use graphql_stub::*;
pub use mocks::*;
