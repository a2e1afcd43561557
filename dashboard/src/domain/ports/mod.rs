//! Domain ports (traits)
//!
//! The dashboard reads everything through `AggregatorApi`.
//! The GraphQL adapter provides the real implementation.

pub mod aggregator;

pub use aggregator::AggregatorApi;
