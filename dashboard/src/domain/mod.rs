//! Domain layer
//!
//! Read-only projections of the aggregator's data and the port the
//! dashboard fetches them through.
//! - `entities`: Users, feeds, feed follows and posts as the API returns them
//! - `ports`: Trait definition for the aggregator API

pub mod entities;
pub mod ports;
