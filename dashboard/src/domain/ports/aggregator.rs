//! Aggregator API port
//!
//! One method per read query the dashboard issues. There are no mutations.

use async_trait::async_trait;

use crate::domain::entities::{Feed, FeedFollow, Post, User, UserId};
use crate::error::QueryError;

/// Read-only access to the RSS aggregator
#[async_trait]
pub trait AggregatorApi: Send + Sync {
    /// All registered users
    async fn users(&self) -> Result<Vec<User>, QueryError>;

    /// All feeds being aggregated
    async fn feeds(&self) -> Result<Vec<Feed>, QueryError>;

    /// Feed follows of one user
    async fn feed_follows(&self, user_id: &UserId) -> Result<Vec<FeedFollow>, QueryError>;

    /// All aggregated posts
    async fn posts(&self) -> Result<Vec<Post>, QueryError>;
}
