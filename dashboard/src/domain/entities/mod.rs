//! Domain entities
//!
//! Everything here is deserialized straight from GraphQL responses and never
//! mutated locally.

pub mod feed;
pub mod post;
pub mod user;

pub use feed::{Feed, FeedFollow};
pub use post::Post;
pub use user::{User, UserId};

#[cfg(test)]
pub use feed::{FeedFollowId, FeedId};
#[cfg(test)]
pub use post::PostId;

/// An item with a stable key for list rendering.
///
/// Keys are expected to be unique within one response but nothing enforces it.
pub trait Keyed {
    fn key(&self) -> &str;
}
