//! Mock implementations of port traits
//!
//! An in-memory aggregator that can be configured per query and records
//! every call so tests can verify what was fetched and in which order.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Feed, FeedFollow, Post, User, UserId};
use crate::domain::ports::AggregatorApi;
use crate::error::QueryError;

/// A query the mock has served
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Users,
    Feeds,
    FeedFollows(UserId),
    Posts,
}

/// In-memory aggregator
///
/// Each query answers with its configured list, or with a GraphQL error when
/// one was set through the `failing_*` builders.
#[derive(Default)]
pub struct InMemoryAggregator {
    users: Vec<User>,
    feeds: Vec<Feed>,
    posts: Vec<Post>,
    follows: RwLock<HashMap<UserId, Vec<FeedFollow>>>,
    failures: HashMap<&'static str, String>,
    calls: Arc<RwLock<Vec<Call>>>,
}

impl InMemoryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    pub fn with_feed(mut self, feed: Feed) -> Self {
        self.feeds.push(feed);
        self
    }

    pub fn with_post(mut self, post: Post) -> Self {
        self.posts.push(post);
        self
    }

    pub fn with_feed_follow(self, follow: FeedFollow) -> Self {
        self.add_feed_follow(follow);
        self
    }

    /// Add a follow after construction; later `feed_follows` calls include it
    pub fn add_feed_follow(&self, follow: FeedFollow) {
        self.follows
            .write()
            .unwrap()
            .entry(follow.user.id.clone())
            .or_default()
            .push(follow);
    }

    pub fn failing_users(self, message: &str) -> Self {
        self.failing("users", message)
    }

    pub fn failing_feeds(self, message: &str) -> Self {
        self.failing("feeds", message)
    }

    pub fn failing_feed_follows(self, message: &str) -> Self {
        self.failing("feedFollows", message)
    }

    pub fn failing_posts(self, message: &str) -> Self {
        self.failing("posts", message)
    }

    fn failing(mut self, query: &'static str, message: &str) -> Self {
        self.failures.insert(query, message.to_string());
        self
    }

    /// Every call served so far, in order
    pub fn calls(&self) -> Vec<Call> {
        self.calls.read().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.write().unwrap().push(call);
    }

    fn answer<T: Clone>(&self, query: &str, items: &[T]) -> Result<Vec<T>, QueryError> {
        match self.failures.get(query) {
            Some(message) => Err(QueryError::GraphQl(vec![message.clone()])),
            None => Ok(items.to_vec()),
        }
    }
}

#[async_trait]
impl AggregatorApi for InMemoryAggregator {
    async fn users(&self) -> Result<Vec<User>, QueryError> {
        self.record(Call::Users);
        self.answer("users", &self.users)
    }

    async fn feeds(&self) -> Result<Vec<Feed>, QueryError> {
        self.record(Call::Feeds);
        self.answer("feeds", &self.feeds)
    }

    async fn feed_follows(&self, user_id: &UserId) -> Result<Vec<FeedFollow>, QueryError> {
        self.record(Call::FeedFollows(user_id.clone()));
        let follows = self
            .follows
            .read()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default();
        self.answer("feedFollows", &follows)
    }

    async fn posts(&self) -> Result<Vec<Post>, QueryError> {
        self.record(Call::Posts);
        self.answer("posts", &self.posts)
    }
}
