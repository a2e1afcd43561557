//! Dashboard coordinator
//!
//! Owns every query result and the search state. The user list is fetched
//! here, not by the users panel, so name resolution reads it directly.

use std::sync::Arc;

use super::query_state::QueryState;
use super::search::{SearchEvent, SearchState};
use crate::domain::entities::{Feed, FeedFollow, Post, User, UserId};
use crate::domain::ports::AggregatorApi;

pub struct Dashboard<A>
where
    A: AggregatorApi,
{
    api: Arc<A>,
    search: SearchState,
    users: QueryState<Vec<User>>,
    feeds: QueryState<Vec<Feed>>,
    posts: QueryState<Vec<Post>>,
    feed_follows: QueryState<Vec<FeedFollow>>,
}

impl<A> Dashboard<A>
where
    A: AggregatorApi,
{
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            search: SearchState::new(),
            users: QueryState::Loading,
            feeds: QueryState::Loading,
            posts: QueryState::Loading,
            feed_follows: QueryState::Loading,
        }
    }

    /// Fetch users, feeds and posts concurrently.
    ///
    /// A mounted feed-follows panel is fetched again as well.
    pub async fn load(&mut self) {
        tracing::info!("Loading dashboard");

        let (users, feeds, posts) =
            tokio::join!(self.api.users(), self.api.feeds(), self.api.posts());

        self.users = users.into();
        self.feeds = feeds.into();
        self.posts = posts.into();

        if let Some(user_id) = self.search.mounted_user().cloned() {
            self.fetch_feed_follows(&user_id).await;
        }
    }

    /// Apply one search bar event
    pub async fn handle(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::Changed(text) => self.search.change_text(text),
            SearchEvent::Clear => self.search.clear(),
            SearchEvent::Submit => {
                let users = self.users.ready().map(Vec::as_slice);
                if let Some(user_id) = self.search.resolve_user_by_name(users) {
                    self.fetch_feed_follows(&user_id).await;
                }
            }
        }
    }

    async fn fetch_feed_follows(&mut self, user_id: &UserId) {
        tracing::debug!(user_id = %user_id, "Fetching feed follows");

        self.feed_follows = QueryState::Loading;
        let follows = QueryState::from(self.api.feed_follows(user_id).await);

        // The empty-result flag tracks the latest fetch; an empty list renders no rows
        if follows.ready().is_some_and(|follows| follows.is_empty()) {
            self.search.mark_empty_result();
        } else {
            self.search.clear_empty_result();
        }
        self.feed_follows = follows;
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn users(&self) -> &QueryState<Vec<User>> {
        &self.users
    }

    pub fn feeds(&self) -> &QueryState<Vec<Feed>> {
        &self.feeds
    }

    pub fn posts(&self) -> &QueryState<Vec<Post>> {
        &self.posts
    }

    /// Feed follows of the resolved user, only while that panel is mounted
    pub fn feed_follows(&self) -> Option<&QueryState<Vec<FeedFollow>>> {
        self.search.mounted_user().map(|_| &self.feed_follows)
    }
}
