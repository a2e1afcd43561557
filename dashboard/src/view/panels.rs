//! Row renderers for the four panels

use super::query_result::{render_query, PanelView};
use crate::app::QueryState;
use crate::domain::entities::{Feed, FeedFollow, Post, User};

/// Markdown link
fn link(text: &str, url: &str) -> String {
    format!("[{}]({})", text, url)
}

fn user_row(user: &User) -> Vec<String> {
    vec![user.name.clone()]
}

fn feed_row(feed: &Feed) -> Vec<String> {
    vec![link(&feed.name, &feed.url)]
}

fn feed_follow_row(follow: &FeedFollow) -> Vec<String> {
    vec![
        format!("User: {}", follow.user.name),
        link(&follow.feed.name, &follow.feed.url),
    ]
}

fn post_row(post: &Post) -> Vec<String> {
    vec![
        link(&post.title, &post.url),
        format!("Published: {}", post.published_at),
        post.description.clone(),
    ]
}

pub fn display_users(state: &QueryState<Vec<User>>) -> PanelView {
    render_query(state, user_row)
}

pub fn display_feeds(state: &QueryState<Vec<Feed>>) -> PanelView {
    render_query(state, feed_row)
}

pub fn display_feed_follows(state: &QueryState<Vec<FeedFollow>>) -> PanelView {
    render_query(state, feed_follow_row)
}

pub fn display_posts(state: &QueryState<Vec<Post>>) -> PanelView {
    render_query(state, post_row)
}
