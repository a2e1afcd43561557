//! Page renderer
//!
//! Composes the header, the four panels and the search box into one page.

use super::panels::{display_feed_follows, display_feeds, display_posts, display_users};
use super::search_bar::render_search_bar;
use crate::app::Dashboard;
use crate::domain::ports::AggregatorApi;

pub const TITLE: &str = "Go RSS Aggregator";

pub const DESCRIPTION: &str = "This is a project used to learn Go. Specifically a web server \
    that exposes a GraphQL API, leveraging concurrent web scrapping to deliver the latest posts \
    for each feed.";

pub const EMPTY_RESULT: &str = "Oops, looks like this users is not following any feeds.";

/// Render the whole dashboard
pub fn render_page<A: AggregatorApi>(dashboard: &Dashboard<A>) -> String {
    let mut buf = String::new();

    // Header
    buf.push_str(&format!("# {}\n\n", TITLE));
    buf.push_str(&format!("{}\n\n", DESCRIPTION));

    buf.push_str("## Users\n\n");
    buf.push_str(&display_users(dashboard.users()).to_string());
    buf.push('\n');

    buf.push_str("## Feeds\n\n");
    buf.push_str(&display_feeds(dashboard.feeds()).to_string());
    buf.push('\n');

    // Feed follows, behind the search box
    let search = dashboard.search();
    buf.push_str("## Feed Follows\n\n");
    buf.push_str("Get feeds by user:\n");
    buf.push_str(&render_search_bar(&search.search_text));
    if let Some(follows) = dashboard.feed_follows() {
        buf.push_str(&display_feed_follows(follows).to_string());
    }
    if search.show_empty_result {
        buf.push_str(EMPTY_RESULT);
        buf.push('\n');
    }
    buf.push('\n');

    buf.push_str("## Posts\n\n");
    buf.push_str(&display_posts(dashboard.posts()).to_string());

    buf
}
