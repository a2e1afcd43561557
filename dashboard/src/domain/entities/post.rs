//! Post entity

use serde::{Deserialize, Serialize};

use super::Keyed;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

/// An item scraped from one of the feeds
///
/// `published_at` is kept as the server's string; the dashboard only displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub description: String,
    pub published_at: String,
    pub url: String,
}

impl Keyed for Post {
    fn key(&self) -> &str {
        &self.id.0
    }
}
