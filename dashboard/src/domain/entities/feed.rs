//! Feed and feed follow entities

use serde::{Deserialize, Serialize};

use super::{Keyed, User};

/// Identifier of an RSS feed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedId(pub String);

/// Identifier of a feed follow record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedFollowId(pub String);

/// An RSS feed the aggregator scrapes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub id: FeedId,
    pub name: String,
    pub url: String,
}

impl Keyed for Feed {
    fn key(&self) -> &str {
        &self.id.0
    }
}

/// A user's subscription to a feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedFollow {
    pub id: FeedFollowId,
    pub user: User,
    pub feed: Feed,
}

impl Keyed for FeedFollow {
    fn key(&self) -> &str {
        &self.id.0
    }
}
