//! Query documents sent to the aggregator

/// A fixed, read-only GraphQL query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    /// Operation name, sent as `operationName`
    pub operation_name: &'static str,
    /// Field of `data` that holds the result list
    pub root_field: &'static str,
    pub document: &'static str,
}

pub const GET_USERS: Query = Query {
    operation_name: "users",
    root_field: "users",
    document: r#"query users {
  users {
    id
    name
  }
}"#,
};

pub const GET_FEEDS: Query = Query {
    operation_name: "feeds",
    root_field: "feeds",
    document: r#"query feeds {
  feeds {
    id
    name
    url
  }
}"#,
};

/// Takes one variable, `id`, the user whose follows to list
pub const GET_FEED_FOLLOWS: Query = Query {
    operation_name: "FeedFollows",
    root_field: "feedFollows",
    document: r#"query FeedFollows($id: String!) {
  feedFollows(userId: $id) {
    id
    user {
      id
      name
    }
    feed {
      id
      name
      url
    }
  }
}"#,
};

pub const GET_POSTS: Query = Query {
    operation_name: "posts",
    root_field: "posts",
    document: r#"query posts {
  posts {
    id
    title
    description
    publishedAt
    url
  }
}"#,
};
