use std::env;

pub const DEFAULT_GRAPHQL_URL: &str = "http://localhost:8080/query";

#[derive(Debug, Clone)]
pub struct Config {
    /// GraphQL endpoint of the aggregator
    pub graphql_url: String,
    /// Bearer token sent with every query, if the endpoint needs one
    pub auth_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            graphql_url: env::var("RSSAGG_GRAPHQL_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string()),
            auth_token: env::var("RSSAGG_AUTH_TOKEN")
                .ok()
                .filter(|token| !token.is_empty()),
        }
    }
}
