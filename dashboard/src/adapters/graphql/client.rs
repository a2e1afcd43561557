//! GraphQL-over-HTTP client for the aggregator API

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::queries::{Query, GET_FEEDS, GET_FEED_FOLLOWS, GET_POSTS, GET_USERS};
use crate::config::Config;
use crate::domain::entities::{Feed, FeedFollow, Post, User, UserId};
use crate::domain::ports::AggregatorApi;
use crate::error::QueryError;

/// Executes the dashboard's queries against a single GraphQL endpoint
#[derive(Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphQlClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.graphql_url, config.auth_token.as_deref())
    }

    /// Create a new client with explicit configuration
    pub fn new(endpoint: &str, auth_token: Option<&str>) -> Result<Self> {
        reqwest::Url::parse(endpoint)
            .with_context(|| format!("Invalid GraphQL endpoint: {}", endpoint))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = auth_token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .context("Invalid auth token format")?,
            );
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    #[cfg(test)]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run `query` and decode the list under its root field
    pub async fn execute<T: DeserializeOwned>(
        &self,
        query: &Query,
        variables: Value,
    ) -> Result<T, QueryError> {
        tracing::debug!(operation = query.operation_name, "Executing GraphQL query");

        let result = self.send(query, variables).await;
        match &result {
            Err(QueryError::Http { status, body }) => {
                tracing::warn!(
                    operation = query.operation_name,
                    status,
                    body = %body,
                    "GraphQL endpoint returned an error status"
                );
            }
            Err(e) => {
                tracing::warn!(
                    operation = query.operation_name,
                    error = %e,
                    "GraphQL query failed"
                );
            }
            Ok(_) => {}
        }
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        query: &Query,
        variables: Value,
    ) -> Result<T, QueryError> {
        let request = GraphQlRequest {
            query: query.document,
            operation_name: query.operation_name,
            variables,
        };

        let response = self.http.post(&self.endpoint).json(&request).send().await?;

        handle_response(response, query.root_field).await
    }
}

async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
    root_field: &str,
) -> Result<T, QueryError> {
    let status = response.status();
    let body = response.text().await?;

    let envelope = serde_json::from_str::<GraphQlResponse>(&body);

    // GraphQL errors win over the status code; servers report validation
    // failures with 4xx and an errors array.
    if let Ok(GraphQlResponse { errors, .. }) = &envelope {
        if !errors.is_empty() {
            return Err(QueryError::GraphQl(
                errors.iter().map(|e| e.message.clone()).collect(),
            ));
        }
    }

    if !status.is_success() {
        return Err(QueryError::Http {
            status: status.as_u16(),
            body,
        });
    }

    let mut data = envelope
        .map_err(|e| QueryError::Decode(e.to_string()))?
        .data
        .ok_or_else(|| QueryError::Decode("response has no data".to_string()))?;

    let field = data
        .get_mut(root_field)
        .map(Value::take)
        .ok_or_else(|| QueryError::Decode(format!("missing field `{}`", root_field)))?;

    serde_json::from_value(field).map_err(|e| QueryError::Decode(e.to_string()))
}

#[async_trait]
impl AggregatorApi for GraphQlClient {
    async fn users(&self) -> Result<Vec<User>, QueryError> {
        self.execute(&GET_USERS, json!({})).await
    }

    async fn feeds(&self) -> Result<Vec<Feed>, QueryError> {
        self.execute(&GET_FEEDS, json!({})).await
    }

    async fn feed_follows(&self, user_id: &UserId) -> Result<Vec<FeedFollow>, QueryError> {
        self.execute(&GET_FEED_FOLLOWS, json!({ "id": user_id })).await
    }

    async fn posts(&self) -> Result<Vec<Post>, QueryError> {
        self.execute(&GET_POSTS, json!({})).await
    }
}

// --- Wire types ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a> {
    query: &'a str,
    operation_name: &'a str,
    variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}
