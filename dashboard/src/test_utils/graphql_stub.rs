//! Local GraphQL stub server
//!
//! Answers `POST /query` with a canned reply per operation name and records
//! each request it receives.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

/// Canned reply for one operation
#[derive(Debug, Clone)]
pub enum StubReply {
    Json(u16, Value),
    Text(u16, String),
}

impl StubReply {
    pub fn json(status: u16, body: Value) -> Self {
        StubReply::Json(status, body)
    }

    pub fn text(status: u16, body: &str) -> Self {
        StubReply::Text(status, body.to_string())
    }
}

impl IntoResponse for StubReply {
    fn into_response(self) -> Response {
        match self {
            StubReply::Json(status, body) => (status_code(status), Json(body)).into_response(),
            StubReply::Text(status, body) => (status_code(status), body).into_response(),
        }
    }
}

fn status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// A request the stub received
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub operation_name: String,
    pub variables: Value,
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct StubState {
    replies: Arc<HashMap<String, StubReply>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A running stub; shuts down with the test runtime
pub struct GraphQlStub {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl GraphQlStub {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn operations(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|r| r.operation_name)
            .collect()
    }
}

/// Start a stub on an ephemeral local port
///
/// Operations without a configured reply get a GraphQL error.
pub async fn spawn_graphql_stub(replies: Vec<(&str, StubReply)>) -> GraphQlStub {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        replies: Arc::new(
            replies
                .into_iter()
                .map(|(op, reply)| (op.to_string(), reply))
                .collect(),
        ),
        requests: requests.clone(),
    };

    let app = Router::new()
        .route("/query", post(handle_query))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    GraphQlStub {
        url: format!("http://{}/query", addr),
        requests,
    }
}

async fn handle_query(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StubReply {
    let operation_name = body["operationName"].as_str().unwrap_or_default().to_string();

    state.requests.lock().unwrap().push(RecordedRequest {
        operation_name: operation_name.clone(),
        variables: body["variables"].clone(),
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    state.replies.get(&operation_name).cloned().unwrap_or_else(|| {
        StubReply::json(
            200,
            json!({"errors": [{"message": format!("unknown operation {}", operation_name)}]}),
        )
    })
}
