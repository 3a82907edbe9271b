//! HTTP routes
//!
//! The query endpoints are thin wrappers over the core's snapshot
//! operations; they make no decisions of their own.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::history::Message;
use crate::registry::UserProfile;
use crate::server::listener::AppState;
use crate::server::ws;

/// Build the router: WebSocket endpoint plus query routes
pub(super) fn router(state: AppState) -> Router {
    let permissive_cors = state.config.permissive_cors;

    let router = Router::new()
        .route("/", get(health))
        .route("/users", get(users))
        .route("/messages", get(messages))
        .route("/ws", get(ws::ws_handler))
        .with_state(state);

    if permissive_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// `GET /` response body
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

/// `GET /users` response body
#[derive(Debug, Serialize)]
struct UsersResponse {
    users: Vec<UserProfile>,
}

/// `GET /messages` response body
#[derive(Debug, Serialize)]
struct MessagesResponse {
    messages: Vec<Message>,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Server is running",
        timestamp: Utc::now(),
    })
}

async fn users(State(state): State<AppState>) -> Json<UsersResponse> {
    Json(UsersResponse {
        users: state.coordinator.registry().snapshot().await,
    })
}

async fn messages(State(state): State<AppState>) -> Json<MessagesResponse> {
    Json(MessagesResponse {
        messages: state.coordinator.history().snapshot().await,
    })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    use super::*;
    use crate::server::config::ServerConfig;

    fn make_state() -> AppState {
        AppState::new(ServerConfig::default())
    }

    async fn get_json(state: AppState, uri: &str) -> serde_json::Value {
        let response = router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let json = get_json(make_state(), "/").await;

        assert_eq!(json["status"], "Server is running");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_users_reflects_registry() {
        let state = make_state();
        state
            .coordinator
            .registry()
            .register(crate::connection::ConnectionId::new(1), "Alice")
            .await
            .unwrap();

        let json = get_json(state, "/users").await;

        assert_eq!(json["users"][0]["name"], "Alice");
    }

    #[tokio::test]
    async fn test_messages_reflects_history() {
        let state = make_state();
        state
            .coordinator
            .history()
            .append(Message::new(
                crate::connection::ConnectionId::new(1),
                "Alice",
                "hi",
            ))
            .await;

        let json = get_json(state, "/messages").await;

        assert_eq!(json["messages"][0]["text"], "hi");
        assert_eq!(json["messages"][0]["userName"], "Alice");
    }

    #[tokio::test]
    async fn test_empty_snapshots() {
        let state = make_state();

        let users = get_json(state.clone(), "/users").await;
        assert!(users["users"].as_array().unwrap().is_empty());

        let messages = get_json(state, "/messages").await;
        assert!(messages["messages"].as_array().unwrap().is_empty());
    }
}
