pub mod admin;
pub mod business;
pub mod health;
pub mod talent;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session
        .route("/api/v1/session", get(session::handle_current))
        .route("/api/v1/session/login", post(session::handle_login))
        .route("/api/v1/session/logout", post(session::handle_logout))
        // Admin console
        .route("/api/v1/admin/dashboard", get(admin::handle_dashboard))
        .route("/api/v1/admin/users", get(admin::handle_list_users))
        .route("/api/v1/admin/ai/queue", get(admin::handle_ai_queue))
        .route("/api/v1/admin/backups", post(admin::handle_run_backup))
        // Business
        .route("/api/v1/business/dashboard", get(business::handle_dashboard))
        .route("/api/v1/business/talent", get(business::handle_search_talent))
        .route("/api/v1/business/projects", get(business::handle_list_projects))
        .route("/api/v1/business/favorites", get(business::handle_list_favorites))
        .route(
            "/api/v1/business/billing/payment",
            post(business::handle_update_payment),
        )
        // Talent
        .route("/api/v1/talent/dashboard", get(talent::handle_dashboard))
        .route("/api/v1/talent/jobs", get(talent::handle_list_jobs))
        // Chat
        .route(
            "/api/v1/conversations",
            get(chat::handle_list_conversations).post(chat::handle_open_conversation),
        )
        .route(
            "/api/v1/conversations/:id/messages",
            get(chat::handle_get_messages).post(chat::handle_send_message),
        )
        .route("/api/v1/conversations/:id/read", post(chat::handle_mark_read))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::session::storage::MemorySessionStorage;

    fn test_state() -> AppState {
        let config = Config {
            simulated_latency: Duration::ZERO,
            ..Config::default()
        };
        AppState::new(&config, Arc::new(MemorySessionStorage::new()))
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn login(router: &Router, email: &str, password: &str) -> (StatusCode, Value) {
        send(
            router,
            Method::POST,
            "/api/v1/session/login",
            Some(json!({ "email": email, "password": password })),
        )
        .await
    }

    #[tokio::test]
    async fn test_health() {
        let router = build_router(test_state());
        let (status, body) = send(&router, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_login_logout_flow() {
        let router = build_router(test_state());

        let (status, body) = send(&router, Method::GET, "/api/v1/session", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["authenticated"], false);

        let (status, body) = login(&router, "business@example.com", "business123").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "business");
        assert_eq!(body["email"], "business@example.com");

        let (_, body) = send(&router, Method::GET, "/api/v1/session", None).await;
        assert_eq!(body["authenticated"], true);

        let (status, _) = send(&router, Method::POST, "/api/v1/session/logout", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = send(&router, Method::GET, "/api/v1/session", None).await;
        assert_eq!(body["authenticated"], false);
        assert!(body["session"].is_null());
    }

    #[tokio::test]
    async fn test_bad_login_is_invalid_credentials() {
        let router = build_router(test_state());
        let (status, body) = login(&router, "business@example.com", "nope").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
        assert_eq!(body["error"]["message"], "Invalid email or password");
    }

    #[tokio::test]
    async fn test_sections_are_role_scoped() {
        let router = build_router(test_state());

        let (status, _) = send(&router, Method::GET, "/api/v1/admin/users", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        login(&router, "talent@example.com", "talent123").await;
        let (status, body) = send(&router, Method::GET, "/api/v1/admin/users", None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "FORBIDDEN");

        let (status, _) = send(&router, Method::GET, "/api/v1/talent/jobs", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_admin_user_search_and_filters() {
        let router = build_router(test_state());
        login(&router, "admin@krystal.com", "admin123").await;

        let (status, body) = send(
            &router,
            Method::GET,
            "/api/v1/admin/users?q=sarah&role=all&status=all",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["items"][0]["name"], "Sarah Johnson");

        let (_, body) = send(
            &router,
            Method::GET,
            "/api/v1/admin/users?role=talent&status=active&sort=name",
            None,
        )
        .await;
        let names: Vec<&str> = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Emma Rodriguez", "Olivia Brown"]);
    }

    #[tokio::test]
    async fn test_empty_result_is_flagged_not_error() {
        let router = build_router(test_state());
        login(&router, "talent@example.com", "talent123").await;

        let (status, body) =
            send(&router, Method::GET, "/api/v1/talent/jobs?q=astronaut", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["empty"], true);
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn test_unknown_sort_is_bad_request() {
        let router = build_router(test_state());
        login(&router, "business@example.com", "business123").await;

        let (status, body) =
            send(&router, Method::GET, "/api/v1/business/projects?sort=vibes", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_business_talent_search() {
        let router = build_router(test_state());
        login(&router, "business@example.com", "business123").await;

        let (status, body) = send(
            &router,
            Method::GET,
            "/api/v1/business/talent?q=photo&availability=all&sort=match_score",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["items"][0]["name"], "Aisha Patel");
    }

    #[tokio::test]
    async fn test_chat_round_trip() {
        let router = build_router(test_state());

        let (status, _) = send(&router, Method::GET, "/api/v1/conversations", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        login(&router, "business@example.com", "business123").await;
        let (status, conversation) = send(
            &router,
            Method::POST,
            "/api/v1/conversations",
            Some(json!({ "participants": ["Leo Martins"] })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = conversation["id"].as_str().unwrap().to_string();

        let uri = format!("/api/v1/conversations/{id}/messages");
        let (status, message) = send(
            &router,
            Method::POST,
            &uri,
            Some(json!({ "text": "Are you free next week?" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(message["sender"], "Business Account");

        let (_, messages) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(messages.as_array().unwrap().len(), 1);

        let (_, list) = send(&router, Method::GET, "/api/v1/conversations?q=leo", None).await;
        assert_eq!(list["total"], 1);
        assert_eq!(list["items"][0]["last_message"], "Are you free next week?");
    }

    fn field(list: &Value, key: &str) -> Vec<String> {
        list["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item[key].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_chat_is_scoped_to_signed_in_user() {
        let router = build_router(test_state());

        login(&router, "business@example.com", "business123").await;
        let (_, business_list) = send(&router, Method::GET, "/api/v1/conversations", None).await;
        assert_eq!(business_list["total"], 2);
        let business_thread = business_list["items"][0]["id"].as_str().unwrap().to_string();

        login(&router, "talent@example.com", "talent123").await;
        let (status, list) = send(&router, Method::GET, "/api/v1/conversations", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list["total"], 1);
        assert_eq!(list["items"][0]["participants"], json!(["Talent Profile", "Lumen Studios"]));

        let (_, dashboard) = send(&router, Method::GET, "/api/v1/talent/dashboard", None).await;
        let unread = dashboard["cards"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["label"] == "Unread Messages")
            .unwrap();
        assert_eq!(unread["value"], "2");

        let messages_uri = format!("/api/v1/conversations/{business_thread}/messages");
        let (status, _) = send(&router, Method::GET, &messages_uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(
            &router,
            Method::POST,
            &messages_uri,
            Some(json!({ "text": "Hello?" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let read_uri = format!("/api/v1/conversations/{business_thread}/read");
        let (status, _) = send(&router, Method::POST, &read_uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // The business thread is untouched.
        login(&router, "business@example.com", "business123").await;
        let (_, messages) = send(&router, Method::GET, &messages_uri, None).await;
        assert_eq!(messages.as_array().unwrap().len(), 2);
        let (_, dashboard) = send(&router, Method::GET, "/api/v1/business/dashboard", None).await;
        let unread = dashboard["cards"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["label"] == "Unread Messages")
            .unwrap();
        assert_eq!(unread["value"], "1");
    }

    #[tokio::test]
    async fn test_business_favorites_sorting() {
        let router = build_router(test_state());
        login(&router, "business@example.com", "business123").await;

        let (status, body) =
            send(&router, Method::GET, "/api/v1/business/favorites?sort=recent", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            field(&body, "name"),
            vec!["Olivia Brown", "Emma Rodriguez", "Leo Martins"]
        );

        let (_, body) = send(
            &router,
            Method::GET,
            "/api/v1/business/favorites?category=all&sort=match_score",
            None,
        )
        .await;
        let scores: Vec<u64> = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["match_score"].as_u64().unwrap())
            .collect();
        assert_eq!(scores, vec![95, 88, 79]);

        let (_, body) = send(
            &router,
            Method::GET,
            "/api/v1/business/favorites?q=music&category=dance",
            None,
        )
        .await;
        assert_eq!(field(&body, "name"), vec!["Leo Martins"]);
    }

    #[tokio::test]
    async fn test_talent_match_score_sort_orders_results() {
        let router = build_router(test_state());
        login(&router, "business@example.com", "business123").await;

        let (_, body) = send(
            &router,
            Method::GET,
            "/api/v1/business/talent?availability=available&sort=match_score",
            None,
        )
        .await;
        assert_eq!(
            field(&body, "name"),
            vec!["Emma Rodriguez", "Olivia Brown", "Leo Martins"]
        );
    }

    #[tokio::test]
    async fn test_payment_update_rejects_bad_card() {
        let router = build_router(test_state());
        login(&router, "business@example.com", "business123").await;

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/v1/business/billing/payment",
            Some(json!({ "cardholder": "Business Account", "last4": "42", "expiry": "12/27" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_conversation_is_404() {
        let router = build_router(test_state());
        login(&router, "talent@example.com", "talent123").await;

        let uri = format!("/api/v1/conversations/{}/read", uuid::Uuid::new_v4());
        let (status, _) = send(&router, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_simulated_admin_operations() {
        let router = build_router(test_state());
        login(&router, "admin@krystal.com", "admin123").await;

        let (status, backup) = send(&router, Method::POST, "/api/v1/admin/backups", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(backup["progress"], 100);

        let (status, queue) = send(&router, Method::GET, "/api/v1/admin/ai/queue", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(queue["queued"].as_u64().is_some());
    }

    #[tokio::test]
    async fn test_business_payment_update() {
        let router = build_router(test_state());
        login(&router, "business@example.com", "business123").await;

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/v1/business/billing/payment",
            Some(json!({ "cardholder": "Business Account", "last4": "4242", "expiry": "12/27" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "succeeded");
    }

    #[tokio::test]
    async fn test_dashboards_follow_role() {
        let router = build_router(test_state());
        login(&router, "talent@example.com", "talent123").await;

        let (status, body) = send(&router, Method::GET, "/api/v1/talent/dashboard", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "talent");
        assert!(!body["cards"].as_array().unwrap().is_empty());
        assert_eq!(body["cards"][0]["icon"]["kind"], "named");
    }
}
