use super::*;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use shared::domain::{CommentId, UserId};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

#[derive(Clone)]
struct ServerState {
    created_tx: Arc<Mutex<Option<oneshot::Sender<serde_json::Value>>>>,
}

#[derive(Debug, Deserialize)]
struct CommentsQuery {
    #[serde(rename = "postId")]
    post_id: i64,
}

async fn handle_users() -> Json<serde_json::Value> {
    Json(serde_json::json!([
        {"id": 1, "name": "Leanne Graham", "username": "Bret"},
        {"id": 2, "name": "Ervin Howell", "username": "Antonette"}
    ]))
}

async fn handle_create_post(
    State(state): State<ServerState>,
    Json(payload): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    if let Some(tx) = state.created_tx.lock().await.take() {
        let _ = tx.send(payload.clone());
    }
    let mut created = payload;
    created["id"] = serde_json::json!(101);
    (StatusCode::CREATED, Json(created))
}

async fn handle_comments(Query(query): Query<CommentsQuery>) -> Json<serde_json::Value> {
    if query.post_id != 1 {
        return Json(serde_json::json!([]));
    }
    Json(serde_json::json!([
        {"postId": 1, "id": 1, "name": "id labore ex et quam laborum", "email": "Eliseo@gardner.biz", "body": "laudantium enim"},
        {"postId": 1, "id": 2, "name": "quo vero reiciendis", "email": "Jayne_Kuhic@sydney.com", "body": "est natus enim"}
    ]))
}

async fn spawn_api_server() -> Result<(String, oneshot::Receiver<serde_json::Value>), std::io::Error> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (tx, rx) = oneshot::channel();
    let state = ServerState {
        created_tx: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new()
        .route("/users", get(handle_users))
        .route("/posts", post(handle_create_post))
        .route("/comments", get(handle_comments))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}"), rx))
}

async fn spawn_failing_server() -> Result<String, std::io::Error> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new()
        .route("/users", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/posts", post(|| async { StatusCode::BAD_REQUEST }))
        .route("/comments", get(|| async { "not json" }));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

#[test]
fn rejects_unparseable_base_url() {
    let err = HttpDashboardClient::new("not a url").err().expect("must fail");
    assert!(matches!(err, ApiClientError::InvalidBaseUrl { .. }));
}

#[test]
fn rejects_non_http_scheme() {
    let err = HttpDashboardClient::new("ftp://example.com")
        .err()
        .expect("must fail");
    assert!(matches!(err, ApiClientError::UnsupportedScheme { .. }));
}

#[test]
fn strips_trailing_slash_from_base_url() {
    let client = HttpDashboardClient::new("http://127.0.0.1:9/").expect("client");
    assert_eq!(client.base_url(), "http://127.0.0.1:9");
}

#[tokio::test]
async fn fetch_users_decodes_user_collection() {
    let (server_url, _created_rx) = spawn_api_server().await.expect("spawn server");
    let client = HttpDashboardClient::new(&server_url).expect("client");

    let users = client.fetch_users().await.expect("users");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, UserId(1));
    assert_eq!(users[1].name, "Ervin Howell");
}

#[tokio::test]
async fn create_post_sends_camel_case_payload_and_returns_server_record() {
    let (server_url, created_rx) = spawn_api_server().await.expect("spawn server");
    let client = HttpDashboardClient::new(&server_url).expect("client");

    let created = client
        .create_post(&NewPost {
            title: "Hi".to_string(),
            body: "World".to_string(),
            user_id: UserId(1),
        })
        .await
        .expect("create");

    let payload = created_rx.await.expect("payload");
    assert_eq!(
        payload,
        serde_json::json!({"title": "Hi", "body": "World", "userId": 1})
    );
    assert_eq!(
        created,
        Post {
            id: PostId(101),
            title: "Hi".to_string(),
            body: "World".to_string(),
            user_id: UserId(1),
        }
    );
}

#[tokio::test]
async fn fetch_comments_scopes_by_post_id_query() {
    let (server_url, _created_rx) = spawn_api_server().await.expect("spawn server");
    let client = HttpDashboardClient::new(&server_url).expect("client");

    let comments = client.fetch_comments(PostId(1)).await.expect("comments");
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[1].id, CommentId(2));
    assert!(comments.iter().all(|c| c.post_id == PostId(1)));

    let none = client.fetch_comments(PostId(101)).await.expect("comments");
    assert!(none.is_empty());
}

#[tokio::test]
async fn non_success_status_maps_to_request_error() {
    let server_url = spawn_failing_server().await.expect("spawn server");
    let client = HttpDashboardClient::new(&server_url).expect("client");

    let err = client.fetch_users().await.expect_err("must fail");
    assert_eq!(err.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
    assert!(err.to_string().starts_with("GET /users failed"));

    let err = client
        .create_post(&NewPost {
            title: "Hi".to_string(),
            body: "World".to_string(),
            user_id: UserId(1),
        })
        .await
        .expect_err("must fail");
    assert_eq!(err.status(), Some(reqwest::StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn undecodable_body_is_a_request_error() {
    let server_url = spawn_failing_server().await.expect("spawn server");
    let client = HttpDashboardClient::new(&server_url).expect("client");

    let err = client
        .fetch_comments(PostId(1))
        .await
        .expect_err("must fail");
    assert!(matches!(
        err,
        ApiClientError::Request {
            endpoint: "GET /comments",
            ..
        }
    ));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = HttpDashboardClient::new(&format!("http://{addr}")).expect("client");
    let err = client.fetch_users().await.expect_err("must fail");
    assert!(matches!(err, ApiClientError::Request { .. }));
}
