use std::time::Duration;

use axum::Router;
use axum::extract::RawQuery;
use axum::http::HeaderMap;
use axum::routing::{any, get};
use serde_json::{Value, json};

use super::*;
use crate::config::ConsoleConfig;
use crate::routes::api_routes;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Fake campus API that echoes what it received.
fn backend() -> Router {
    Router::new()
        .route(
            "/api/{*path}",
            any(|method: Method, RawQuery(query): RawQuery, headers: HeaderMap, body: Bytes| async move {
                let echoed = json!({
                    "method": method.as_str(),
                    "query": query,
                    "content_type": headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
                    "body": String::from_utf8_lossy(&body),
                });
                (StatusCode::CREATED, axum::Json(echoed))
            }),
        )
        .route(
            "/api/students/template/",
            get(|| async {
                (
                    [(CONTENT_TYPE, "application/octet-stream"), (CONTENT_DISPOSITION, "attachment; filename=\"t.xlsx\"")],
                    vec![1_u8, 2, 3],
                )
            }),
        )
}

async fn host(backend_url: String) -> String {
    let config = ConsoleConfig {
        port: 0,
        backend_url,
        backend_connect_timeout: Duration::from_secs(1),
    };
    serve(api_routes(AppState::new(&config).unwrap())).await
}

#[test]
fn upstream_url_keeps_trailing_slash_and_query() {
    assert_eq!(upstream_url("http://b/api", "clusters/", None), "http://b/api/clusters/");
    assert_eq!(upstream_url("http://b/api/", "/staff/3/", Some("x=1")), "http://b/api/staff/3/?x=1");
    assert_eq!(upstream_url("http://b/api", "status/", Some("")), "http://b/api/status/");
}

#[tokio::test]
async fn forwards_method_query_body_and_content_type() {
    let backend = serve(backend()).await;
    let host = host(format!("{backend}/api")).await;

    let response = reqwest::Client::new()
        .put(format!("{host}/api/clusters/4/?verbose=1"))
        .header(CONTENT_TYPE, "application/json")
        .body(r#"{"cluster_name":"A"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let echoed: Value = serde_json::from_slice(&response.bytes().await.unwrap()).unwrap();
    assert_eq!(echoed["method"], "PUT");
    assert_eq!(echoed["query"], "verbose=1");
    assert_eq!(echoed["content_type"], "application/json");
    assert_eq!(echoed["body"], r#"{"cluster_name":"A"}"#);
}

#[tokio::test]
async fn relays_download_headers() {
    let backend = serve(backend()).await;
    let host = host(format!("{backend}/api")).await;

    let response = reqwest::get(format!("{host}/api/students/template/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_DISPOSITION], "attachment; filename=\"t.xlsx\"");
    assert_eq!(response.bytes().await.unwrap().as_ref(), &[1, 2, 3]);
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = listener.local_addr().unwrap();
    drop(listener);
    let host = host(format!("http://{dead}/api")).await;

    let response = reqwest::get(format!("{host}/api/status/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn healthz_is_ok() {
    let host = host("http://127.0.0.1:9/api".to_owned()).await;
    let response = reqwest::get(format!("{host}/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
