use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    db_path: PathBuf,
}

/// Router backed by a fresh temp SQLite file, unique per test invocation.
pub async fn spawn_app(tag: &str) -> TestApp {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut db_path = std::env::temp_dir();
    db_path.push(format!(
        "payboard-{}-{}-{}.sqlite",
        tag,
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", db_path.display());
    let storage = payboard::db::connect(&database_url)
        .await
        .expect("failed to open test database");
    let state = payboard::router::AppState::new(storage);

    TestApp {
        router: payboard::router::registry_router(state),
        db_path,
    }
}

impl TestApp {
    /// Issue one request against the router; returns status and the decoded
    /// JSON body (`Value::Null` for empty bodies).
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let request = builder.body(body).expect("failed to build request");

        let resp = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");
        let status = resp.status();

        let bytes = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body was not JSON")
        };
        (status, json)
    }

    pub fn cleanup(&self) {
        let _ = std::fs::remove_file(&self.db_path);
    }
}
