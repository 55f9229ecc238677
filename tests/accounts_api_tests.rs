use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::spawn_app;

#[tokio::test]
async fn create_account_assigns_id_and_echoes_fields() {
    let app = spawn_app("acct-create").await;

    let (status, body) = app
        .request(
            "POST",
            "/accounts",
            Some(json!({"name": "Foo", "address": "Bar", "phoneNumber": "123"})),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Foo");
    assert_eq!(body["address"], "Bar");
    assert_eq!(body["phoneNumber"], "123");
    assert!(body["bankAccountNumber"].is_null());

    app.cleanup();
}

#[tokio::test]
async fn empty_account_list_is_an_empty_array() {
    let app = spawn_app("acct-empty").await;

    let (status, body) = app.request("GET", "/accounts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    app.cleanup();
}

#[tokio::test]
async fn get_account_attaches_its_payments() {
    let app = spawn_app("acct-detail").await;

    app.request(
        "POST",
        "/accounts",
        Some(json!({"name": "Foo", "address": "Bar", "phoneNumber": "123"})),
    )
    .await;
    for recipient in ["Alice", "Bob"] {
        let (status, _) = app
            .request(
                "POST",
                "/payments",
                Some(json!({
                    "accountId": 1,
                    "amount": "10.00",
                    "recipientName": recipient,
                    "recipientBank": "First",
                    "recipientBAN": 42,
                    "status": 1
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app.request("GET", "/accounts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Foo");
    let payments = body["payments"].as_array().expect("payments array");
    assert_eq!(payments.len(), 2);
    assert_eq!(payments[0]["recipientName"], "Alice");

    // The plain list endpoint does NOT attach payments.
    let (_, listed) = app.request("GET", "/accounts", None).await;
    assert!(listed[0].get("payments").is_none());

    app.cleanup();
}

#[tokio::test]
async fn absent_account_answers_404_on_read_update_delete() {
    let app = spawn_app("acct-404").await;

    for (method, body) in [
        ("GET", None),
        ("PUT", Some(json!({"name": "X"}))),
        ("DELETE", None),
    ] {
        let (status, body) = app.request(method, "/accounts/99", body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "method {method}");
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    app.cleanup();
}

#[tokio::test]
async fn account_list_supports_sort_skip_take_and_name_filter() {
    let app = spawn_app("acct-list").await;

    for name in ["cherry", "apple", "banana"] {
        app.request(
            "POST",
            "/accounts",
            Some(json!({"name": name, "address": "A", "phoneNumber": "1"})),
        )
        .await;
    }

    let (_, body) = app.request("GET", "/accounts?sort=name", None).await;
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["apple", "banana", "cherry"]);

    let (_, body) = app
        .request("GET", "/accounts?sort=name&skip=1&take=1", None)
        .await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "banana");

    let (_, body) = app.request("GET", "/accounts?name=an&sort=name", None).await;
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["banana"]);

    let (_, body) = app.request("GET", "/accounts?sort=name&dir=desc&take=1", None).await;
    assert_eq!(body[0]["name"], "cherry");

    app.cleanup();
}

#[tokio::test]
async fn partial_update_keeps_untouched_fields() {
    let app = spawn_app("acct-patch").await;

    app.request(
        "POST",
        "/accounts",
        Some(json!({"name": "Foo", "address": "Bar", "phoneNumber": "123", "bankAccountNumber": 9000})),
    )
    .await;

    let (status, body) = app
        .request("PUT", "/accounts/1", Some(json!({"address": "New Road 5"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Foo");
    assert_eq!(body["address"], "New Road 5");
    assert_eq!(body["phoneNumber"], "123");
    assert_eq!(body["bankAccountNumber"], 9000);

    app.cleanup();
}

#[tokio::test]
async fn delete_is_blocked_while_payments_exist_then_succeeds() {
    let app = spawn_app("acct-delete").await;

    app.request(
        "POST",
        "/accounts",
        Some(json!({"name": "Foo", "address": "Bar", "phoneNumber": "123"})),
    )
    .await;
    app.request(
        "POST",
        "/payments",
        Some(json!({
            "accountId": 1,
            "amount": "5",
            "recipientName": "Alice",
            "recipientBank": "First",
            "recipientBAN": 7,
            "status": 1
        })),
    )
    .await;

    let (status, body) = app.request("DELETE", "/accounts/1", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "ACCOUNT_IN_USE");

    let (status, _) = app.request("DELETE", "/payments/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.request("DELETE", "/accounts/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.request("GET", "/accounts/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.cleanup();
}
