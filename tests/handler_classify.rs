mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use email_variants::api::handlers::classify_handler;
use serde_json::{Value, json};

fn classify_server(max_classify_batch: usize) -> TestServer {
    let state = common::create_test_state(false, max_classify_batch);
    let app = Router::new()
        .route("/api/classify", post(classify_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_classify_mixed_batch() {
    let server = classify_server(100);

    let response = server
        .post("/api/classify")
        .json(&json!({
            "candidates": [
                "user@abc.oastify.com",
                "\"user\"@abc.oastify.com",
                "user(comment)@abc.oastify.com",
                "user@[127.0.0.1]"
            ]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["summary"]["total"], 4);
    assert_eq!(json["summary"]["valid"], 2);
    assert_eq!(json["summary"]["fuzzed"], 2);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items[0]["candidate"], "user@abc.oastify.com");
    assert_eq!(items[0]["classification"], "valid");
    assert_eq!(items[1]["classification"], "fuzzed");
    assert_eq!(items[2]["classification"], "valid");
    assert_eq!(items[3]["classification"], "fuzzed");
}

#[tokio::test]
async fn test_classify_keeps_duplicates_and_order() {
    let server = classify_server(100);

    let response = server
        .post("/api/classify")
        .json(&json!({ "candidates": ["b@x.io", "a@x.io", "b@x.io"] }))
        .await;

    let json = response.json::<Value>();
    let candidates: Vec<&str> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["candidate"].as_str().unwrap())
        .collect();

    assert_eq!(candidates, vec!["b@x.io", "a@x.io", "b@x.io"]);
}

#[tokio::test]
async fn test_classify_empty_batch_rejected() {
    let server = classify_server(100);

    let response = server
        .post("/api/classify")
        .json(&json!({ "candidates": [] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_classify_batch_over_limit() {
    let server = classify_server(2);

    let response = server
        .post("/api/classify")
        .json(&json!({ "candidates": ["a@x.io", "b@x.io", "c@x.io"] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["details"]["provided"], 3);
    assert_eq!(json["error"]["details"]["max"], 2);
}
