use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;

use support::{NewsForm, admin_get, admin_json, assert_error_response, spawn_app};

async fn seed(app: &support::TestApp, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for n in 0..count {
        let created = app
            .create_news(NewsForm::valid(&format!("Bulk Story {n}")).png())
            .await;
        ids.push(created["id"].as_i64().unwrap());
    }
    ids
}

/// updateStatus changes every listed article and reports the count.
#[tokio::test]
async fn bulk_update_status_publishes_all() {
    let app = spawn_app().await;
    let ids = seed(&app, 3).await;

    let (status, outcome) = app
        .send_json(admin_json(
            Method::POST,
            "/api/news/bulk",
            json!({ "action": "updateStatus", "ids": ids, "status": "published" }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome, json!({ "action": "updateStatus", "requested": 3, "affected": 3 }));

    let (_, public) = app.send_json(support::public_get("/api/public/news")).await;
    assert_eq!(public["pagination"]["total"], 3);
    for item in public["items"].as_array().unwrap() {
        assert!(item["publishedAt"].is_string());
    }

    let (_, drafts) = app
        .send_json(admin_json(
            Method::POST,
            "/api/news/bulk",
            json!({ "action": "updateStatus", "ids": [ids[0]], "status": "draft" }),
        ))
        .await;
    assert_eq!(drafts["affected"], 1);
    let (_, first) = app.send_json(admin_get(&format!("/api/news/{}", ids[0]))).await;
    assert_eq!(first["status"], "draft");
    assert!(first["publishedAt"].is_null());
}

/// Bulk delete removes records and their images; unknown ids are not counted.
#[tokio::test]
async fn bulk_delete_removes_images() {
    let app = spawn_app().await;
    let ids = seed(&app, 2).await;

    let (status, outcome) = app
        .send_json(admin_json(
            Method::POST,
            "/api/news/bulk",
            json!({ "action": "delete", "ids": [ids[0], ids[1], 999] }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["requested"], 3);
    assert_eq!(outcome["affected"], 2);

    let mut removed = app.storage.removed();
    removed.sort();
    let mut saved = app.storage.saved();
    saved.sort();
    assert_eq!(removed, saved);

    let (_, listing) = app.send_json(admin_get("/api/news")).await;
    assert_eq!(listing["pagination"]["total"], 0);
}

/// ids must be a non-empty array of integers.
#[tokio::test]
async fn bulk_rejects_malformed_ids() {
    let app = spawn_app().await;

    for ids in [json!([]), json!(["1", "2"]), json!([1.5]), json!("1,2"), json!(null)] {
        let resp = app
            .send(admin_json(
                Method::POST,
                "/api/news/bulk",
                json!({ "action": "delete", "ids": ids }),
            ))
            .await;
        assert_error_response(
            resp,
            StatusCode::BAD_REQUEST,
            "ids must be a non-empty array of integers",
        )
        .await;
    }
}

/// Unknown actions and missing statuses are validation errors.
#[tokio::test]
async fn bulk_rejects_bad_action_or_status() {
    let app = spawn_app().await;

    let resp = app
        .send(admin_json(
            Method::POST,
            "/api/news/bulk",
            json!({ "action": "purge", "ids": [1] }),
        ))
        .await;
    assert_error_response(
        resp,
        StatusCode::BAD_REQUEST,
        "action must be one of: updateStatus, delete",
    )
    .await;

    let resp = app
        .send(admin_json(
            Method::POST,
            "/api/news/bulk",
            json!({ "action": "updateStatus", "ids": [1], "status": "hidden" }),
        ))
        .await;
    assert_error_response(
        resp,
        StatusCode::BAD_REQUEST,
        "Invalid status. Must be one of: draft, published, archived",
    )
    .await;
}
