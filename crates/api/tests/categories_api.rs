//! End-to-end tests for the `/admin/categories` resource.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{body_json, build_test_app, get, post_json, put_json};

async fn create_category(pool: &PgPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/admin/categories", json!({ "name": name })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn create_topic(pool: &PgPool, category_id: i64, title: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/admin/topics",
        json!({ "category_id": category_id, "title": title }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_returns_row_with_public_thumbnail_url(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/admin/categories",
        json!({
            "name": "저축",
            "thumbnail_url": "http://cdn.test/images/savings.png"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "저축");
    // Stored as a path, served back joined onto the CDN base.
    assert_eq!(
        json["data"]["thumbnail_url"],
        "http://cdn.test/images/savings.png"
    );
    assert_eq!(json["data"]["position"], 1);
    assert_eq!(json["data"]["visibility"], "Y");
    assert_eq!(json["data"]["created_by"], "test-admin");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_appends_to_the_manual_order(pool: PgPool) {
    create_category(&pool, "저축").await;
    create_category(&pool, "투자").await;

    let app = build_test_app(pool.clone());
    let response = post_json(app, "/admin/categories", json!({ "name": "대출" })).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["position"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_name_is_rejected_as_conflict(pool: PgPool) {
    create_category(&pool, "저축").await;

    let app = build_test_app(pool.clone());
    let response = post_json(app, "/admin/categories", json!({ "name": "저축" })).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_unknown_id_returns_not_found(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = get(app, "/admin/categories/9999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_by_visibility(pool: PgPool) {
    let visible = create_category(&pool, "저축").await;
    let hidden = create_category(&pool, "투자").await;

    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/admin/categories/{hidden}"),
        json!({ "visibility": "N" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = build_test_app(pool.clone());
    let response = get(app, "/admin/categories?visibility=Y").await;
    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"].as_i64(), Some(visible));
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_leaves_absent_fields_untouched(pool: PgPool) {
    let id = create_category(&pool, "저축").await;

    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/admin/categories/{id}"),
        json!({ "name": "저축과 예금" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "저축과 예금");
    assert_eq!(json["data"]["visibility"], "Y");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_re_homes_listed_topics(pool: PgPool) {
    let source = create_category(&pool, "저축").await;
    let target = create_category(&pool, "투자").await;
    let topic = create_topic(&pool, source, "적금이란?").await;
    // The target already holds a topic at position 1.
    create_topic(&pool, target, "ETF란?").await;

    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/admin/categories/{source}"),
        json!({
            "topic_moves": [{ "topic_id": topic, "category_id": target }]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/admin/topics/{topic}")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["category_id"].as_i64(), Some(target));
    assert_eq!(
        json["data"]["position"], 2,
        "a moved topic appends after the target's existing topics"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_visibility_flag_is_rejected_before_any_write(pool: PgPool) {
    let id = create_category(&pool, "저축").await;

    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/admin/categories/{id}"),
        json!({ "name": "새 이름", "visibility": "X" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/admin/categories/{id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "저축", "the edit must not apply");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn bad_topic_move_rolls_back_the_whole_edit(pool: PgPool) {
    let id = create_category(&pool, "저축").await;

    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/admin/categories/{id}"),
        json!({
            "name": "새 이름",
            "topic_moves": [{ "topic_id": 9999, "category_id": id }]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The rename must not have been committed.
    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/admin/categories/{id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "저축");
}
