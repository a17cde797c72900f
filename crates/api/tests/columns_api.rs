//! End-to-end tests for the `/admin/columns` resource and its topic set.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{body_json, build_test_app, get, post_json, put_json};

async fn seed_topics(pool: &PgPool, count: usize) -> Vec<i64> {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/admin/categories", json!({ "name": "투자" })).await;
    let category = body_json(response).await["data"]["id"].as_i64().unwrap();

    let mut ids = Vec::with_capacity(count);
    for n in 0..count {
        let app = build_test_app(pool.clone());
        let response = post_json(
            app,
            "/admin/topics",
            json!({ "category_id": category, "title": format!("토픽 {n}") }),
        )
        .await;
        ids.push(body_json(response).await["data"]["id"].as_i64().unwrap());
    }
    ids
}

fn topic_ids_of(json: &serde_json::Value) -> Vec<i64> {
    json["data"]["topic_ids"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_defaults_to_visible_and_links_topics(pool: PgPool) {
    let topics = seed_topics(&pool, 2).await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/admin/columns",
        json!({
            "title": "금리와 채권",
            "summary": "금리와 채권 가격은 반대로 움직입니다.",
            "content": "<p>본문</p>",
            "background_url": "http://cdn.test/images/bonds.png",
            "topic_ids": topics
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["visibility"], "Y");
    assert_eq!(
        json["data"]["background_url"],
        "http://cdn.test/images/bonds.png"
    );
    assert_eq!(topic_ids_of(&json), topics);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_dedupes_repeated_topic_ids(pool: PgPool) {
    let topics = seed_topics(&pool, 1).await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/admin/columns",
        json!({
            "title": "중복 토픽",
            "topic_ids": [topics[0], topics[0], topics[0]]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(topic_ids_of(&json), vec![topics[0]]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_visibility_flag_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/admin/columns",
        json!({ "title": "금리와 채권", "visibility": "X" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_reconciles_the_topic_set(pool: PgPool) {
    let topics = seed_topics(&pool, 3).await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/admin/columns",
        json!({ "title": "금리와 채권", "topic_ids": [topics[0], topics[1]] }),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/admin/columns/{id}"),
        json!({ "topic_ids": [topics[1], topics[2]] }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(topic_ids_of(&json), vec![topics[1], topics[2]]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_topic_aborts_the_update(pool: PgPool) {
    let topics = seed_topics(&pool, 1).await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/admin/columns",
        json!({ "title": "금리와 채권", "topic_ids": topics }),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/admin/columns/{id}"),
        json!({ "title": "새 제목", "topic_ids": [9999] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Neither the title nor the topic set changed.
    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/admin/columns/{id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "금리와 채권");
    assert_eq!(topic_ids_of(&json), topics);
}
