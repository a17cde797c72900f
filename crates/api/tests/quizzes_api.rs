//! End-to-end tests for the `/admin/quizzes` resource: calendar addressing
//! (monthly list, daily detail) and the reconciled topic set.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{body_json, build_test_app, get, post_json, put_json};

async fn seed_topics(pool: &PgPool, count: usize) -> Vec<i64> {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/admin/categories", json!({ "name": "저축" })).await;
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

async fn create_quiz(pool: &PgPool, date: &str, topic_ids: &[i64]) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/admin/quizzes",
        json!({
            "question": "적금은 언제든 해지할 수 있다?",
            "answer": "O",
            "comment": "중도 해지 시 약정 이율을 받지 못할 수 있습니다.",
            "target_date": date,
            "topic_ids": topic_ids
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_stores_quiz_with_topic_set(pool: PgPool) {
    let topics = seed_topics(&pool, 2).await;
    let id = create_quiz(&pool, "2026-09-01", &topics).await;

    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/admin/quizzes/{id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["question"], "적금은 언제든 해지할 수 있다?");
    let got: Vec<i64> = json["data"]["topic_ids"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect();
    assert_eq!(got, topics);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn taken_target_date_is_a_conflict(pool: PgPool) {
    create_quiz(&pool, "2026-09-01", &[]).await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/admin/quizzes",
        json!({
            "question": "다른 문제",
            "answer": "X",
            "target_date": "2026-09-01"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn answer_must_be_o_or_x(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/admin/quizzes",
        json!({
            "question": "문제",
            "answer": "maybe",
            "target_date": "2026-09-05"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // The date stays free after the rejected create.
    let app = build_test_app(pool.clone());
    let response = get(app, "/admin/quizzes/daily?date=2026-09-05").await;
    let json = body_json(response).await;
    assert!(json["data"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_topic_aborts_the_create(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/admin/quizzes",
        json!({
            "question": "문제",
            "answer": "O",
            "target_date": "2026-09-02",
            "topic_ids": [9999]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // No half-created quiz is left on the date.
    let app = build_test_app(pool.clone());
    let response = get(app, "/admin/quizzes/daily?date=2026-09-02").await;
    let json = body_json(response).await;
    assert!(json["data"].is_null());
}

// ---------------------------------------------------------------------------
// Calendar reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn monthly_list_is_bounded_by_the_month(pool: PgPool) {
    create_quiz(&pool, "2026-08-31", &[]).await;
    let september = create_quiz(&pool, "2026-09-15", &[]).await;
    create_quiz(&pool, "2026-10-01", &[]).await;

    let app = build_test_app(pool.clone());
    let response = get(app, "/admin/quizzes/monthly?year=2026&month=9").await;
    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"].as_i64(), Some(september));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_month_is_a_bad_request(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = get(app, "/admin/quizzes/monthly?year=2026&month=13").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn daily_detail_returns_null_for_an_empty_day(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = get(app, "/admin/quizzes/daily?date=2026-09-03").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"].is_null());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_reconciles_the_topic_set(pool: PgPool) {
    let topics = seed_topics(&pool, 3).await;
    let id = create_quiz(&pool, "2026-09-01", &topics[..2]).await;

    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/admin/quizzes/{id}"),
        json!({
            "target_date": "2026-09-01",
            "topic_ids": [topics[1], topics[2]]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let got: Vec<i64> = json["data"]["topic_ids"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect();
    assert_eq!(got, vec![topics[1], topics[2]]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn date_and_id_mismatch_is_rejected(pool: PgPool) {
    let id = create_quiz(&pool, "2026-09-01", &[]).await;
    create_quiz(&pool, "2026-09-02", &[]).await;

    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/admin/quizzes/{id}"),
        json!({
            "target_date": "2026-09-02",
            "question": "잘못된 날짜"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
