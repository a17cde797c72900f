//! Integration tests for category and topic CRUD, topic re-homing, and the
//! prompt and generation-log stores.

use assert_matches::assert_matches;
use sqlx::PgPool;

use finlit_core::answers::MissingTargetPolicy;
use finlit_core::error::CoreError;
use finlit_core::generation::GenerationScope;
use finlit_db::models::category::{CreateCategory, TopicMove, UpdateCategory};
use finlit_db::models::topic::{CreateTopic, UpdateTopic};
use finlit_db::repositories::{
    CategoryRepo, GenerationLogRepo, PromptRepo, TopicRepo,
};
use finlit_db::DbError;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_category(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        thumbnail_path: Some("thumbs/cat.png".to_string()),
        created_by: Some("admin".to_string()),
    }
}

fn new_topic(category_id: i64, title: &str) -> CreateTopic {
    CreateTopic {
        category_id,
        title: title.to_string(),
        definition: Some("A definition.".to_string()),
        summary: None,
        thumbnail_path: None,
        created_by: None,
    }
}

// ---------------------------------------------------------------------------
// Test: modify coalesces absent fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_category_modify_keeps_absent_fields(pool: PgPool) {
    let created = CategoryRepo::create(&pool, &new_category("Savings"))
        .await
        .unwrap();

    let updated = CategoryRepo::modify(
        &pool,
        created.id,
        &UpdateCategory {
            name: Some("Savings & Deposits".to_string()),
            thumbnail_path: None,
            visibility: None,
        },
        &[],
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Savings & Deposits");
    assert_eq!(
        updated.thumbnail_path.as_deref(),
        Some("thumbs/cat.png"),
        "fields absent from the request must keep their stored value"
    );
    assert_eq!(updated.visibility, "Y");
}

// ---------------------------------------------------------------------------
// Test: category edit re-homes the listed topics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_category_modify_moves_topics(pool: PgPool) {
    let savings = CategoryRepo::create(&pool, &new_category("Savings"))
        .await
        .unwrap();
    let credit = CategoryRepo::create(&pool, &new_category("Credit"))
        .await
        .unwrap();
    let topic = TopicRepo::create(&pool, &new_topic(savings.id, "Interest"))
        .await
        .unwrap();

    CategoryRepo::modify(
        &pool,
        savings.id,
        &UpdateCategory {
            name: None,
            thumbnail_path: None,
            visibility: None,
        },
        &[TopicMove {
            topic_id: topic.id,
            category_id: credit.id,
        }],
    )
    .await
    .unwrap();

    let moved = TopicRepo::find_by_id(&pool, topic.id).await.unwrap().unwrap();
    assert_eq!(moved.category_id, credit.id);
}

// ---------------------------------------------------------------------------
// Test: a move into a non-empty category appends at the end of its order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_category_move_into_nonempty_category_appends(pool: PgPool) {
    let savings = CategoryRepo::create(&pool, &new_category("Savings"))
        .await
        .unwrap();
    let credit = CategoryRepo::create(&pool, &new_category("Credit"))
        .await
        .unwrap();
    // Both categories hold a topic at position 1.
    let moving = TopicRepo::create(&pool, &new_topic(savings.id, "Interest"))
        .await
        .unwrap();
    let resident = TopicRepo::create(&pool, &new_topic(credit.id, "Credit Score"))
        .await
        .unwrap();

    CategoryRepo::modify(
        &pool,
        savings.id,
        &UpdateCategory {
            name: None,
            thumbnail_path: None,
            visibility: None,
        },
        &[TopicMove {
            topic_id: moving.id,
            category_id: credit.id,
        }],
    )
    .await
    .unwrap();

    let moved = TopicRepo::find_by_id(&pool, moving.id).await.unwrap().unwrap();
    assert_eq!(moved.category_id, credit.id);
    assert_eq!(
        moved.position, 2,
        "the moved topic must append after the target's existing order"
    );

    let kept = TopicRepo::find_by_id(&pool, resident.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(kept.position, 1, "resident topics keep their positions");
}

// ---------------------------------------------------------------------------
// Test: a topic edit changing categories appends in the target's order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_topic_modify_category_change_appends(pool: PgPool) {
    let savings = CategoryRepo::create(&pool, &new_category("Savings"))
        .await
        .unwrap();
    let credit = CategoryRepo::create(&pool, &new_category("Credit"))
        .await
        .unwrap();
    let moving = TopicRepo::create(&pool, &new_topic(savings.id, "Interest"))
        .await
        .unwrap();
    TopicRepo::create(&pool, &new_topic(credit.id, "Credit Score"))
        .await
        .unwrap();

    let updated = TopicRepo::modify(
        &pool,
        moving.id,
        &UpdateTopic {
            category_id: Some(credit.id),
            title: None,
            definition: None,
            summary: None,
            thumbnail_path: None,
            visibility: None,
        },
        &[],
        MissingTargetPolicy::Skip,
        None,
    )
    .await
    .unwrap();

    assert_eq!(updated.category_id, credit.id);
    assert_eq!(updated.position, 2, "re-homing appends in the target order");
}

// ---------------------------------------------------------------------------
// Test: a move to an unknown category rolls back the whole edit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_category_modify_bad_move_rolls_back(pool: PgPool) {
    let savings = CategoryRepo::create(&pool, &new_category("Savings"))
        .await
        .unwrap();
    let topic = TopicRepo::create(&pool, &new_topic(savings.id, "Interest"))
        .await
        .unwrap();

    let err = CategoryRepo::modify(
        &pool,
        savings.id,
        &UpdateCategory {
            name: Some("Renamed".to_string()),
            thumbnail_path: None,
            visibility: None,
        },
        &[TopicMove {
            topic_id: topic.id,
            category_id: savings.id + 99,
        }],
    )
    .await
    .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::NotFound { .. }));

    let reread = CategoryRepo::find_by_id(&pool, savings.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reread.name, "Savings", "the rename must roll back too");
}

// ---------------------------------------------------------------------------
// Test: topic create under an unknown category fails
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_topic_create_unknown_category(pool: PgPool) {
    let err = TopicRepo::create(&pool, &new_topic(9999, "Orphan"))
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::NotFound { .. }));
}

// ---------------------------------------------------------------------------
// Test: visibility filter on list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_category_list_visibility_filter(pool: PgPool) {
    let shown = CategoryRepo::create(&pool, &new_category("Shown"))
        .await
        .unwrap();
    let hidden = CategoryRepo::create(&pool, &new_category("Hidden"))
        .await
        .unwrap();
    CategoryRepo::modify(
        &pool,
        hidden.id,
        &UpdateCategory {
            name: None,
            thumbnail_path: None,
            visibility: Some("N".to_string()),
        },
        &[],
    )
    .await
    .unwrap();

    let visible = CategoryRepo::list(&pool, Some("Y")).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, shown.id);

    let all = CategoryRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: prompt store is append-only, latest wins
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_prompt_latest_wins(pool: PgPool) {
    assert!(PromptRepo::latest(&pool).await.unwrap().is_none());

    PromptRepo::append(&pool, "v1 {topic}", Some("admin"))
        .await
        .unwrap();
    PromptRepo::append(&pool, "v2 {topic} {audience}", Some("admin"))
        .await
        .unwrap();

    let latest = PromptRepo::latest(&pool).await.unwrap().unwrap();
    assert_eq!(latest.template, "v2 {topic} {audience}");

    let history = PromptRepo::history(&pool).await.unwrap();
    assert_eq!(history.len(), 2, "earlier versions stay readable");
}

// ---------------------------------------------------------------------------
// Test: generation log accepts ids with no referent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_generation_log_has_no_fks(pool: PgPool) {
    // Ids that point at nothing; the log still records them.
    let scope = GenerationScope::topic_audience(1, 12345, 678);
    let id = GenerationLogRepo::record(&pool, &scope, "prompt text", "reply text", Some("admin"))
        .await
        .unwrap();
    assert!(id > 0);

    let logs = GenerationLogRepo::list(&pool, Some(12345), None).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].reply, "reply text");
}
