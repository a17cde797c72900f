pub mod audience_types;
pub mod banners;
pub mod categories;
pub mod columns;
pub mod generation_logs;
pub mod health;
pub mod ordering;
pub mod prompts;
pub mod quizzes;
pub mod topics;

use axum::Router;

use crate::state::AppState;

/// Build the `/admin` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                          list, create
/// /categories/{id}                     get, update
///
/// /topics                              list, create
/// /topics/{id}                         get, update (fields + answer batch)
/// /topics/{id}/answer-generation       draft per-audience explanation (POST)
/// /topics/{id}/summary-generation      draft one-sentence summary (POST)
///
/// /audience-types                      list, create
/// /audience-types/{id}                 get, update
///
/// /quizzes                             create
/// /quizzes/monthly                     monthly list (?year, month)
/// /quizzes/daily                       daily detail (?date)
/// /quizzes/{id}                        get, update (fields + topic set)
///
/// /columns                             list, create
/// /columns/{id}                        get, update (fields + topic set)
/// /columns/content-generation          draft journal body (POST)
/// /columns/summary-generation          draft one-sentence summary (POST)
///
/// /banners                             list, create
/// /banners/{id}                        get, update, delete
///
/// /prompt-template                     get current + legend, append new
///
/// /generation-logs                     filtered list (?topic_id, audience_type_id)
///
/// /ordering/categories                 batch reorder (PUT)
/// /ordering/topics                     batch reorder (PUT)
/// ```
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/topics", topics::router())
        .nest("/audience-types", audience_types::router())
        .nest("/quizzes", quizzes::router())
        .nest("/columns", columns::router())
        .nest("/banners", banners::router())
        .nest("/prompt-template", prompts::router())
        .nest("/generation-logs", generation_logs::router())
        .nest("/ordering", ordering::router())
}
