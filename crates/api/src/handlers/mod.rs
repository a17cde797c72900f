//! HTTP handlers, one module per admin resource.

pub mod audience_types;
pub mod banners;
pub mod categories;
pub mod columns;
pub mod generation;
pub mod generation_logs;
pub mod ordering;
pub mod prompts;
pub mod quizzes;
pub mod topics;
