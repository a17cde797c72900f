//! Pure domain logic for the finlit content backend.
//!
//! Everything in this crate is synchronous and side-effect free: position
//! and association planning, answer-batch planning, prompt template
//! filling, reply extraction, and the shared error/type vocabulary. The
//! db and api crates depend on these functions; nothing here touches a
//! socket or a connection pool.

pub mod answers;
pub mod error;
pub mod extract;
pub mod generation;
pub mod media;
pub mod ordering;
pub mod quiz;
pub mod reconcile;
pub mod template;
pub mod types;
pub mod visibility;
