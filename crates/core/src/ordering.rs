//! Manual ordering of siblings within a scope.
//!
//! Positions are dense integers starting at 1, unique within their scope
//! (all categories, or the topics of one category). They need not stay
//! contiguous after deletions; new nodes always append at `max + 1`.
//!
//! Reorder requests arrive as an `{id: position}` map. The map is applied
//! as a single batch: each pair updates exactly one node, siblings are
//! never renumbered, and a failure on any pair aborts the whole batch.
//! A `BTreeMap` keeps application order deterministic (ascending by id).

use std::collections::BTreeMap;

use crate::error::CoreError;
use crate::types::DbId;

/// A batch of `{node id -> new position}` assignments.
pub type ReorderBatch = BTreeMap<DbId, i64>;

/// Compute the position for a node appended to a scope.
///
/// `current_max` is the highest position currently in the scope, or `None`
/// for an empty scope. The caller must read it under the same lock that
/// covers the subsequent insert, so concurrent appends cannot observe the
/// same maximum.
pub fn next_position(current_max: Option<i64>) -> i64 {
    current_max.unwrap_or(0) + 1
}

/// Validate a reorder batch before any position is written.
///
/// Positions must be >= 1. An empty batch is a valid no-op.
pub fn validate_reorder_batch(batch: &ReorderBatch) -> Result<(), CoreError> {
    for (&id, &position) in batch {
        if position < 1 {
            return Err(CoreError::Validation(format!(
                "Position for id {id} must be >= 1, got {position}"
            )));
        }
    }
    Ok(())
}
