//! Association-set reconciliation.
//!
//! A parent entity (quiz, content column) owns a set of join rows to
//! topics. Edits submit the full desired child-id list; reconciliation
//! computes the minimal adds/removes that make the stored set equal the
//! request. Unchanged rows are left alone, so concurrent readers never see
//! a transient empty set and lock time stays short.
//!
//! The plan is pure; the `db` crate applies it inside a transaction that
//! holds the parent row `FOR UPDATE` and has already validated that every
//! requested child exists.

use std::collections::HashSet;

use crate::types::DbId;

/// The minimal mutation set that turns `current` into `requested`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilePlan {
    /// Child ids whose join rows must be deleted.
    pub to_remove: Vec<DbId>,
    /// Child ids needing a new join row, in submission order.
    pub to_insert: Vec<DbId>,
}

impl ReconcilePlan {
    /// Whether the plan mutates anything.
    pub fn is_noop(&self) -> bool {
        self.to_remove.is_empty() && self.to_insert.is_empty()
    }
}

/// De-duplicate a submitted child-id list, first occurrence wins.
pub fn dedup_preserving_order(requested: &[DbId]) -> Vec<DbId> {
    let mut seen = HashSet::new();
    requested
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Plan the adds and removes that reconcile `current` against `requested`.
///
/// `requested` may contain duplicates; they collapse to the first
/// occurrence. An empty request plans the removal of every current row
/// (the "clear all" operation). Planning twice with the same request
/// against the resulting set yields a no-op.
pub fn plan(current: &[DbId], requested: &[DbId]) -> ReconcilePlan {
    let desired = dedup_preserving_order(requested);
    let desired_set: HashSet<DbId> = desired.iter().copied().collect();
    let current_set: HashSet<DbId> = current.iter().copied().collect();

    let to_remove = current
        .iter()
        .copied()
        .filter(|id| !desired_set.contains(id))
        .collect();
    let to_insert = desired
        .iter()
        .copied()
        .filter(|id| !current_set.contains(id))
        .collect();

    ReconcilePlan {
        to_remove,
        to_insert,
    }
}
