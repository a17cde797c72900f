//! Per-audience answer upsert planning.
//!
//! A topic edit carries a batch of answer entries, each with an optional
//! row id. The presence or absence of the id decides create-vs-update, and
//! that decision is made once, here at the boundary, by converting every
//! entry into a tagged [`AnswerChange`] variant before any row is touched.
//!
//! Unlike association reconciliation this is a merge, not a replace: rows
//! not named in the batch are left untouched. The asymmetry is intentional
//! -- associations are a closed set, answers are extended incrementally.

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;
use crate::visibility::validate_visibility;

/// One client-submitted answer entry inside a topic edit.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerEntry {
    /// Row id of an existing answer; absent for new rows.
    pub answer_id: Option<DbId>,
    pub audience_type_id: DbId,
    pub content: String,
    pub visibility: String,
}

/// A validated, tagged mutation derived from one [`AnswerEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerChange {
    /// Create a new answer row for `(topic, audience_type_id)`.
    Insert {
        audience_type_id: DbId,
        content: String,
        visibility: String,
    },
    /// Update an existing row in place.
    Update {
        answer_id: DbId,
        audience_type_id: DbId,
        content: String,
        visibility: String,
    },
}

/// How to handle an `Update` whose target row no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingTargetPolicy {
    /// Silently skip the entry (the long-standing default behaviour;
    /// callers should log a warning when it fires).
    #[default]
    Skip,
    /// Fail the whole batch with `NotFound`.
    Fail,
}

/// Validate a batch of entries and convert them into tagged changes.
///
/// Every entry's visibility flag is checked up front: one bad flag fails
/// the entire batch before any mutation is planned.
pub fn plan_changes(entries: &[AnswerEntry]) -> Result<Vec<AnswerChange>, CoreError> {
    for entry in entries {
        validate_visibility(&entry.visibility)?;
    }

    Ok(entries
        .iter()
        .map(|entry| match entry.answer_id {
            Some(answer_id) => AnswerChange::Update {
                answer_id,
                audience_type_id: entry.audience_type_id,
                content: entry.content.clone(),
                visibility: entry.visibility.clone(),
            },
            None => AnswerChange::Insert {
                audience_type_id: entry.audience_type_id,
                content: entry.content.clone(),
                visibility: entry.visibility.clone(),
            },
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn entry(answer_id: Option<DbId>, visibility: &str) -> AnswerEntry {
        AnswerEntry {
            answer_id,
            audience_type_id: 7,
            content: "ETF는 상장지수펀드입니다.".to_string(),
            visibility: visibility.to_string(),
        }
    }

    #[test]
    fn entry_without_id_becomes_insert() {
        let changes = plan_changes(&[entry(None, "Y")]).unwrap();
        assert_matches!(
            changes.as_slice(),
            [AnswerChange::Insert {
                audience_type_id: 7,
                ..
            }]
        );
    }

    #[test]
    fn entry_with_id_becomes_update() {
        let changes = plan_changes(&[entry(Some(42), "N")]).unwrap();
        assert_matches!(changes.as_slice(), [AnswerChange::Update { answer_id: 42, .. }]);
    }

    #[test]
    fn mixed_batch_preserves_order() {
        let changes = plan_changes(&[entry(None, "Y"), entry(Some(3), "Y")]).unwrap();
        assert_eq!(changes.len(), 2);
        assert_matches!(&changes[0], AnswerChange::Insert { .. });
        assert_matches!(&changes[1], AnswerChange::Update { answer_id: 3, .. });
    }

    #[test]
    fn one_bad_visibility_fails_whole_batch() {
        let err = plan_changes(&[entry(None, "Y"), entry(Some(3), "maybe")]).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn empty_batch_plans_nothing() {
        assert!(plan_changes(&[]).unwrap().is_empty());
    }

    #[test]
    fn default_missing_target_policy_is_skip() {
        assert_eq!(MissingTargetPolicy::default(), MissingTargetPolicy::Skip);
    }
}
