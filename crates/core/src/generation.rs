//! Generation pipeline types and built-in prompts.
//!
//! A generation request moves through: Requested -> Prompted ->
//! ReplyReceived -> {Extracted | ExtractionFailed} -> Logged. The audit log
//! is written in every case; only the caller's downstream persistence step
//! treats a failed extraction as an error. [`GenerationOutcome`] captures
//! the post-reply half of that lifecycle.

use serde::Serialize;

use crate::extract;
use crate::types::DbId;

/// Taxonomy coordinates of one generation request, copied into the audit
/// log at write time (no foreign keys -- log rows outlive their entities).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerationScope {
    pub category_id: Option<DbId>,
    pub topic_id: Option<DbId>,
    pub audience_type_id: Option<DbId>,
}

impl GenerationScope {
    /// Scope for a per-audience explanation of a topic.
    pub fn topic_audience(category_id: DbId, topic_id: DbId, audience_type_id: DbId) -> Self {
        Self {
            category_id: Some(category_id),
            topic_id: Some(topic_id),
            audience_type_id: Some(audience_type_id),
        }
    }

    /// Scope for a topic-level summary (no audience).
    pub fn topic(topic_id: DbId) -> Self {
        Self {
            category_id: None,
            topic_id: Some(topic_id),
            audience_type_id: None,
        }
    }

    /// Scope for column generation, which is not tied to the taxonomy.
    pub fn unscoped() -> Self {
        Self {
            category_id: None,
            topic_id: None,
            audience_type_id: None,
        }
    }
}

/// The filled prompt, the raw reply, and the extraction result for one
/// generation request.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub prompt: String,
    pub reply: String,
    /// `Some` when the expected prefix was found in the reply.
    pub extracted: Option<String>,
}

impl GenerationOutcome {
    /// Build an outcome by extracting `prefix` from `reply`.
    pub fn from_reply(prompt: String, reply: String, prefix: &str) -> Self {
        let extracted = extract::extract(&reply, prefix);
        Self {
            prompt,
            reply,
            extracted,
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in prompts
// ---------------------------------------------------------------------------

/// Prompt asking for a one-sentence summary of a topic, with the reply
/// format contract the extractor depends on.
pub fn topic_summary_prompt(topic_title: &str) -> String {
    format!(
        "{topic_title}을 한 문장으로 요약해줘. \n\
         아래 답변 형식을 꼭 지켜서 답변해줘. \n\
         [답변형식]\n\
         [요약] : "
    )
}

/// Prompt asking for a one-page financial journal on `subject`, returned
/// as HTML.
pub fn column_content_prompt(subject: &str) -> String {
    format!(
        "{subject}에 대해서 한 페이지 정도 분량의 저널을 작성해줘. \n\
         너가 가진 금융지식을 이용해서 분석적으로 작성해줘. \n\
         소제목은 굵게 처리해주면 좋겠어 \n\
         답변 형식은 html 코드 형식으로 반환해줘"
    )
}

/// Prompt asking for a one-sentence summary of a column subject.
pub fn column_summary_prompt(subject: &str) -> String {
    format!(
        "{subject}을 한 문장으로 요약해줘. \n\
         아래 답변 형식을 꼭 지켜서 답변해줘. \n\
         [답변형식]\n\
         [요약] : "
    )
}
