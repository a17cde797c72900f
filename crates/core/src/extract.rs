//! Structured extraction from raw generation replies.
//!
//! The generation service is instructed to mark its payload with a fixed
//! literal prefix (`"[설명] : "` for per-audience explanations, `"[요약] : "`
//! for one-sentence summaries). Extraction finds the first occurrence of
//! the prefix and returns the trimmed remainder; there is no fuzzy
//! matching. On a miss the caller keeps the raw reply for diagnostics.

/// Prefix marking a per-audience explanation in a reply.
pub const ANSWER_PREFIX: &str = "[설명] : ";
/// Prefix marking a one-sentence summary in a reply.
pub const SUMMARY_PREFIX: &str = "[요약] : ";

/// Extract the trimmed content after the first occurrence of `prefix`.
///
/// Returns `None` when the prefix does not occur.
pub fn extract(reply: &str, prefix: &str) -> Option<String> {
    reply
        .find(prefix)
        .map(|start| reply[start + prefix.len()..].trim().to_string())
}

/// Strip a surrounding markdown code fence from generated HTML.
///
/// Column bodies come back wrapped in ```` ```html ... ``` ````; the stored
/// content is the inner document. Replies without a fence pass through
/// unchanged.
pub fn strip_html_fence(reply: &str) -> String {
    let trimmed = reply.trim();
    let without_open = trimmed
        .strip_prefix("```html")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let without_close = without_open.strip_suffix("```").unwrap_or(without_open);
    without_close.trim().to_string()
}
