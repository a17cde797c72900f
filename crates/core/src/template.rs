//! Prompt template filling.
//!
//! Stored templates carry named `{placeholder}` tokens that are replaced
//! by exact substring match -- no regex semantics apply to the bindings,
//! and unknown placeholders are left verbatim. Filling never fails; the
//! caller can ask [`unfilled`] which tokens survived and decide whether
//! that deserves a warning.

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder replaced by the category display name.
pub const PLACEHOLDER_CATEGORY: &str = "{category}";
/// Placeholder replaced by the topic title.
pub const PLACEHOLDER_TOPIC: &str = "{topic}";
/// Placeholder replaced by the audience type name.
pub const PLACEHOLDER_AUDIENCE: &str = "{audience}";

/// The standard placeholders a stored template may use, with the domain
/// field each one stands for. Exposed so the admin UI can render a legend.
pub const STANDARD_PLACEHOLDERS: &[(&str, &str)] = &[
    ("category", PLACEHOLDER_CATEGORY),
    ("topic", PLACEHOLDER_TOPIC),
    ("audience", PLACEHOLDER_AUDIENCE),
];

/// Matches any `{placeholder}` token left in a filled prompt.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[a-zA-Z_][a-zA-Z0-9_]*\}").expect("valid regex"));

/// Values bound to the standard placeholders for one generation request.
#[derive(Debug, Clone)]
pub struct PromptBindings<'a> {
    pub category_name: &'a str,
    pub topic_title: &'a str,
    pub audience_name: &'a str,
}

/// Fill a template by exact-substring replacement of the given bindings.
///
/// Bindings are `(placeholder, value)` pairs. Placeholders absent from the
/// template are ignored; placeholders present in the template but not in
/// the bindings are left in place.
pub fn fill(template: &str, bindings: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (placeholder, value) in bindings {
        result = result.replace(placeholder, value);
    }
    result
}

/// Fill a template with the three standard taxonomy bindings.
pub fn fill_standard(template: &str, bindings: &PromptBindings<'_>) -> String {
    fill(
        template,
        &[
            (PLACEHOLDER_CATEGORY, bindings.category_name),
            (PLACEHOLDER_TOPIC, bindings.topic_title),
            (PLACEHOLDER_AUDIENCE, bindings.audience_name),
        ],
    )
}

/// Collect placeholder tokens that survived filling.
///
/// Returns each distinct leftover token (with braces) in first-occurrence
/// order. A non-empty result usually means the stored template references
/// a placeholder the pipeline does not bind.
pub fn unfilled(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for m in PLACEHOLDER_RE.find_iter(text) {
        let token = m.as_str().to_string();
        if !seen.contains(&token) {
            seen.push(token);
        }
    }
    seen
}
