//! Opaque image-path helpers.
//!
//! Object storage is an external collaborator: clients submit full public
//! URLs, the database stores only the path component, and reads join the
//! CDN base back on. The core never touches storage itself.

/// Extract the stored path from a public URL.
///
/// If `url` starts with `base_url`, the remainder (without a leading
/// slash) is returned; otherwise the input is already treated as a path
/// and passed through unchanged. `None`/empty inputs map to `None`.
pub fn path_from_url(base_url: &str, url: Option<&str>) -> Option<String> {
    let url = url?.trim();
    if url.is_empty() {
        return None;
    }
    let path = url
        .strip_prefix(base_url)
        .map(|rest| rest.trim_start_matches('/'))
        .unwrap_or(url);
    Some(path.to_string())
}

/// Join a stored path onto the CDN base URL for display.
pub fn public_url(base_url: &str, path: Option<&str>) -> Option<String> {
    let path = path?.trim();
    if path.is_empty() {
        return None;
    }
    Some(format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}
