//! Absolute URL construction for meta tags.

/// Join a base URL and a path.
///
/// Returns an empty string when either side is empty, so a site without a
/// configured url (or a page without a path) yields an empty tag value
/// instead of a half-built URL.
///
/// # Examples
/// ```ignore
/// construct_url("https://parlandim.dev", "/posts/a") // → "https://parlandim.dev/posts/a"
/// construct_url("", "/posts/a")                      // → ""
/// construct_url("https://parlandim.dev", "")         // → ""
/// ```
pub fn construct_url(base: &str, path: &str) -> String {
    if base.is_empty() || path.is_empty() {
        return String::new();
    }
    format!("{base}{path}")
}
