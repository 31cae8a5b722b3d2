/*!
 * Path handling helpers for vcfilters
 */

/// Strip the leading `.`/`..` prefix groups from an include path.
///
/// Removes a run of leading dots, then a single backslash, and repeats while
/// a leading dot remains, so `.\`, `..\..\` and even `....\` prefixes all
/// disappear one separator group at a time. A path consisting entirely of
/// dots and separators normalizes to the empty string.
pub fn normalize_include(path: &str) -> &str {
    let mut rest = path;
    loop {
        rest = rest.trim_start_matches('.');
        if let Some(stripped) = rest.strip_prefix('\\') {
            rest = stripped;
        }
        if !rest.starts_with('.') {
            return rest;
        }
    }
}

/// Derive the filter (virtual folder) name for an include path: the
/// normalized path's directory portion, or `None` when the path has no
/// separator left after normalization.
pub fn filter_name(include: &str) -> Option<&str> {
    let normalized = normalize_include(include);
    normalized.rfind('\\').map(|last| &normalized[..last])
}
