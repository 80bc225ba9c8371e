//! File-name suffix extraction and case-folding helpers.
//!
//! Suffixes are the portion of a file name after the last dot, without the
//! dot itself, and compare case-insensitively throughout the crate.

/// Returns the suffix of a file name: the substring strictly after the
/// last `.`, without the dot.
///
/// Returns `None` when the name contains no dot, or when the dot is the
/// final character (empty suffix).
///
/// # Examples
///
/// ```
/// use mime_db::suffix::suffix_of;
///
/// assert_eq!(suffix_of("photo.png"), Some("png"));
/// assert_eq!(suffix_of("archive.tar.gz"), Some("gz"));
/// assert_eq!(suffix_of("noextension"), None);
/// assert_eq!(suffix_of("trailing."), None);
/// ```
pub fn suffix_of(file_name: &str) -> Option<&str> {
    match file_name.rfind('.') {
        Some(idx) if idx + 1 < file_name.len() => Some(&file_name[idx + 1..]),
        _ => None,
    }
}

/// Lowercases a suffix or MIME type for use as a lookup key.
///
/// Optimistically assumes a short ASCII identifier and stays on the cheap
/// ASCII path in that case.
pub(crate) fn fold_key(s: &str) -> String {
    if s.is_ascii() {
        // Fast path: ASCII-only identifier
        s.to_ascii_lowercase()
    } else {
        // Slow path: handle UTF-8
        s.to_lowercase()
    }
}

/// Reports whether `s` starts with `prefix`, compared case-insensitively.
pub(crate) fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_of() {
        assert_eq!(suffix_of("test.mp4"), Some("mp4"));
        assert_eq!(suffix_of("archive.tar.gz"), Some("gz"));
        assert_eq!(suffix_of(".hidden"), Some("hidden"));
        assert_eq!(suffix_of("a.b.c"), Some("c"));

        assert_eq!(suffix_of("noextension"), None);
        assert_eq!(suffix_of("trailing."), None);
        assert_eq!(suffix_of(""), None);
        assert_eq!(suffix_of("."), None);
    }

    #[test]
    fn test_fold_key() {
        assert_eq!(fold_key("MP4"), "mp4");
        assert_eq!(fold_key("Video/MP4"), "video/mp4");
        assert_eq!(fold_key("already-lower"), "already-lower");
        // Non-ASCII falls through to full Unicode lowercasing
        assert_eq!(fold_key("ÄBC"), "äbc");
    }

    #[test]
    fn test_starts_with_ignore_case() {
        assert!(starts_with_ignore_case("video/mp4", "video/"));
        assert!(starts_with_ignore_case("VIDEO/MP4", "video/"));
        assert!(!starts_with_ignore_case("audio/mp4", "video/"));
        assert!(!starts_with_ignore_case("vid", "video/"));
    }
}
