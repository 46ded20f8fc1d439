//! Filename derivation from URLs.
//!
//! The saved name of a download is the final path segment of its URL. Query
//! strings and fragments never contribute to the name, so
//! `https://h/images/a.jpg?size=large` saves as `a.jpg`.

use url::Url;

/// Derives the output filename from the final path segment of `url`.
///
/// The segment is percent-decoded; path separators and control characters
/// in the decoded text are replaced with `_` so the name can never escape
/// the output directory.
///
/// Returns `None` when the URL does not parse, has no path segments
/// (`mailto:`-style URLs), or its final segment is empty, `.` or `..`.
#[must_use]
pub fn filename_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let last = parsed.path_segments()?.next_back()?;
    if last.is_empty() {
        return None;
    }

    let decoded =
        urlencoding::decode(last).map_or_else(|_| last.to_string(), std::borrow::Cow::into_owned);
    let name = sanitize_filename(&decoded);

    match name.as_str() {
        "" | "." | ".." => None,
        _ => Some(name),
    }
}

pub(crate) fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_url_takes_last_segment() {
        assert_eq!(
            filename_from_url("https://example.com/images/image1.jpg").as_deref(),
            Some("image1.jpg")
        );
        assert_eq!(
            filename_from_url("http://example.com/a.png").as_deref(),
            Some("a.png")
        );
    }

    #[test]
    fn test_filename_from_url_ignores_query_and_fragment() {
        assert_eq!(
            filename_from_url("https://example.com/pics/cat.jpg?size=large#top").as_deref(),
            Some("cat.jpg")
        );
    }

    #[test]
    fn test_filename_from_url_decodes_percent_encoding() {
        assert_eq!(
            filename_from_url("https://example.com/pics/my%20cat.jpg").as_deref(),
            Some("my cat.jpg")
        );
    }

    #[test]
    fn test_filename_from_url_neutralizes_encoded_separators() {
        assert_eq!(
            filename_from_url("https://example.com/pics/..%2F..%2Fetc%2Fpasswd").as_deref(),
            Some(".._.._etc_passwd")
        );
        assert_eq!(
            filename_from_url("https://example.com/pics/a%5Cb.jpg").as_deref(),
            Some("a_b.jpg")
        );
    }

    #[test]
    fn test_filename_from_url_trailing_slash_has_no_name() {
        assert_eq!(filename_from_url("https://example.com/images/"), None);
        assert_eq!(filename_from_url("https://example.com"), None);
    }

    #[test]
    fn test_filename_from_url_rejects_dot_segments() {
        assert_eq!(filename_from_url("https://example.com/images/%2E%2E"), None);
        assert_eq!(filename_from_url("https://example.com/images/%2e"), None);
    }

    #[test]
    fn test_filename_from_url_invalid_url_has_no_name() {
        assert_eq!(filename_from_url("not a url"), None);
        assert_eq!(filename_from_url("mailto:someone@example.com"), None);
    }

    #[test]
    fn test_sanitize_filename_replaces_control_chars() {
        assert_eq!(sanitize_filename("a\u{0}b\nc.jpg"), "a_b_c.jpg");
        assert_eq!(sanitize_filename("plain.jpg"), "plain.jpg");
    }
}
