//! Byte-level helpers: HTML entity escaping, href percent-normalization and
//! the email shape check used for `mailto:` autolinking.

use once_cell::sync::Lazy;
use percent_encoding_rfc3986::{utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;

/// Characters percent-escaped inside `href`/`src` attribute values.  `%`
/// itself is escaped too, except where [`normalize_href`] recognizes an
/// already-encoded `%XX` triple and copies it through verbatim.
const HREF_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'%')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'\\')
    .add(b'^')
    .add(b'{')
    .add(b'}')
    .add(b'|');

/// RFC-5322-lite local-part/domain shape; anchored on both ends.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\
         (?:\\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

/// Escapes `& < > " '` into HTML entities.
pub fn escape_html(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    for &b in input {
        match b {
            b'&' => out.extend_from_slice(b"&amp;"),
            b'<' => out.extend_from_slice(b"&lt;"),
            b'>' => out.extend_from_slice(b"&gt;"),
            b'"' => out.extend_from_slice(b"&#34;"),
            b'\'' => out.extend_from_slice(b"&#39;"),
            _ => out.push(b),
        }
    }
    out
}

/// Percent-normalizes a link or image target for attribute emission.
///
/// Existing `%XX` escapes are preserved rather than double-encoded; a `%`
/// not followed by two hex digits is treated as a literal and escaped.
pub fn normalize_href(target: &str) -> String {
    let bytes = target.as_bytes();
    let mut out = String::with_capacity(target.len());
    let mut chunk = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
        {
            // `%` is ASCII, so slicing at it keeps both sides valid UTF-8.
            out.extend(utf8_percent_encode(&target[chunk..i], HREF_ESCAPE));
            out.push_str(&target[i..i + 3]);
            i += 3;
            chunk = i;
        } else {
            i += 1;
        }
    }
    out.extend(utf8_percent_encode(&target[chunk..], HREF_ESCAPE));
    out
}

/// True when `target` looks like a bare email address.
pub fn is_email(target: &str) -> bool {
    EMAIL_RE.is_match(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_covers_the_five_specials() {
        assert_eq!(
            escape_html(b"<a href=\"x\">&'</a>"),
            b"&lt;a href=&#34;x&#34;&gt;&amp;&#39;&lt;/a&gt;".to_vec(),
        );
    }

    #[test]
    fn normalize_href_escapes_spaces_and_keeps_existing_escapes() {
        assert_eq!(normalize_href("http://x/a b"), "http://x/a%20b");
        assert_eq!(normalize_href("http://x/a%20b"), "http://x/a%20b");
        assert_eq!(normalize_href("http://x/\u{fc}"), "http://x/%C3%BC");
    }

    #[test]
    fn normalize_href_escapes_stray_percent_signs() {
        assert_eq!(normalize_href("http://x/100%"), "http://x/100%25");
        assert_eq!(normalize_href("http://x/a%zzb"), "http://x/a%25zzb");
        assert_eq!(normalize_href("http://x/%20 %"), "http://x/%20%20%25");
    }

    #[test]
    fn email_shape() {
        assert!(is_email("user@example.com"));
        assert!(is_email("a.b+c@sub.example.org"));
        assert!(!is_email("not an email"));
        assert!(!is_email("user@"));
        assert!(!is_email("http://example.com"));
    }
}
