use super::*;

#[test]
fn bracket_link() {
    html(
        "[x](http://example.com/)",
        "<p><a href=\"http://example.com/\">http://example.com/</a></p>",
    );
}

#[test]
fn bracket_link_with_title() {
    html(
        "[x](http://e.co/ A title)",
        "<p><a href=\"http://e.co/\" title=\"A title\">http://e.co/</a></p>",
    );
}

#[test]
fn autolink() {
    html(
        "<http://example.com/>",
        "<p><a href=\"http://example.com/\">http://example.com/</a></p>",
    );
}

#[test]
fn autolink_email_gets_a_mailto() {
    html(
        "<user@example.com>",
        "<p><a href=\"mailto:user@example.com\">user@example.com</a></p>",
    );
}

#[test]
fn target_is_percent_normalized() {
    html(
        "[x](http://e.co/\u{fc})",
        "<p><a href=\"http://e.co/%C3%BC\">http://e.co/\u{fc}</a></p>",
    );
}

#[test]
fn double_quote_in_target_is_an_error() {
    error_with(
        "[x](http://e.co/\"a)",
        CompileError::UrlCannotContainDoubleQuote,
        &Options::default(),
    );
}

#[test]
fn malformed_links_stay_literal() {
    html("[x", "<p>[x</p>");
    html("[x] y", "<p>[x] y</p>");
}

#[test]
fn links_can_be_disabled() {
    html_opts!([enable_links = false], "[x](u)", "<p>[x](u)</p>");
    html_opts!([enable_links = false], "a < b", "<p>a &lt; b</p>");
}
