use super::*;
use pretty_assertions::assert_eq;

#[test]
fn basic() {
    html(
        "# Title\n\nHello *world*.\n",
        "<h1>Title</h1><p>Hello <em>world</em>.</p>",
    );
}

#[test]
fn paragraphs() {
    html("a\n\nb", "<p>a</p><p>b</p>");
}

#[test]
fn single_newline_is_a_line_break() {
    html("a\nb", "<p>a<br>b</p>");
}

#[test]
fn trailing_newline_emits_nothing() {
    html("Hello.\n", "<p>Hello.</p>");
}

#[test]
fn empty_input_still_wraps() {
    html("", "<p></p>");
}

#[test]
fn emphasis() {
    html("*a*", "<p><em>a</em></p>");
    html("_a_", "<p><em>a</em></p>");
    html("**a**", "<p><strong>a</strong></p>");
    html("__a__", "<p><strong>a</strong></p>");
    html("***a***", "<p><strong><em>a</em></strong></p>");
}

#[test]
fn unmatched_marker_degrades_to_text() {
    html("*x", "*x");
    html("a **b", "a **b");
}

#[test]
fn mark_tags_are_opt_in() {
    html("==x==", "<p>==x==</p>");
    html_opts!(
        [enable_mark_tags = true],
        "==x==",
        "<p><mark>x</mark></p>",
    );
}

#[test]
fn mark_markers_pair_after_adjacent_text() {
    html_opts!(
        [enable_mark_tags = true],
        "a==b==c",
        "<p>a<mark>b</mark>c</p>",
    );
}

#[test]
fn carriage_return_before_a_newline_is_dropped() {
    html("x\r\r\ny", "<p>x<br>y</p>");
}

#[test]
fn bare_carriage_return_erases_the_line_so_far() {
    html("ab\rc", "<p>c</p>");
}

#[test]
fn em_and_strong_can_be_disabled() {
    html_opts!([enable_em_tags = false], "*a*", "<p>*a*</p>");
    html_opts!([enable_strong_tags = false], "**a**", "<p>**a**</p>");
}

#[test]
fn paragraphs_can_be_disabled() {
    html_opts!([enable_paragraphs = false], "a\nb", "a\nb");
    html_opts!([enable_paragraphs = false], "a\n\nb", "a\n\nb");
}

#[test]
fn default_helpers() {
    assert_eq!(
        crate::compile_str_default("*a*").unwrap(),
        "<p><em>a</em></p>",
    );
    assert_eq!(
        crate::compile_default(b"*a*").unwrap(),
        "<p><em>a</em></p>",
    );
}

#[cfg(feature = "bon")]
#[test]
fn options_builder() {
    let options = Options::builder().enable_mark_tags(true).build();
    assert!(options.enable_mark_tags);
    assert!(options.enable_em_tags);
    assert!(!options.allow_html);
}
