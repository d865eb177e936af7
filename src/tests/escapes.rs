use super::*;

fn backslash_options() -> Options {
    Options {
        enable_backslash_transforms: true,
        ..Options::default()
    }
}

#[test]
fn entity_escaping_by_default() {
    html("a & b", "<p>a &amp; b</p>");
    html("a < b", "<p>a &lt; b</p>");
    html("\"q\" 'n'", "<p>&#34;q&#34; &#39;n&#39;</p>");
}

#[test]
fn allow_html_passes_text_through() {
    // Already-escaped input stays escaped exactly once.
    html_opts!([allow_html = true], "a &amp; b", "<p>a &amp; b</p>");
    // Angle brackets tokenize on their own and are entity-escaped even
    // here; only text runs pass through raw.
    html_opts!([allow_html = true], "a < b", "<p>a &lt; b</p>");
}

#[test]
fn backslash_n_is_a_line_break() {
    html_with("a\\nb", "<p>a<br>b</p>", &backslash_options());
}

#[test]
fn two_backslash_n_make_a_paragraph_break() {
    html_with("a\\n\\nb", "<p>a</p><p>b</p>", &backslash_options());
}

#[test]
fn backslash_t_is_a_tab() {
    html_with("a\\tb", "<p>a\tb</p>", &backslash_options());
}

#[test]
fn doubled_backslash_stays_literal() {
    html_with("a\\\\b", "<p>a\\b</p>", &backslash_options());
}

#[test]
fn unknown_escape_is_an_error() {
    error_with(
        "\\x",
        CompileError::BackslashTransformUnknown,
        &backslash_options(),
    );
    error_with(
        "trailing\\",
        CompileError::BackslashTransformUnknown,
        &backslash_options(),
    );
}

#[test]
fn backslashes_are_literal_when_disabled() {
    html("a\\nb", "<p>a\\nb</p>");
}
