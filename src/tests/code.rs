use super::*;

#[test]
fn code_span() {
    html("`x`", "<p><code>x</code></p>");
}

#[test]
fn markers_inside_code_stay_literal() {
    html("`a *b*`", "<p><code>a *b*</code></p>");
    html("`a _b_ ==c==`", "<p><code>a _b_ ==c==</code></p>");
}

#[test]
fn newlines_inside_code_stay_literal() {
    html("`a\nb`", "<p><code>a\nb</code></p>");
    html("`a\n\nb`", "<p><code>a\n\nb</code></p>");
}

#[test]
fn resolved_links_inside_code_stay_literal() {
    html("`[x](http://e.co/)`", "<p><code>[http://e.co/)</code></p>");
}

#[test]
fn double_backtick_outside_code_is_literal() {
    html("a `` b", "<p>a `` b</p>");
}

#[test]
fn double_backtick_inside_code_renders_one_backtick() {
    html("`a``b`", "<p><code>a`b</code></p>");
}

#[test]
fn code_tags_can_be_disabled() {
    html_opts!([enable_code_tags = false], "`x`", "<p>`x`</p>");
}
