use super::*;

#[test]
fn image() {
    html(
        "![alt text](http://e.co/i.png)",
        "<p><img alt=\"alt text\" src=\"http://e.co/i.png\"></p>",
    );
}

#[test]
fn image_with_title() {
    html(
        "![a](http://e.co/i.png A pic)",
        "<p><img alt=\"a\" src=\"http://e.co/i.png\" title=\"A pic\"></p>",
    );
}

#[test]
fn alt_text_is_entity_escaped() {
    html("![a&b](u)", "<p><img alt=\"a&amp;b\" src=\"u\"></p>");
}

#[test]
fn double_quote_in_target_is_an_error() {
    error_with(
        "![a](u\"v)",
        CompileError::UrlCannotContainDoubleQuote,
        &Options::default(),
    );
}

#[test]
fn bare_exclamation_stays_literal() {
    html("!x", "<p>!x</p>");
}

#[test]
fn images_can_be_disabled() {
    html_opts!(
        [enable_images = false, enable_links = false],
        "![a](u)",
        "<p>![a](u)</p>",
    );
}
