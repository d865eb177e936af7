use super::*;

// List recognition keys off the emptied slot a CRLF line ending leaves
// behind, so the fixtures use \r\n.

#[test]
fn unordered_list() {
    html(
        "intro\r\n\r\n* one\r\n\r\n* two\r\n\r\nend\r\n",
        "<p>intro</p><ul><li>one</li><li>two</li></ul><p>end</p>",
    );
}

#[test]
fn single_item_list() {
    html(
        "intro\r\n\r\n* only\r\n\r\nend\r\n",
        "<p>intro</p><ul><li>only</li></ul><p>end</p>",
    );
}

#[test]
fn item_content_keeps_inline_markup() {
    html(
        "intro\r\n\r\n* some *emphasis* here\r\n\r\nend\r\n",
        "<p>intro</p><ul><li>some <em>emphasis</em> here</li></ul><p>end</p>",
    );
}

#[test]
fn asterisk_without_space_is_not_an_item() {
    html("*one", "*one");
}

#[test]
fn lists_can_be_disabled() {
    html_opts!([enable_lists = false], "* one", "* one");
}
