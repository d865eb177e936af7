use super::*;

#[test]
fn spaces_are_clamped() {
    html_opts!([max_consecutive_spaces = 2], "a     b", "<p>a  b</p>");
}

#[test]
fn tabs_are_clamped() {
    html_opts!([max_consecutive_tabs = 1], "a\t\t\tb", "<p>a\tb</p>");
}

#[test]
fn spaces_convert_to_tabs() {
    html_opts!([spaces_to_tab = 4], "a        b", "<p>a\t\tb</p>");
}

#[test]
fn tabs_convert_to_spaces() {
    html_opts!([tab_to_spaces = 2], "a\tb", "<p>a  b</p>");
}

#[test]
fn conversion_respects_the_tab_ceiling() {
    html_opts!(
        [spaces_to_tab = 2, max_consecutive_tabs = 1],
        "a    b",
        "<p>a\tb</p>",
    );
}

#[test]
fn converted_spaces_are_clamped() {
    html_opts!(
        [tab_to_spaces = 4, max_consecutive_spaces = 2],
        "a\tb",
        "<p>a  b</p>",
    );
}

#[test]
fn whitespace_is_untouched_by_default() {
    html("a   b", "<p>a   b</p>");
    html("a\t\tb", "<p>a\t\tb</p>");
}
