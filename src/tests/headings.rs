use super::*;

#[test]
fn heading_levels() {
    html("# One\n\nx", "<h1>One</h1><p>x</p>");
    html("## Two\n\nx", "<h2>Two</h2><p>x</p>");
    html("### Three\n\nx", "<h3>Three</h3><p>x</p>");
    html("###### Six\n\nx", "<h6>Six</h6><p>x</p>");
}

#[test]
fn heading_at_end_of_input() {
    html("# A", "<h1>A</h1>");
}

#[test]
fn seven_hashes_are_not_a_heading() {
    html("####### x", "<p>####### x</p>");
}

#[test]
fn hash_without_space_stays_literal() {
    html("#x", "<p>#x</p>");
}

#[test]
fn hash_mid_paragraph_stays_literal() {
    html("a # b", "<p>a # b</p>");
}

#[test]
fn headings_can_be_disabled() {
    html_opts!([enable_headings = false], "# A", "<p># A</p>");
}
