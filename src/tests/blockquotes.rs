use super::*;

#[test]
fn blockquote() {
    html_opts!(
        [enable_blockquotes = true],
        "> quoted\n\nplain",
        "<blockquote>quoted</blockquote><p>plain</p>",
    );
}

#[test]
fn blockquote_at_end_of_input() {
    html_opts!(
        [enable_blockquotes = true],
        "> quoted",
        "<blockquote>quoted</blockquote>",
    );
}

#[test]
fn blockquotes_are_opt_in() {
    html("> q", "<p>&gt; q</p>");
}

#[test]
fn angle_bracket_without_space_stays_literal() {
    html_opts!([enable_blockquotes = true], ">q", "<p>&gt;q</p>");
}
