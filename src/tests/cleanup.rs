use super::*;

#[test]
fn empty_strong_pair_is_removed() {
    html_opts!([clean_empty_tags = true], "a ** ** b", "<p>a  b</p>");
}

#[test]
fn empty_pairs_are_kept_by_default() {
    html("a ** ** b", "<p>a <strong> </strong> b</p>");
}

#[test]
fn empty_paragraph_is_removed() {
    html_opts!([clean_empty_tags = true], "a\n\n\n\nb", "<p>a</p><p>b</p>");
}

#[test]
fn empty_document_cleans_to_nothing() {
    html_opts!([clean_empty_tags = true], "", "");
}
