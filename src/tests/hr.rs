use super::*;

#[test]
fn asterisk_rule() {
    html("***", "<hr>");
}

#[test]
fn underscore_rule() {
    html("___", "<hr>");
}

#[test]
fn rule_between_paragraphs() {
    html("a\n\n***\n\nb", "<p>a</p><hr><p>b</p>");
}

#[test]
fn rules_can_be_disabled() {
    html_opts!([enable_horizontal_rules = false], "***", "***");
}
