use super::*;

#[test]
fn double_hyphen_is_an_en_dash() {
    html("a -- b", "<p>a\u{200a}\u{2013}\u{200a}b</p>");
}

#[test]
fn triple_hyphen_is_an_em_dash() {
    html("a --- b", "<p>a\u{200a}\u{2014}\u{200a}b</p>");
}

#[test]
fn single_hyphen_keeps_hair_spacing() {
    html("a - b", "<p>a\u{200a}-\u{200a}b</p>");
}

#[test]
fn hyphen_transforms_can_be_disabled() {
    html_opts!([enable_hyphen_transforms = false], "a -- b", "<p>a -- b</p>");
}
