use super::*;

#[test]
fn document_envelope() {
    html_opts!(
        [enable_document_tags = true],
        "x",
        "<!DOCTYPE html><html><head></head><body><p>x</p></body></html>",
    );
}

#[test]
fn envelope_around_a_heading() {
    html_opts!(
        [enable_document_tags = true],
        "# T",
        "<!DOCTYPE html><html><head></head><body><h1>T</h1></body></html>",
    );
}
