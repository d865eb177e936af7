use crate::{compile_str, CompileError, Options};
use pretty_assertions::assert_eq;

mod blockquotes;
mod cleanup;
mod code;
mod core;
mod dashes;
mod document;
mod escapes;
mod headings;
mod hr;
mod images;
mod links;
mod lists;
mod pathological;
mod whitespace;

#[track_caller]
fn html(input: &str, expected: &str) {
    html_with(input, expected, &Options::default());
}

#[track_caller]
fn html_with(input: &str, expected: &str, options: &Options) {
    let actual = compile_str(input, options).unwrap();
    assert_eq!(actual, expected);
}

#[track_caller]
fn error_with(input: &str, expected: CompileError, options: &Options) {
    assert_eq!(compile_str(input, options).unwrap_err(), expected);
}

/// `html_with` with the named option fields flipped from their defaults.
macro_rules! html_opts {
    ([$($field:ident = $value:expr),* $(,)?], $input:expr, $expected:expr $(,)?) => {{
        #[allow(unused_mut)]
        let mut options = $crate::Options::default();
        $(options.$field = $value;)*
        $crate::tests::html_with($input, $expected, &options);
    }};
}

pub(crate) use html_opts;
