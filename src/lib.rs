//! A single-pass compiler for a constrained Markdown dialect.
//!
//! The input is scanned once into a typed token sequence, a fixed series of
//! structural resolvers reinterprets marker tokens in place (lists, images,
//! links, headings, dashes, escapes), and a stack-based generator assigns
//! HTML bytes to every surviving token.  Unmatched markup degrades to
//! literal text instead of failing.
//!
//! ```rust
//! use slimmark::{compile_str, Options};
//!
//! let html = compile_str("# Title\n\nHello *world*.\n", &Options::default()).unwrap();
//! assert_eq!(html, "<h1>Title</h1><p>Hello <em>world</em>.</p>");
//! ```

#![deny(missing_docs)]

mod debug;
pub mod error;
mod html;
pub mod options;
mod resolve;
mod scanner;
pub mod sequence;
mod strings;
pub mod tokens;

#[cfg(test)]
mod tests;

pub use error::CompileError;
pub use options::Options;
pub use sequence::{Token, TokenId, TokenSequence};
pub use tokens::TokenType;

/// Compiles raw input bytes to an HTML string.
///
/// Invalid UTF-8 in text spans is replaced during final serialization; it
/// never aborts compilation.  Errors are reserved for malformed constructs
/// the options declare as strict (unknown backslash escapes, double quotes
/// in link targets), and no partial output is returned for them.
pub fn compile(input: &[u8], options: &Options) -> Result<String, CompileError> {
    let mut seq = TokenSequence::new(input);
    let side = scanner::scan(&mut seq, options);
    resolve::run(&mut seq, &side, options)?;

    if options.debug_print_tokens {
        debug::print_tokens(&seq);
    }

    html::generate(&mut seq, options);
    if options.clean_empty_tags {
        html::clean(&mut seq);
    }

    let output = seq.serialize();
    if options.debug_print_output {
        debug::print_output(&output);
    }
    Ok(output)
}

/// [`compile`] for string input.
pub fn compile_str(input: &str, options: &Options) -> Result<String, CompileError> {
    compile(input.as_bytes(), options)
}

/// [`compile`] with default options.
pub fn compile_default(input: &[u8]) -> Result<String, CompileError> {
    compile(input, &Options::default())
}

/// [`compile_str`] with default options.
pub fn compile_str_default(input: &str) -> Result<String, CompileError> {
    compile_str(input, &Options::default())
}
