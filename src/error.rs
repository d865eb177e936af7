//! Compile-time failures.  All of them abort compilation; no partial output
//! is ever returned.

use thiserror::Error;

/// The closed error taxonomy of the compiler.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CompileError {
    /// Internal invariant violation: a token type reached the generator
    /// without a classification.  With the closed [`crate::TokenType`] enum
    /// every type is matched exhaustively, so this is unreachable in
    /// practice; it is kept so the taxonomy stays complete for callers.
    #[error("token type unknown")]
    TokenTypeUnknown,

    /// The input used a backslash escape other than `\n`, `\r`, `\t` or
    /// `\\`.
    #[error("backslash transform unknown")]
    BackslashTransformUnknown,

    /// A link or image target contained a double quote, which would allow
    /// attribute injection in the emitted `href="…"`/`src="…"`.
    #[error("compiled URL cannot contain the double quote symbol")]
    UrlCannotContainDoubleQuote,

    /// No tag names were found for a stack-matched pair.  The generator
    /// falls back to a generic `<span class="…">` instead, so this is never
    /// produced; retained for API completeness.
    #[error("cannot find matching tags for token")]
    TagsForTokenNotFound,
}
