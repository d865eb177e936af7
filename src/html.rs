//! The HTML generator and the empty-tag cleaner.
//!
//! The generator walks the raw chain once, assigning output bytes to each
//! live token.  Paired boundary tokens are matched with a stack: a token
//! whose type and indent equal the stack top closes that pair, anything
//! else opens a new one.  Openers still on the stack at the end of the walk
//! were never closed; they are retagged to plain text and re-rendered, so
//! an unmatched `*` comes out as a literal asterisk.

use smallvec::SmallVec;

use crate::options::Options;
use crate::sequence::{TokenId, TokenSequence};
use crate::strings;
use crate::tokens::TokenType;

#[cfg(feature = "parallel")]
const PARALLEL_MIN_TOKENS: usize = 4096;

type TagStack = SmallVec<[TokenId; 8]>;

/// Token types that close a block, used to suppress a `<br>` directly
/// before one (the line break is already implied by the block boundary).
const BLOCK_BOUNDS: &[TokenType] = &[
    TokenType::ParagraphBound,
    TokenType::BlockquoteBound,
    TokenType::Heading1Bound,
    TokenType::Heading2Bound,
    TokenType::Heading3Bound,
    TokenType::Heading4Bound,
    TokenType::Heading5Bound,
    TokenType::Heading6Bound,
    TokenType::UnorderedListBound,
    TokenType::ListItemBound,
    TokenType::DocumentBodyBound,
];

/// Renders every token's output bytes in place.
pub(crate) fn generate(seq: &mut TokenSequence, options: &Options) {
    #[cfg(feature = "parallel")]
    prefill_parallel(seq, options);

    let mut stack = TagStack::new();
    let ids: Vec<TokenId> = seq.raw_iter().collect();
    for id in ids {
        token_html(seq, id, &mut stack, options);
    }

    // Anything left open gets demoted to text and re-rendered literally.
    while let Some(open) = stack.pop() {
        {
            let t = seq.tok_mut(open);
            t.kind = TokenType::Text;
            t.output.clear();
        }
        let mut scratch = TagStack::new();
        token_html(seq, open, &mut scratch, options);
    }
}

/// Bulk pre-render of order-independent tokens on large inputs.  Text and
/// tab output depends only on the token's own span, so these fan out; every
/// other type still renders in sequence order.
#[cfg(feature = "parallel")]
fn prefill_parallel(seq: &mut TokenSequence, options: &Options) {
    use rayon::prelude::*;

    if seq.len() < PARALLEL_MIN_TOKENS {
        return;
    }

    let allow_html = options.allow_html;
    let (input, arena) = seq.parts_mut();
    arena.par_iter_mut().for_each(|t| match t.kind {
        TokenType::Text => {
            let bytes = &input[t.start..t.end];
            t.output = if allow_html {
                bytes.to_vec()
            } else {
                strings::escape_html(bytes)
            };
        }
        TokenType::Tab => {
            t.output = vec![b'\t'; t.end - t.start];
        }
        _ => {}
    });
}

fn literal(seq: &mut TokenSequence, id: TokenId) {
    let bytes = seq.bytes(id).to_vec();
    seq.tok_mut(id).output = bytes;
}

fn set_output(seq: &mut TokenSequence, id: TokenId, output: &[u8]) {
    seq.tok_mut(id).output = output.to_vec();
}

/// Renders one token.  The type is read at visit time, so retags performed
/// ahead of the cursor (horizontal-rule detection) take effect naturally.
fn token_html(seq: &mut TokenSequence, id: TokenId, stack: &mut TagStack, options: &Options) {
    use TokenType::*;

    match seq.tok(id).kind {
        Empty => {}

        Text => {
            if seq.tok(id).output.is_empty() {
                let rendered = if options.allow_html {
                    seq.bytes(id).to_vec()
                } else {
                    strings::escape_html(seq.bytes(id))
                };
                seq.tok_mut(id).output = rendered;
            }
        }

        Space => {
            let n = seq.tok(id).len();
            seq.tok_mut(id).output = vec![b' '; n];
        }

        Tab => {
            if seq.tok(id).output.is_empty() {
                let n = seq.tok(id).len();
                seq.tok_mut(id).output = vec![b'\t'; n];
            }
        }

        SpaceHair => set_output(seq, id, "\u{200a}".as_bytes()),

        // A carriage return with no following newline rubs out the text of
        // the line so far, back to the enclosing block boundary.
        CarriageReturn => {
            let followed_by_newline = matches!(
                seq.next(id).map(|n| seq.tok(n).kind),
                Some(LineBreak) | Some(ParagraphBound)
            );
            if !followed_by_newline {
                for t in seq.prevs_until_any_type(id, BLOCK_BOUNDS) {
                    if seq.tok(t).kind == Text {
                        seq.tok_mut(t).kind = Empty;
                    }
                }
            }
            seq.tok_mut(id).kind = Empty;
        }

        LineBreak => {
            if stack.iter().any(|&s| seq.tok(s).kind == Backtick) {
                literal(seq, id);
            } else if !options.enable_paragraphs {
                set_output(seq, id, b"\n");
            } else {
                let implied = match seq.next(id) {
                    Some(n) => BLOCK_BOUNDS.contains(&seq.tok(n).kind),
                    None => true,
                };
                if !implied {
                    handle_tag_single(seq, id);
                }
            }
        }

        ParagraphBound => {
            if options.enable_horizontal_rules {
                if let Some(marker) = seq.next(id) {
                    let is_rule = matches!(seq.tok(marker).kind, AsteriskTriple | UnderscoreTriple)
                        && matches!(
                            seq.next(marker).map(|b| seq.tok(b).kind),
                            Some(ParagraphBound)
                        );
                    if is_rule {
                        let close = seq.next(marker).unwrap_or(marker);
                        seq.tok_mut(id).kind = Empty;
                        seq.tok_mut(marker).kind = HorizontalRule;
                        seq.tok_mut(close).kind = Empty;
                        return;
                    }
                }
            }

            if !options.enable_paragraphs {
                if seq.prev(id).is_some() && seq.next(id).is_some() {
                    set_output(seq, id, b"\n");
                }
            } else {
                handle_tag(seq, id, stack, options);
            }
        }

        DocumentDoctype => {
            seq.tok_mut(id).attributes.insert("html".into(), String::new());
            handle_tag_single(seq, id);
        }

        DocumentHtmlBound | DocumentHeadBound | DocumentBodyBound | BlockquoteBound
        | Heading1Bound | Heading2Bound | Heading3Bound | Heading4Bound | Heading5Bound
        | Heading6Bound | UnorderedListBound | ListItemBound | LinkBound | ImageBound => {
            handle_tag(seq, id, stack, options);
        }

        HorizontalRule => handle_tag_single(seq, id),

        Backtick => {
            if options.enable_code_tags {
                handle_tag(seq, id, stack, options);
            } else {
                literal(seq, id);
            }
        }

        BacktickDouble => {
            let in_code = stack.iter().any(|&s| seq.tok(s).kind == Backtick);
            if options.enable_code_tags && in_code {
                set_output(seq, id, b"`");
            } else {
                literal(seq, id);
            }
        }

        Asterisk | Underscore => {
            if options.enable_em_tags {
                handle_tag(seq, id, stack, options);
            } else {
                literal(seq, id);
            }
        }

        AsteriskDouble | UnderscoreDouble => {
            if options.enable_strong_tags {
                handle_tag(seq, id, stack, options);
            } else {
                literal(seq, id);
            }
        }

        AsteriskTriple | UnderscoreTriple => {
            if options.enable_strong_tags && options.enable_em_tags {
                handle_tag(seq, id, stack, options);
            } else if !options.enable_strong_tags {
                literal(seq, id);
            } else {
                handle_tag(seq, id, stack, options);
            }
        }

        EqualsDouble => {
            if options.enable_mark_tags {
                handle_tag(seq, id, stack, options);
            } else {
                literal(seq, id);
            }
        }

        AngleBracketOpen => set_output(seq, id, b"&lt;"),

        AngleBracketClose => set_output(seq, id, b"&gt;"),

        DashEm => set_output(seq, id, "\u{2014}".as_bytes()),
        DashEn => set_output(seq, id, "\u{2013}".as_bytes()),

        Backslash | Exclamation | ParenthesisOpen | ParenthesisClose | SquareBracketOpen
        | SquareBracketClose | Hash | HashDouble | HashTriple | HashQuadruple | HashQuintuple
        | HashSextuple | Hyphen | HyphenDouble | HyphenTriple => literal(seq, id),
    }
}

fn push_attributes(out: &mut Vec<u8>, seq: &TokenSequence, id: TokenId) {
    for (name, value) in &seq.tok(id).attributes {
        if name.is_empty() {
            continue;
        }
        out.push(b' ');
        out.extend_from_slice(name.as_bytes());
        if !value.is_empty() {
            out.extend_from_slice(b"=\"");
            out.extend_from_slice(value.as_bytes());
            out.push(b'"');
        }
    }
}

/// Opens or closes a paired tag.  A token matching the stack top by type
/// and indent closes it; anything else opens and is pushed.  Types missing
/// from the tag table render as a classed `<span>`.
fn handle_tag(seq: &mut TokenSequence, id: TokenId, stack: &mut TagStack, options: &Options) {
    let kind = seq.tok(id).kind;
    let indent = seq.tok(id).indent;

    // An open code span forces every other pair type to literal bytes; the
    // span is closed only by its own backtick.
    if kind != TokenType::Backtick && stack.iter().any(|&s| seq.tok(s).kind == TokenType::Backtick)
    {
        literal(seq, id);
        return;
    }

    if let Some(&top) = stack.last() {
        if seq.tok(top).kind == kind && seq.tok(top).indent == indent {
            stack.pop();
            let mut out = Vec::new();
            match kind.tag_data() {
                Some(data) => {
                    if !data.self_closing {
                        for tag in data.tags.iter().rev() {
                            out.extend_from_slice(b"</");
                            out.extend_from_slice(tag.as_bytes());
                            out.push(b'>');
                        }
                    }
                }
                None => out.extend_from_slice(b"</span>"),
            }
            seq.tok_mut(id).output = out;
            if options.clean_empty_tags {
                seq.tag_pairs.push((top, id));
            }
            return;
        }
    }

    let mut out = Vec::new();
    match kind.tag_data() {
        Some(data) => {
            for (i, tag) in data.tags.iter().enumerate() {
                out.push(b'<');
                out.extend_from_slice(tag.as_bytes());
                if i == 0 {
                    push_attributes(&mut out, seq, id);
                }
                out.push(b'>');
            }
        }
        None => {
            out.extend_from_slice(b"<span class=\"");
            out.extend_from_slice(kind.class_name().as_bytes());
            out.extend_from_slice(b"\">");
        }
    }
    seq.tok_mut(id).output = out;
    stack.push(id);
}

/// Renders a lone, unpaired tag (`<br>`, `<hr>`, the doctype).
fn handle_tag_single(seq: &mut TokenSequence, id: TokenId) {
    let kind = seq.tok(id).kind;
    let mut out = Vec::new();
    match kind.tag_data() {
        Some(data) => {
            out.push(b'<');
            out.extend_from_slice(data.tags[0].as_bytes());
            push_attributes(&mut out, seq, id);
            out.push(b'>');
        }
        None => {
            out.extend_from_slice(b"<span class=\"");
            out.extend_from_slice(kind.class_name().as_bytes());
            out.extend_from_slice(b"\">");
        }
    }
    seq.tok_mut(id).output = out;
}

/// Removes tag pairs whose interior renders no text.  Pairs are recorded in
/// closing order, so inner pairs are considered first and an outer pair
/// whose only content was a removed inner pair cascades away too.
pub(crate) fn clean(seq: &mut TokenSequence) {
    let pairs = std::mem::take(&mut seq.tag_pairs);
    for (open, close) in pairs {
        if seq.tok(open).kind == TokenType::Empty {
            continue;
        }
        if let Some(data) = seq.tok(open).kind.tag_data() {
            if data.self_closing {
                continue;
            }
        }

        let interior = seq.prevs_until_token(close, open);
        let has_text = interior.iter().any(|&t| {
            seq.tok(t).kind == TokenType::Text && seq.tok(t).len() > 0
        });
        if !has_text {
            seq.tok_mut(open).kind = TokenType::Empty;
            seq.tok_mut(close).kind = TokenType::Empty;
            seq.set_all_empty(&interior);
        }
    }
}
