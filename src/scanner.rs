//! The single left-to-right scan that classifies raw bytes into typed
//! spans, and the optional whitespace-normalization pass.
//!
//! The scan merges runs of identical marker characters by escalating the
//! previous token's type in place (`*` → `**` → `***`); once a run passes
//! its ceiling, a fresh token starts and re-escalates.  Marker tokens of
//! feature-gated constructs are also collected into side-lists, in
//! first-seen order, for the structural resolvers.

use crate::options::Options;
use crate::sequence::{TokenId, TokenSequence};
use crate::tokens::TokenType;

/// Ordered handles into the owning sequence, one list per resolver.
#[derive(Default)]
pub struct SideLists {
    pub backslash: Vec<TokenId>,
    pub hyphen: Vec<TokenId>,
    pub heading: Vec<TokenId>,
    pub link: Vec<TokenId>,
    pub list: Vec<TokenId>,
    pub image: Vec<TokenId>,
    pub whitespace: Vec<TokenId>,
}

/// Retroactive newline bookkeeping, run for every `\n` scanned and again
/// when a backslash escape injects a line break out of scan order: a
/// directly preceding carriage return is soft-deleted, and two adjacent
/// line breaks collapse into a shared paragraph-bound pair.
pub(crate) fn merge_line_break(seq: &mut TokenSequence, id: TokenId) {
    if let Some(prev) = seq.prev(id) {
        let mut prev = prev;
        if seq.tok(prev).kind == TokenType::CarriageReturn {
            seq.tok_mut(prev).kind = TokenType::Empty;
            match seq.prev(id) {
                Some(p) => prev = p,
                None => return,
            }
        }

        if seq.tok(prev).kind == TokenType::LineBreak {
            seq.tok_mut(prev).kind = TokenType::ParagraphBound;
            seq.tok_mut(id).kind = TokenType::ParagraphBound;
        }
    }
}

/// Escalation step for a run-merged marker: returns the next type in the
/// run, or `None` once the ceiling is reached.
fn escalate(kind: TokenType) -> Option<TokenType> {
    use TokenType::*;

    match kind {
        Asterisk => Some(AsteriskDouble),
        AsteriskDouble => Some(AsteriskTriple),
        Underscore => Some(UnderscoreDouble),
        UnderscoreDouble => Some(UnderscoreTriple),
        Hyphen => Some(HyphenDouble),
        HyphenDouble => Some(HyphenTriple),
        Hash => Some(HashDouble),
        HashDouble => Some(HashTriple),
        HashTriple => Some(HashQuadruple),
        HashQuadruple => Some(HashQuintuple),
        HashQuintuple => Some(HashSextuple),
        Backtick => Some(BacktickDouble),
        _ => None,
    }
}

/// True when the raw tail escalated in place to absorb this byte.
fn try_escalate(seq: &mut TokenSequence, base: TokenType) -> bool {
    if let Some(tail) = seq.peek_tail() {
        let kind = seq.tok(tail).kind;
        let in_run = kind == base || {
            // Walk the run back to its base to see whether the tail belongs
            // to this marker family.
            let mut k = base;
            let mut found = false;
            while let Some(next) = escalate(k) {
                if next == kind {
                    found = true;
                    break;
                }
                k = next;
            }
            found
        };
        if in_run {
            if let Some(next) = escalate(kind) {
                let t = seq.tok_mut(tail);
                t.kind = next;
                t.end += 1;
                return true;
            }
        }
    }
    false
}

/// Extends the raw tail by one byte when it has the given type.
fn try_extend(seq: &mut TokenSequence, kind: TokenType) -> bool {
    if let Some(tail) = seq.peek_tail() {
        if seq.tok(tail).kind == kind {
            seq.tok_mut(tail).end += 1;
            return true;
        }
    }
    false
}

/// The single forward pass.  Scanning itself cannot fail; the returned
/// side-lists feed the structural resolvers.
pub(crate) fn scan(seq: &mut TokenSequence, options: &Options) -> SideLists {
    let mut side = SideLists::default();
    let whitespace_tracked = options.normalizes_whitespace();

    if options.enable_document_tags {
        seq.push_empty(TokenType::DocumentDoctype);
        seq.push_empty(TokenType::DocumentHtmlBound);
        seq.push_empty(TokenType::DocumentHeadBound);
        seq.push_empty(TokenType::DocumentHeadBound);
        seq.push_empty(TokenType::DocumentBodyBound);
    }
    if options.enable_paragraphs {
        seq.push_empty(TokenType::ParagraphBound);
    }

    let input = seq.input();
    for (i, &b) in input.iter().enumerate() {
        match b {
            0x8a => scan_hair_space(seq, i),
            b'*' => {
                if !try_escalate(seq, TokenType::Asterisk) {
                    let t = seq.push_single(TokenType::Asterisk, i);
                    if options.enable_lists {
                        side.list.push(t);
                    }
                }
            }
            b'_' => {
                if !try_escalate(seq, TokenType::Underscore) {
                    seq.push_single(TokenType::Underscore, i);
                }
            }
            b'-' => {
                if !try_escalate(seq, TokenType::Hyphen) {
                    let t = seq.push_single(TokenType::Hyphen, i);
                    if options.enable_hyphen_transforms {
                        side.hyphen.push(t);
                    }
                }
            }
            b'#' => {
                if !try_escalate(seq, TokenType::Hash) {
                    let t = seq.push_single(TokenType::Hash, i);
                    if options.enable_headings {
                        side.heading.push(t);
                    }
                }
            }
            b'`' => {
                if !try_escalate(seq, TokenType::Backtick) {
                    seq.push_single(TokenType::Backtick, i);
                }
            }
            b'=' => scan_equals(seq, i),
            b'\\' => {
                let t = seq.push_single(TokenType::Backslash, i);
                if options.enable_backslash_transforms {
                    side.backslash.push(t);
                }
            }
            b'!' => {
                let t = seq.push_single(TokenType::Exclamation, i);
                if options.enable_images {
                    side.image.push(t);
                }
            }
            b'\r' => {
                seq.push_single(TokenType::CarriageReturn, i);
            }
            b'\n' => {
                let t = seq.push_single(TokenType::LineBreak, i);
                merge_line_break(seq, t);
            }
            b'\t' => {
                if !try_extend(seq, TokenType::Tab) {
                    let t = seq.push_single(TokenType::Tab, i);
                    if whitespace_tracked {
                        side.whitespace.push(t);
                    }
                }
            }
            b' ' => {
                if !try_extend(seq, TokenType::Space) {
                    let t = seq.push_single(TokenType::Space, i);
                    if whitespace_tracked {
                        side.whitespace.push(t);
                    }
                }
            }
            b'(' => {
                seq.push_single(TokenType::ParenthesisOpen, i);
            }
            b')' => {
                seq.push_single(TokenType::ParenthesisClose, i);
            }
            b'[' => {
                let t = seq.push_single(TokenType::SquareBracketOpen, i);
                if options.enable_links {
                    side.link.push(t);
                }
            }
            b']' => {
                seq.push_single(TokenType::SquareBracketClose, i);
            }
            b'<' => {
                let t = seq.push_single(TokenType::AngleBracketOpen, i);
                if options.enable_links {
                    side.link.push(t);
                }
            }
            b'>' => {
                let t = seq.push_single(TokenType::AngleBracketClose, i);
                if options.enable_blockquotes {
                    side.heading.push(t);
                }
            }
            _ => {
                if !try_extend(seq, TokenType::Text) {
                    seq.push_single(TokenType::Text, i);
                }
            }
        }
    }

    if options.enable_paragraphs {
        seq.push_empty(TokenType::ParagraphBound);
    }
    if options.enable_document_tags {
        seq.push_empty(TokenType::DocumentBodyBound);
        seq.push_empty(TokenType::DocumentHtmlBound);
    }

    side
}

/// Byte 0x8A closes the UTF-8 encoding of U+200A.  When the current text
/// run ends with the two lead bytes, the three together become a hair-space
/// token; otherwise the byte extends the text run.
fn scan_hair_space(seq: &mut TokenSequence, i: usize) {
    let input = seq.input();
    if let Some(tail) = seq.peek_tail() {
        if seq.tok(tail).kind == TokenType::Text {
            let (start, end) = {
                let t = seq.tok(tail);
                (t.start, t.end)
            };
            if end - start >= 2 && input[end - 1] == 0x80 && input[end - 2] == 0xe2 {
                let t = seq.tok_mut(tail);
                t.end -= 2;
                if t.end == t.start {
                    t.kind = TokenType::Empty;
                }
                seq.push_single(TokenType::SpaceHair, i);
            } else {
                seq.tok_mut(tail).end += 1;
            }
            return;
        }
    }
    if !try_extend(seq, TokenType::Text) {
        seq.push_single(TokenType::Text, i);
    }
}

/// `=` merges a single-`=` text token into an `EqualsDouble` marker.  A
/// lone `=` always starts its own text token, never extending the previous
/// run, so the second `=` of a pair can find it.
fn scan_equals(seq: &mut TokenSequence, i: usize) {
    if let Some(tail) = seq.peek_tail() {
        let t = seq.tok(tail);
        if t.kind == TokenType::Text && t.end - t.start == 1 && seq.input()[t.start] == b'=' {
            let t = seq.tok_mut(tail);
            t.kind = TokenType::EqualsDouble;
            t.end += 1;
            return;
        }
    }
    seq.push_single(TokenType::Text, i);
}

/// Whitespace normalization, run after all structural resolvers.
///
/// Conversion is per token type, so the two directions are mutually
/// exclusive for any one token: space runs convert to tabs first and the
/// remainder is clamped; tab runs convert to spaces (merging into an
/// adjacent preceding space run) and the result is clamped.  Clamping
/// always applies after conversion.
pub(crate) fn normalize_whitespace(
    seq: &mut TokenSequence,
    whitespace: &[TokenId],
    options: &Options,
) {
    for &id in whitespace {
        match seq.tok(id).kind {
            TokenType::Space => {
                let stt = options.spaces_to_tab;
                if stt > 0 {
                    while seq.tok(id).len() >= stt {
                        let merged = match seq.prev(id) {
                            Some(p) if seq.tok(p).kind == TokenType::Tab => {
                                let mct = options.max_consecutive_tabs;
                                if mct == 0 || seq.tok(p).len() < mct {
                                    seq.tok_mut(p).end += 1;
                                }
                                true
                            }
                            _ => false,
                        };
                        if !merged {
                            let start = seq.tok(id).start;
                            seq.insert_single_before(id, TokenType::Tab, start);
                        }
                        seq.tok_mut(id).start += stt;
                    }
                    if seq.tok(id).len() == 0 {
                        seq.tok_mut(id).kind = TokenType::Empty;
                    }
                }

                let mcs = options.max_consecutive_spaces;
                if mcs > 0 && seq.tok(id).len() > mcs {
                    let start = seq.tok(id).start;
                    seq.tok_mut(id).end = start + mcs;
                }
            }
            TokenType::Tab => {
                let tts = options.tab_to_spaces;
                if tts > 0 {
                    let widened = seq.tok(id).len() * tts;
                    {
                        let t = seq.tok_mut(id);
                        t.kind = TokenType::Space;
                        t.end = t.start + widened;
                    }

                    let mut target = id;
                    if let Some(p) = seq.prev(id) {
                        if seq.tok(p).kind == TokenType::Space {
                            seq.tok_mut(p).end += widened;
                            seq.tok_mut(id).kind = TokenType::Empty;
                            target = p;
                        }
                    }

                    let mcs = options.max_consecutive_spaces;
                    if mcs > 0 && seq.tok(target).len() > mcs {
                        let start = seq.tok(target).start;
                        seq.tok_mut(target).end = start + mcs;
                    }
                } else {
                    let mct = options.max_consecutive_tabs;
                    if mct > 0 && seq.tok(id).len() > mct {
                        let start = seq.tok(id).start;
                        seq.tok_mut(id).end = start + mct;
                    }
                }
            }
            _ => {}
        }
    }
}
