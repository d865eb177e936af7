//! The structural resolvers: fixed-order passes over the scanner's
//! side-lists that reinterpret flat marker tokens as higher-level
//! constructs.  Later passes rely on earlier ones having emptied matched
//! spans, so the order here is load-bearing.

use crate::error::CompileError;
use crate::options::Options;
use crate::scanner::{self, SideLists};
use crate::sequence::{TokenId, TokenSequence};
use crate::strings;
use crate::tokens::{
    TokenType, IMAGE_SEGMENT_LINK, IMAGE_SEGMENT_TEXT, IMAGE_SEGMENT_TITLE, LINK_SEGMENT_LINK,
    LINK_SEGMENT_TEXT, LINK_SEGMENT_TITLE,
};

/// Runs every enabled resolver in order, then the whitespace pass.
pub(crate) fn run(
    seq: &mut TokenSequence,
    side: &SideLists,
    options: &Options,
) -> Result<(), CompileError> {
    if !side.list.is_empty() {
        lists(seq, &side.list);
    }
    if !side.image.is_empty() {
        images(seq, &side.image)?;
    }
    if !side.link.is_empty() {
        links(seq, &side.link)?;
    }
    if !side.heading.is_empty() {
        headings(seq, &side.heading);
    }
    if !side.hyphen.is_empty() {
        hyphens(seq, &side.hyphen);
    }
    if !side.backslash.is_empty() {
        backslashes(seq, &side.backslash)?;
    }
    if !side.whitespace.is_empty() {
        scanner::normalize_whitespace(seq, &side.whitespace, options);
    }
    Ok(())
}

/// Concatenated input bytes of a run of tokens.
fn collect_bytes(seq: &TokenSequence, ids: &[TokenId]) -> Vec<u8> {
    let mut out = Vec::new();
    for &id in ids {
        out.extend_from_slice(seq.bytes(id));
    }
    out
}

/// Single-level unordered lists: `* ` at line start, each item its own
/// paragraph.  The end-of-item heuristic is a paragraph bound whose raw
/// successor is an already-emptied slot (the slot freed by a CRLF line
/// ending); that slot is recycled as the list bound.
fn lists(seq: &mut TokenSequence, side: &[TokenId]) {
    for &id in side {
        if seq.tok(id).kind != TokenType::Asterisk {
            continue;
        }

        let prev_spaces = seq.prevs_while_in(id, &[TokenType::Space]);
        let indent = prev_spaces.len();
        let first = prev_spaces.last().copied().unwrap_or(id);

        let next_space = match seq.next(id) {
            Some(n) if seq.tok(n).kind == TokenType::Space => n,
            _ => continue,
        };

        let content = seq.nexts_until_type(next_space, TokenType::ParagraphBound);
        if content.is_empty() {
            continue;
        }

        let final_bound = match seq.next(*content.last().unwrap()) {
            Some(b) => b,
            None => continue,
        };
        let final_slot = match seq.raw_next_of(final_bound) {
            Some(s) if seq.tok(s).kind == TokenType::Empty => s,
            _ => continue,
        };

        let prev_first = match seq.prev(first) {
            Some(p) if seq.tok(p).kind == TokenType::ParagraphBound => p,
            _ => continue,
        };
        let prev_prev = match seq.prev(prev_first) {
            Some(p) => p,
            None => continue,
        };

        if seq.tok(prev_prev).kind == TokenType::UnorderedListBound {
            // Continuation of an open list: the previous close either merges
            // away (same indent) or reopens at the new indent.
            let same_indent = seq.tok(prev_prev).indent == indent;
            seq.tok_mut(prev_prev).kind = TokenType::Empty;
            if same_indent {
                seq.tok_mut(prev_first).kind = TokenType::Empty;
            } else {
                let t = seq.tok_mut(prev_first);
                t.kind = TokenType::UnorderedListBound;
                t.indent = indent;
            }
        } else {
            // A fresh list: promote the bound pair before the item, recycling
            // the emptied slot before it as the paragraph close.
            let recycled = match seq.raw_prev_of(prev_prev) {
                Some(r) => r,
                None => continue,
            };
            {
                let t = seq.tok_mut(prev_prev);
                t.kind = TokenType::UnorderedListBound;
                t.indent = indent;
            }
            seq.tok_mut(recycled).kind = TokenType::ParagraphBound;
            seq.tok_mut(prev_first).kind = TokenType::Empty;
        }

        seq.tok_mut(next_space).kind = TokenType::ListItemBound;
        seq.tok_mut(id).kind = TokenType::Empty;
        seq.tok_mut(final_bound).kind = TokenType::ListItemBound;
        {
            let t = seq.tok_mut(final_slot);
            t.kind = TokenType::UnorderedListBound;
            t.indent = indent;
        }

        seq.set_all_empty(&prev_spaces);
    }
}

/// `![text](link)` with an optional space-separated title.
fn images(seq: &mut TokenSequence, side: &[TokenId]) -> Result<(), CompileError> {
    for &id in side {
        if seq.tok(id).kind != TokenType::Exclamation {
            continue;
        }

        let bracket_open = match seq.next(id) {
            Some(n) if seq.tok(n).kind == TokenType::SquareBracketOpen => n,
            _ => continue,
        };

        let text = seq.nexts_while_in(bracket_open, IMAGE_SEGMENT_TEXT);
        if text.is_empty() {
            continue;
        }

        let mid = match seq.next_n_types(
            *text.last().unwrap(),
            &[TokenType::SquareBracketClose, TokenType::ParenthesisOpen],
        ) {
            Some(m) => m,
            None => continue,
        };

        let link = seq.nexts_while_in(*mid.last().unwrap(), IMAGE_SEGMENT_LINK);
        if link.is_empty() {
            continue;
        }

        let spaces = seq.nexts_while_in(*link.last().unwrap(), &[TokenType::Space]);
        let title = if spaces.is_empty() {
            Vec::new()
        } else {
            let title = seq.nexts_while_in(*spaces.last().unwrap(), IMAGE_SEGMENT_TITLE);
            if title.is_empty() {
                continue;
            }
            title
        };

        let last_segment = match title.last().or(link.last()) {
            Some(&s) => s,
            None => continue,
        };
        let final_token = match seq.next(last_segment) {
            Some(f) if seq.tok(f).kind == TokenType::ParenthesisClose => f,
            _ => continue,
        };

        let src = match resolve_target(seq, &link)? {
            Some(src) => src,
            // Unparseable target: leave the literal text in place.
            None => continue,
        };
        let alt = strings::escape_html(&collect_bytes(seq, &text));
        let alt = String::from_utf8_lossy(&alt).into_owned();

        {
            let t = seq.tok_mut(id);
            t.kind = TokenType::ImageBound;
            t.attributes.insert("alt".into(), alt);
            t.attributes.insert("src".into(), src);
        }

        if !title.is_empty() {
            let title_text = strings::escape_html(&collect_bytes(seq, &title));
            let title_text = String::from_utf8_lossy(&title_text).into_owned();
            seq.tok_mut(id)
                .attributes
                .insert("title".into(), title_text);
            seq.set_all_empty(&spaces);
            seq.set_all_empty(&title);
        }

        seq.set_all_empty(&text);
        seq.set_all_empty(&mid);
        seq.set_all_empty(&link);

        seq.tok_mut(bracket_open).kind = TokenType::ImageBound;
        seq.tok_mut(final_token).kind = TokenType::Empty;
    }

    Ok(())
}

/// `[text](link)` with an optional space-separated title, and bare
/// `<link>`.  The link-segment tokens stay live and double as the anchor
/// text; email-shaped targets gain a `mailto:` prefix.
fn links(seq: &mut TokenSequence, side: &[TokenId]) -> Result<(), CompileError> {
    for &id in side {
        let (text, mid, link, expected_final) = match seq.tok(id).kind {
            TokenType::SquareBracketOpen => {
                let text = seq.nexts_while_in(id, LINK_SEGMENT_TEXT);
                if text.is_empty() {
                    continue;
                }

                let mid = match seq.next_n_types(
                    *text.last().unwrap(),
                    &[TokenType::SquareBracketClose, TokenType::ParenthesisOpen],
                ) {
                    Some(m) => m,
                    None => continue,
                };

                let link = seq.nexts_while_in(*mid.last().unwrap(), LINK_SEGMENT_LINK);
                if link.is_empty() {
                    continue;
                }

                (text, mid, link, TokenType::ParenthesisClose)
            }
            TokenType::AngleBracketOpen => {
                let link = seq.nexts_while_in(id, LINK_SEGMENT_LINK);
                if link.is_empty() {
                    continue;
                }
                (Vec::new(), Vec::new(), link, TokenType::AngleBracketClose)
            }
            _ => continue,
        };

        let spaces = seq.nexts_while_in(*link.last().unwrap(), &[TokenType::Space]);
        let title = if spaces.is_empty() {
            Vec::new()
        } else {
            let title = seq.nexts_while_in(*spaces.last().unwrap(), LINK_SEGMENT_TITLE);
            if title.is_empty() {
                continue;
            }
            title
        };

        let last_segment = match title.last().or(link.last()) {
            Some(&s) => s,
            None => continue,
        };
        let final_token = match seq.next(last_segment) {
            Some(f) if seq.tok(f).kind == expected_final => f,
            _ => continue,
        };

        let href = match resolve_target(seq, &link)? {
            Some(href) => href,
            None => continue,
        };
        let href = if strings::is_email(&href) {
            format!("mailto:{}", href)
        } else {
            href
        };

        {
            let t = seq.tok_mut(id);
            t.kind = TokenType::LinkBound;
            t.attributes.insert("href".into(), href);
        }

        if !title.is_empty() {
            let title_text = strings::escape_html(&collect_bytes(seq, &title));
            let title_text = String::from_utf8_lossy(&title_text).into_owned();
            seq.tok_mut(id)
                .attributes
                .insert("title".into(), title_text);
            seq.set_all_empty(&spaces);
            seq.set_all_empty(&title);
        }

        seq.set_all_empty(&text);
        seq.set_all_empty(&mid);

        seq.tok_mut(final_token).kind = TokenType::LinkBound;
    }

    Ok(())
}

/// Normalizes a link/image target.  `Ok(None)` degrades the construct to
/// literal text; a double quote in the raw target is a hard error (the
/// strict policy, applied uniformly to links and images).
fn resolve_target(
    seq: &TokenSequence,
    link: &[TokenId],
) -> Result<Option<String>, CompileError> {
    let raw = collect_bytes(seq, link);
    if raw.contains(&b'"') {
        return Err(CompileError::UrlCannotContainDoubleQuote);
    }
    match std::str::from_utf8(&raw) {
        Ok(s) => Ok(Some(strings::normalize_href(s))),
        Err(_) => Ok(None),
    }
}

/// `#`…`######` and `>` line prefixes promote the surrounding paragraph
/// bounds to heading/blockquote bounds.
fn headings(seq: &mut TokenSequence, side: &[TokenId]) {
    for &id in side {
        let bound = match seq.tok(id).kind {
            TokenType::Hash => TokenType::Heading1Bound,
            TokenType::HashDouble => TokenType::Heading2Bound,
            TokenType::HashTriple => TokenType::Heading3Bound,
            TokenType::HashQuadruple => TokenType::Heading4Bound,
            TokenType::HashQuintuple => TokenType::Heading5Bound,
            TokenType::HashSextuple => TokenType::Heading6Bound,
            TokenType::AngleBracketClose => TokenType::BlockquoteBound,
            _ => continue,
        };

        let prev_bound = match seq.prev(id) {
            Some(p) if seq.tok(p).kind == TokenType::ParagraphBound => p,
            _ => continue,
        };
        let next_space = match seq.next(id) {
            Some(n) if seq.tok(n).kind == TokenType::Space => n,
            _ => continue,
        };
        let next_bound = match seq.next_of_type(id, TokenType::ParagraphBound) {
            Some(b) => b,
            None => continue,
        };

        seq.tok_mut(prev_bound).kind = bound;
        seq.tok_mut(next_bound).kind = bound;
        seq.tok_mut(next_space).kind = TokenType::Empty;
        seq.tok_mut(id).kind = TokenType::Empty;
    }
}

/// Adjacent spaces become hair spaces around every side-listed hyphen run;
/// doubles and triples retag to en/em dashes.
fn hyphens(seq: &mut TokenSequence, side: &[TokenId]) {
    for &id in side {
        match seq.tok(id).kind {
            TokenType::Hyphen | TokenType::HyphenDouble | TokenType::HyphenTriple => {}
            _ => continue,
        }

        if let Some(n) = seq.next(id) {
            if seq.tok(n).kind == TokenType::Space {
                seq.tok_mut(n).kind = TokenType::SpaceHair;
            }
        }
        if let Some(p) = seq.prev(id) {
            if seq.tok(p).kind == TokenType::Space {
                seq.tok_mut(p).kind = TokenType::SpaceHair;
            }
        }

        match seq.tok(id).kind {
            TokenType::HyphenTriple => seq.tok_mut(id).kind = TokenType::DashEm,
            TokenType::HyphenDouble => seq.tok_mut(id).kind = TokenType::DashEn,
            _ => {}
        }
    }
}

/// Backslash escapes.  The escape letter is trimmed off the following text
/// run; a doubled backslash soft-deletes its partner and stays literal.
fn backslashes(seq: &mut TokenSequence, side: &[TokenId]) -> Result<(), CompileError> {
    for &id in side {
        if seq.tok(id).kind != TokenType::Backslash {
            // Consumed as the second half of a doubled backslash.
            continue;
        }

        let mut handled = false;

        if let Some(next) = seq.next(id) {
            match seq.tok(next).kind {
                TokenType::Text if seq.tok(next).len() > 0 => {
                    let first = seq.input()[seq.tok(next).start];
                    handled = true;
                    match first {
                        b'n' => {
                            seq.tok_mut(id).kind = TokenType::LineBreak;
                            scanner::merge_line_break(seq, id);
                        }
                        b'r' => seq.tok_mut(id).kind = TokenType::CarriageReturn,
                        b't' => seq.tok_mut(id).kind = TokenType::Tab,
                        _ => handled = false,
                    }

                    if handled {
                        let t = seq.tok_mut(next);
                        t.start += 1;
                        if t.end <= t.start {
                            t.kind = TokenType::Empty;
                        }
                    }
                }
                TokenType::Backslash => {
                    seq.tok_mut(next).kind = TokenType::Empty;
                    handled = true;
                }
                _ => {}
            }
        }

        if !handled {
            return Err(CompileError::BackslashTransformUnknown);
        }
    }

    Ok(())
}
