//! Token storage: an arena of token records addressed by stable integer
//! index, threaded into a doubly-linked raw chain.
//!
//! Deletion is always soft (retag to [`TokenType::Empty`]); the raw chain
//! never shrinks, so byte offsets held by other tokens stay valid.  Logical
//! navigation ([`TokenSequence::prev`]/[`TokenSequence::next`]) skips empty
//! slots, raw navigation does not.

use std::collections::BTreeMap;

use crate::tokens::TokenType;

/// Stable handle to a token within its owning [`TokenSequence`].
pub type TokenId = usize;

/// A typed span over the input buffer, or a synthetic boundary marker with
/// directly attached output bytes.
#[derive(Debug, Clone)]
pub struct Token {
    /// Current classification; soft deletion retags to [`TokenType::Empty`].
    pub kind: TokenType,
    /// Byte offset of the span start in the shared input buffer.
    pub start: usize,
    /// Byte offset one past the span end.
    pub end: usize,
    /// HTML bytes assigned by the generator.
    pub output: Vec<u8>,
    /// Tag attributes; `BTreeMap` iteration gives the sorted emission order.
    pub attributes: BTreeMap<String, String>,
    /// List nesting level, compared by the generator's stack matching.
    pub indent: usize,
    raw_prev: Option<TokenId>,
    raw_next: Option<TokenId>,
}

impl Token {
    fn new(kind: TokenType, start: usize, end: usize) -> Self {
        Token {
            kind,
            start,
            end,
            output: Vec::new(),
            attributes: BTreeMap::new(),
            indent: 0,
            raw_prev: None,
            raw_next: None,
        }
    }

    /// Rendered length: the assigned output if any, else the span width.
    pub fn len(&self) -> usize {
        if !self.output.is_empty() {
            self.output.len()
        } else {
            self.end.saturating_sub(self.start)
        }
    }

    /// True when the token renders nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered container of tokens from one input buffer.
pub struct TokenSequence<'i> {
    input: &'i [u8],
    arena: Vec<Token>,
    head: Option<TokenId>,
    tail: Option<TokenId>,
    /// `(open, close)` pairs recorded by the generator, consumed by the
    /// empty-tag cleaner.
    pub(crate) tag_pairs: Vec<(TokenId, TokenId)>,
}

impl<'i> TokenSequence<'i> {
    /// An empty sequence over `input`; the scanner fills it.
    pub fn new(input: &'i [u8]) -> Self {
        TokenSequence {
            input,
            arena: Vec::with_capacity(input.len() / 4 + 8),
            head: None,
            tail: None,
            tag_pairs: Vec::new(),
        }
    }

    /// The shared input buffer.
    pub fn input(&self) -> &'i [u8] {
        self.input
    }

    /// Number of arena slots, soft-deleted included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// True when no token was ever pushed.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// First slot of the raw chain.
    pub fn head(&self) -> Option<TokenId> {
        self.head
    }

    /// Borrows the token at `id`.
    pub fn tok(&self, id: TokenId) -> &Token {
        &self.arena[id]
    }

    /// Mutably borrows the token at `id`.
    pub fn tok_mut(&mut self, id: TokenId) -> &mut Token {
        &mut self.arena[id]
    }

    /// The input bytes a token covers; empty for soft-deleted tokens.
    pub fn bytes(&self, id: TokenId) -> &'i [u8] {
        let t = &self.arena[id];
        if t.kind == TokenType::Empty || t.end <= t.start {
            &[]
        } else {
            &self.input[t.start..t.end]
        }
    }

    /// Splits the borrow so the generator can walk the arena while reading
    /// the input buffer.
    #[cfg(feature = "parallel")]
    pub(crate) fn parts_mut(&mut self) -> (&'i [u8], &mut [Token]) {
        (self.input, &mut self.arena)
    }

    /// Appends a synthetic token with no input span.
    pub fn push_empty(&mut self, kind: TokenType) -> TokenId {
        self.push(Token::new(kind, 0, 0))
    }

    /// Appends a token covering the single byte at `start`.
    pub fn push_single(&mut self, kind: TokenType, start: usize) -> TokenId {
        self.push(Token::new(kind, start, start + 1))
    }

    /// Splices a new single-byte token directly before `reference`.
    pub fn insert_single_before(
        &mut self,
        reference: TokenId,
        kind: TokenType,
        start: usize,
    ) -> TokenId {
        let id = self.arena.len();
        let mut t = Token::new(kind, start, start + 1);

        let p = self.arena[reference].raw_prev;
        t.raw_prev = p;
        t.raw_next = Some(reference);
        self.arena.push(t);

        match p {
            Some(p) => self.arena[p].raw_next = Some(id),
            None => self.head = Some(id),
        }
        self.arena[reference].raw_prev = Some(id);

        id
    }

    fn push(&mut self, mut t: Token) -> TokenId {
        let id = self.arena.len();
        t.raw_prev = self.tail;
        self.arena.push(t);

        match self.tail {
            Some(tail) => self.arena[tail].raw_next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);

        id
    }

    /// The raw tail, soft-deleted or not.  The scanner's run merging checks
    /// this, so an emptied carriage return correctly breaks a text run.
    pub fn peek_tail(&self) -> Option<TokenId> {
        self.tail
    }

    /// Raw-chain predecessor, soft-deleted slots included.
    pub fn raw_prev_of(&self, id: TokenId) -> Option<TokenId> {
        self.arena[id].raw_prev
    }

    /// Raw-chain successor, soft-deleted slots included.
    pub fn raw_next_of(&self, id: TokenId) -> Option<TokenId> {
        self.arena[id].raw_next
    }

    /// Nearest live (non-empty) token before `id`.
    pub fn prev(&self, id: TokenId) -> Option<TokenId> {
        let mut cur = self.arena[id].raw_prev;
        while let Some(c) = cur {
            if self.arena[c].kind != TokenType::Empty {
                return Some(c);
            }
            cur = self.arena[c].raw_prev;
        }
        None
    }

    /// Nearest live token after `id`.
    pub fn next(&self, id: TokenId) -> Option<TokenId> {
        let mut cur = self.arena[id].raw_next;
        while let Some(c) = cur {
            if self.arena[c].kind != TokenType::Empty {
                return Some(c);
            }
            cur = self.arena[c].raw_next;
        }
        None
    }

    /// First live token after `id` whose type is `kind`.
    pub fn next_of_type(&self, id: TokenId, kind: TokenType) -> Option<TokenId> {
        let mut cur = self.next(id);
        while let Some(c) = cur {
            if self.arena[c].kind == kind {
                return Some(c);
            }
            cur = self.next(c);
        }
        None
    }

    /// Live tokens after `id`, collected while their type stays in `allowed`.
    pub fn nexts_while_in(&self, id: TokenId, allowed: &[TokenType]) -> Vec<TokenId> {
        let mut out = Vec::new();
        let mut cur = self.next(id);
        while let Some(c) = cur {
            if !allowed.contains(&self.arena[c].kind) {
                break;
            }
            out.push(c);
            cur = self.next(c);
        }
        out
    }

    /// Live tokens before `id`, collected while their type stays in
    /// `allowed`, nearest first.
    pub fn prevs_while_in(&self, id: TokenId, allowed: &[TokenType]) -> Vec<TokenId> {
        let mut out = Vec::new();
        let mut cur = self.prev(id);
        while let Some(c) = cur {
            if !allowed.contains(&self.arena[c].kind) {
                break;
            }
            out.push(c);
            cur = self.prev(c);
        }
        out
    }

    /// Live tokens after `id` up to (exclusive) the first token of type
    /// `stop`.  An empty result means `stop` is adjacent or the chain ended.
    pub fn nexts_until_type(&self, id: TokenId, stop: TokenType) -> Vec<TokenId> {
        let mut out = Vec::new();
        let mut cur = self.next(id);
        while let Some(c) = cur {
            if self.arena[c].kind == stop {
                break;
            }
            out.push(c);
            cur = self.next(c);
        }
        out
    }

    /// Live tokens before `id` up to (exclusive) the first token whose type
    /// is in `stops`, nearest first.
    pub fn prevs_until_any_type(&self, id: TokenId, stops: &[TokenType]) -> Vec<TokenId> {
        let mut out = Vec::new();
        let mut cur = self.prev(id);
        while let Some(c) = cur {
            if stops.contains(&self.arena[c].kind) {
                break;
            }
            out.push(c);
            cur = self.prev(c);
        }
        out
    }

    /// Live tokens strictly between `stop` and `id`, walking backwards from
    /// `id`, nearest first.
    pub fn prevs_until_token(&self, id: TokenId, stop: TokenId) -> Vec<TokenId> {
        let mut out = Vec::new();
        let mut cur = self.prev(id);
        while let Some(c) = cur {
            if c == stop {
                break;
            }
            out.push(c);
            cur = self.prev(c);
        }
        out
    }

    /// The exact run of live tokens after `id` matching `kinds` in order, or
    /// `None` if any position differs.
    pub fn next_n_types(&self, id: TokenId, kinds: &[TokenType]) -> Option<Vec<TokenId>> {
        let mut out = Vec::with_capacity(kinds.len());
        let mut cur = id;
        for &kind in kinds {
            let n = self.next(cur)?;
            if self.arena[n].kind != kind {
                return None;
            }
            out.push(n);
            cur = n;
        }
        Some(out)
    }

    /// Bulk soft deletion.
    pub fn set_all_empty(&mut self, ids: &[TokenId]) {
        for &id in ids {
            self.arena[id].kind = TokenType::Empty;
        }
    }

    /// Final serialization: raw order, skipping soft-deleted slots,
    /// concatenating each token's assigned output bytes.
    pub fn serialize(&self) -> String {
        let mut out = Vec::new();
        let mut cur = self.head;
        while let Some(c) = cur {
            let t = &self.arena[c];
            if t.kind != TokenType::Empty && !t.output.is_empty() {
                out.extend_from_slice(&t.output);
            }
            cur = t.raw_next;
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Raw-order iteration over all slots, soft-deleted included.
    pub fn raw_iter(&self) -> RawIter<'_, 'i> {
        RawIter {
            seq: self,
            cur: self.head,
        }
    }
}

/// Iterator over raw slots in chain order; see [`TokenSequence::raw_iter`].
pub struct RawIter<'a, 'i> {
    seq: &'a TokenSequence<'i>,
    cur: Option<TokenId>,
}

impl<'a, 'i> Iterator for RawIter<'a, 'i> {
    type Item = TokenId;

    fn next(&mut self) -> Option<TokenId> {
        let id = self.cur?;
        self.cur = self.seq.raw_next_of(id);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_navigation_skips_soft_deleted_slots() {
        let input = b"abc";
        let mut seq = TokenSequence::new(input);
        let a = seq.push_single(TokenType::Text, 0);
        let b = seq.push_single(TokenType::Text, 1);
        let c = seq.push_single(TokenType::Text, 2);

        seq.tok_mut(b).kind = TokenType::Empty;

        assert_eq!(seq.next(a), Some(c));
        assert_eq!(seq.prev(c), Some(a));
        assert_eq!(seq.raw_next_of(a), Some(b));
    }

    #[test]
    fn insert_before_splices_the_raw_chain() {
        let input = b"xy";
        let mut seq = TokenSequence::new(input);
        let x = seq.push_single(TokenType::Text, 0);
        let y = seq.push_single(TokenType::Space, 1);

        let t = seq.insert_single_before(y, TokenType::Tab, 1);

        assert_eq!(seq.raw_next_of(x), Some(t));
        assert_eq!(seq.raw_next_of(t), Some(y));
        assert_eq!(seq.raw_prev_of(y), Some(t));
    }

    #[test]
    fn insert_before_head_moves_the_head() {
        let input = b"x";
        let mut seq = TokenSequence::new(input);
        let x = seq.push_single(TokenType::Text, 0);
        let t = seq.insert_single_before(x, TokenType::Tab, 0);

        assert_eq!(seq.head(), Some(t));
        assert_eq!(seq.raw_next_of(t), Some(x));
    }

    #[test]
    fn serialization_skips_empty_tokens_with_output() {
        let input = b"ab";
        let mut seq = TokenSequence::new(input);
        let a = seq.push_single(TokenType::Text, 0);
        let b = seq.push_single(TokenType::Text, 1);

        seq.tok_mut(a).output = b"a".to_vec();
        seq.tok_mut(b).output = b"b".to_vec();
        seq.tok_mut(b).kind = TokenType::Empty;

        assert_eq!(seq.serialize(), "a");
    }
}
