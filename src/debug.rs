//! Stdout traces for the two debug options.  These are development aids;
//! nothing in the compile pipeline depends on them.

use crate::sequence::TokenSequence;
use crate::tokens::TokenType;

/// One line per raw slot: arena index, span, short type mnemonic, and the
/// covered input bytes.  Soft-deleted slots are printed too, so the trace
/// shows what resolution removed.
pub(crate) fn print_tokens(seq: &TokenSequence) {
    for id in seq.raw_iter() {
        let t = seq.tok(id);
        let bytes = if t.kind == TokenType::Empty {
            String::new()
        } else {
            String::from_utf8_lossy(seq.bytes(id)).into_owned()
        };
        println!(
            "{:>4} [{:>4}..{:<4}] {:<12} {:?}",
            id,
            t.start,
            t.end,
            t.kind.short_name(),
            bytes,
        );
    }
}

pub(crate) fn print_output(output: &str) {
    println!("{}", output);
}
