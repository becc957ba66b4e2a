//! Chunk-aligned scan of the new content against the old chunk index.

use crate::{content::Text, hash::fingerprint, index::ChunkIndex, types::DiffEvent};

/// Walk `new` with a `chunk_size`-char window and classify every window.
///
/// * A window whose fingerprint is indexed becomes `Match(position)` and the
///   window jumps a whole chunk ahead.
/// * Otherwise its first char joins the pending literal and the window
///   slides by one char, so matches are found again after insertions or
///   deletions shift the chunk grid.
/// * Once the window reaches the end of `new` the scan stops: the pending
///   literal and the remaining window are emitted as literals, in that
///   order. The final window is never looked up.
///
/// Greedy and single pass, `O(len × chunk_size)` hashing in the worst case.
pub fn scan<'a>(new: &'a str, index: &ChunkIndex, chunk_size: usize) -> Vec<DiffEvent<'a>> {
    let text = Text::new(new);
    let len = text.len();
    let mut events = Vec::new();
    // first char of the not yet emitted literal
    let mut pending: Option<usize> = None;
    let mut current = 0;
    let mut last_match = 0;

    loop {
        let end = current + chunk_size;
        if end >= len {
            if let Some(start) = pending.take() {
                events.push(DiffEvent::Literal(text.span(start, current)));
            }
            let tail = text.span(current, len);
            if !tail.is_empty() {
                events.push(DiffEvent::Literal(tail));
            }
            break;
        }

        let window = text.span(current, end);
        match index.select(&fingerprint(window), last_match) {
            Some(pos) => {
                if let Some(start) = pending.take() {
                    events.push(DiffEvent::Literal(text.span(start, current)));
                }
                events.push(DiffEvent::Match(pos));
                last_match = pos;
                current = end;
            }
            None => {
                pending.get_or_insert(current);
                current += 1;
            }
        }
    }

    tracing::debug!(
        chars = len,
        events = events.len(),
        matches = events.iter().filter(|e| matches!(e, DiffEvent::Match(_))).count(),
        "scanned new content"
    );
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use DiffEvent::{Literal, Match};

    fn run(old: &str, new: &'static str, chunk_size: usize) -> Vec<DiffEvent<'static>> {
        let index = ChunkIndex::build(old, chunk_size);
        scan(new, &index, chunk_size)
    }

    #[test]
    fn empty_new_content() {
        assert!(run("ABCDEFGHIJKL", "", 12).is_empty());
    }

    #[test]
    fn empty_old_content_is_all_literal() {
        assert_eq!(run("", "hello", 12), vec![Literal("hello")]);
        assert_eq!(run("", "hello world", 3), vec![
            Literal("hello wo"),
            Literal("rld")
        ]);
    }

    #[test]
    fn final_window_is_never_matched() {
        // identical content, but the only window is the final one
        assert_eq!(run("ABCDEFGHIJKL", "ABCDEFGHIJKL", 12), vec![Literal(
            "ABCDEFGHIJKL"
        )]);
    }

    #[test]
    fn insertion_between_chunks() {
        let old = "ABCDEFGHIJKLMNOPQRSTUVWX";
        assert_eq!(run(old, "ABCDEFGHIJKLXXMNOPQRSTUVWX", 12), vec![
            Match(0),
            Literal("XX"),
            Literal("MNOPQRSTUVWX"),
        ]);
        assert_eq!(run(old, "ABCDEFGHIJKLXXMNOPQRSTUVWX!", 12), vec![
            Match(0),
            Literal("XX"),
            Match(1),
            Literal("!"),
        ]);
    }

    #[test]
    fn reordered_chunks() {
        let old = "AAAAAAAAAAAABBBBBBBBBBBB";
        assert_eq!(run(old, "BBBBBBBBBBBBAAAAAAAAAAAA?", 12), vec![
            Match(1),
            Match(0),
            Literal("?"),
        ]);
    }

    #[test]
    fn repeated_chunk_follows_locality() {
        // old chunks: 0 ab, 1 cd, 2 ab, 3 ef
        let old = "abcdabef";
        assert_eq!(run(old, "cdabefxx", 2), vec![
            Match(1),
            Match(2),
            Match(3),
            Literal("xx"),
        ]);
        assert_eq!(run(old, "ababxx", 2), vec![Match(0), Match(0), Literal("xx")]);
    }

    #[test]
    fn multibyte_windows() {
        let old = "αβγδεζ";
        assert_eq!(run(old, "αβγ-δεζ!", 3), vec![
            Match(0),
            Literal("-"),
            Match(1),
            Literal("!"),
        ]);
    }
}
