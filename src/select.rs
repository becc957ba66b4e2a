//! Locality-biased choice among old chunks sharing a fingerprint.

/// Pick the candidate closest to `last`, the previously matched position.
///
/// `candidates` must be strictly ascending. The walk stops at the first
/// candidate `>= last`: if the one before it is `<= last` the nearer of the
/// two wins, ties going to the later position. A list lying entirely above
/// `last` yields its first element, a list lying entirely below yields its
/// last element.
///
/// Keeps consecutive matches moving forward so encoded runs stay long.
pub fn select(candidates: &[usize], last: usize) -> Option<usize> {
    let (&first, rest) = candidates.split_first()?;
    if rest.is_empty() {
        return Some(first);
    }

    let mut prev = first;
    for &cur in candidates {
        if cur >= last && prev <= last {
            let pick = if last - prev >= cur - last { cur } else { prev };
            tracing::trace!(last, prev, cur, pick, "bracketed candidate");
            return Some(pick);
        }
        if cur >= last {
            // only reachable on the first candidate: nothing lies below `last`
            return Some(prev);
        }
        prev = cur;
    }
    Some(prev)
}
