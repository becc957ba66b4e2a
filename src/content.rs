//! Char-granular view over decoded text.
//!
//! Chunk sizes, window positions and literal lengths all count Unicode
//! scalar values, while slicing still hands out borrowed `&str`.

/// Text plus the byte offset of every char boundary.
#[derive(Debug)]
pub(crate) struct Text<'a> {
    src: &'a str,
    /// `bounds[i]` is the byte offset of char `i`; the last entry is `src.len()`.
    bounds: Vec<usize>,
}

impl<'a> Text<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        let mut bounds: Vec<usize> = src.char_indices().map(|(i, _)| i).collect();
        bounds.push(src.len());
        Self { src, bounds }
    }

    /// Number of chars.
    pub(crate) fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    /// Chars `start..end`, clamped to the end of the text.
    pub(crate) fn span(&self, start: usize, end: usize) -> &'a str {
        let end = end.min(self.len());
        let start = start.min(end);
        &self.src[self.bounds[start]..self.bounds[end]]
    }
}
