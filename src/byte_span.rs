use serde::Deserialize;
use serde::Serialize;

/// Compact byte-offset range of a token in the source text.
///
/// Represents a half-open interval `[start, end)` of 0-based byte offsets.
/// `u32` offsets keep the span at 8 bytes per token while still supporting
/// documents up to 4 GiB, far beyond any executable document seen in
/// practice.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ByteSpan {
    /// Byte offset of the first byte of the token (inclusive).
    pub start: u32,
    /// Byte offset one past the last byte of the token (exclusive).
    pub end: u32,
}

impl ByteSpan {
    /// Creates a span from start (inclusive) and end (exclusive) offsets.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the slice of `source` covered by this span.
    pub fn slice<'src>(&self, source: &'src str) -> &'src str {
        &source[self.start as usize..self.end as usize]
    }
}
