use std::ops::Range;

/// A span which uniquely specifies a range of bytes in the files of an
/// [`InputFiles`](crate::InputFiles)
///
/// Spans of different files never overlap, so a span alone is enough to find its file.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Default)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    /// Creates a new `Span` from the starting byte and its length
    pub fn new(start: usize, len: usize) -> Self {
        Span { start, len }
    }

    /// Returns the start of this span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the end of this span
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Returns the length of this span
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns, whether this span is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Constructs a new span which ranges from the start of this span to the end of the other span
    pub fn until(&self, other: Span) -> Self {
        assert!(
            self.start <= other.end(),
            "Span length must not be negative"
        );
        Span::new(self.start, other.end() - self.start)
    }

    /// Returns whether `other` lies completely inside of this span
    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end() <= self.end()
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Converts this span, given relative to `text`, into character bounds
    ///
    /// Byte offsets that fall inside of a multi-byte character are clamped to the text.
    pub fn char_bounds(&self, text: &str) -> (usize, usize) {
        let count = |byte: usize| {
            text.char_indices()
                .take_while(|(index, _)| *index < byte)
                .count()
        };
        (count(self.start), count(self.end()))
    }
}

impl From<Range<usize>> for Span {
    fn from(value: Range<usize>) -> Self {
        Span::new(value.start, value.end.saturating_sub(value.start))
    }
}
