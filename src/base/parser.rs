use std::ops::Range;

/// A byte cursor over the input being decoded.
#[derive(Clone)]
pub(crate) struct Parser<'a> {
    input: &'a [u8],
    n: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self { input, n: 0 }
    }

    /// Get the full input of the parser.
    #[inline]
    pub(crate) fn input(&self) -> &'a [u8] {
        self.input
    }

    /// Span of a single byte at the current position, clamped to the input.
    #[inline]
    pub(crate) fn span_one(&self) -> Range<usize> {
        self.n..self.n.wrapping_add(1).min(self.input.len())
    }

    /// Bump the given number of bytes of input.
    #[inline]
    pub(crate) fn bump(&mut self, n: usize) {
        self.n = self.n.wrapping_add(n).min(self.input.len());
    }

    /// Get a string from the given starting position to current cursor
    /// location.
    #[inline]
    pub(crate) fn string(&self, start: usize) -> &'a [u8] {
        self.input.get(start..self.n).unwrap_or_default()
    }

    /// Test if eof.
    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.n == self.input.len()
    }

    /// Advance to the next occurrence of either byte, or to the end of input.
    pub(crate) fn find2(&mut self, a: u8, b: u8) {
        let input = self.input.get(self.n..).unwrap_or_default();

        if let Some(n) = memchr::memchr2(a, b, input) {
            self.bump(n);
        } else {
            self.n = self.input.len();
        }
    }

    /// Consume the given literal if the input continues with it.
    pub(crate) fn eat(&mut self, literal: &[u8]) -> bool {
        let end = self.n.wrapping_add(literal.len());

        if self.input.get(self.n..end) == Some(literal) {
            self.n = end;
            return true;
        }

        false
    }

    /// Peek the next value.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        let Some(&b) = self.input.get(self.n) else {
            return 0;
        };

        b
    }

    /// Get the given position.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.n
    }
}
