use core::fmt;
use core::ops::Range;

use bstr::ByteSlice;

/// An error raised while decoding JSON.
///
/// # Examples
///
/// ```
/// use json2yaml::json;
///
/// let input = "{a: 1}";
/// let error = json::from_slice(input).unwrap_err();
///
/// assert_eq!(error.span(), 1..2);
/// assert_eq!(error.to_string(), "expected object key");
/// assert_eq!(error.location(input).to_string(), "1:2");
/// ```
#[derive(Debug)]
pub struct Error {
    span: Range<usize>,
    kind: ErrorKind,
}

impl Error {
    /// Construct a new error.
    #[inline]
    pub(crate) const fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Get the range of the input span.
    #[must_use]
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Get the kind of the error.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Resolve the start of the error span to a line and column in the input
    /// that produced it.
    ///
    /// # Examples
    ///
    /// ```
    /// use json2yaml::json;
    ///
    /// let input = "{\n  \"a\": 1,\n  \"b\": tru\n}";
    /// let error = json::from_slice(input).unwrap_err();
    ///
    /// let location = error.location(input);
    /// assert_eq!((location.line, location.column), (3, 8));
    /// ```
    #[must_use]
    pub fn location<I>(&self, input: I) -> Location
    where
        I: AsRef<[u8]>,
    {
        let input = input.as_ref();
        let before = input.get(..self.span.start).unwrap_or(input);

        let line = before.iter().filter(|&&b| b == b'\n').count().wrapping_add(1);
        let start = before.rfind_byte(b'\n').map_or(0, |n| n.wrapping_add(1));

        let column = before
            .get(start..)
            .unwrap_or_default()
            .chars()
            .count()
            .wrapping_add(1);

        Location { line, column }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for Error {}

/// A 1-based line and column inside of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Location {
    /// The line, starting at 1.
    pub line: usize,
    /// The column in characters, starting at 1.
    pub column: usize,
}

impl fmt::Display for Location {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The kind of a decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Expected a value.
    ExpectedValue,
    /// Expected the end of input after the document.
    ExpectedEof,
    /// Expected a string key in an object.
    ExpectedObjectKey,
    /// Expected `:` after an object key.
    ExpectedColon,
    /// Expected `,` or `}` in an object.
    ExpectedObjectSeparator,
    /// Expected `,` or `]` in an array.
    ExpectedArraySeparator,
    /// A trailing comma before `}` or `]`.
    TrailingComma,
    /// A string without its closing quote.
    UnterminatedString,
    /// An unescaped control character inside of a string.
    ControlCharacter,
    /// An invalid escape sequence.
    BadEscape,
    /// An invalid `\u` escape sequence.
    BadUnicodeEscape,
    /// A UTF-16 surrogate escape without its pair.
    LoneSurrogate,
    /// A string which is not valid UTF-8.
    InvalidUtf8,
    /// A malformed number.
    BadNumber,
    /// Arrays and objects nested too deeply.
    RecursionLimitExceeded,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ExpectedValue => write!(f, "expected value"),
            ErrorKind::ExpectedEof => write!(f, "trailing characters after document"),
            ErrorKind::ExpectedObjectKey => write!(f, "expected object key"),
            ErrorKind::ExpectedColon => write!(f, "expected `:` after object key"),
            ErrorKind::ExpectedObjectSeparator => write!(f, "expected `,` or `}}`"),
            ErrorKind::ExpectedArraySeparator => write!(f, "expected `,` or `]`"),
            ErrorKind::TrailingComma => write!(f, "trailing comma"),
            ErrorKind::UnterminatedString => write!(f, "unterminated string"),
            ErrorKind::ControlCharacter => write!(f, "control character in string"),
            ErrorKind::BadEscape => write!(f, "invalid escape"),
            ErrorKind::BadUnicodeEscape => write!(f, "invalid unicode escape"),
            ErrorKind::LoneSurrogate => write!(f, "unpaired surrogate in unicode escape"),
            ErrorKind::InvalidUtf8 => write!(f, "string is not valid utf-8"),
            ErrorKind::BadNumber => write!(f, "invalid number"),
            ErrorKind::RecursionLimitExceeded => write!(f, "recursion limit exceeded"),
        }
    }
}
