use core::fmt;

use bstr::{BStr, ByteSlice};

use crate::data::Data;
use crate::raw;

/// The lexical kind of a number.
///
/// A JSON number is a [`NumberKind::Float`] if it contains a fractional part
/// or an exponent, otherwise it is a [`NumberKind::Integer`].
///
/// # Examples
///
/// ```
/// use anyhow::Context;
/// use json2yaml::{json, NumberKind};
///
/// let doc = json::from_slice("[1, 1.0, 1e3]")?;
/// let root = doc.as_ref().as_sequence().context("expected sequence")?;
///
/// let kinds = root
///     .iter()
///     .flat_map(|v| v.as_number())
///     .map(|n| n.kind())
///     .collect::<Vec<_>>();
///
/// assert_eq!(kinds, [NumberKind::Integer, NumberKind::Float, NumberKind::Float]);
/// # Ok::<_, anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NumberKind {
    /// A number without fraction or exponent.
    Integer,
    /// A number with a fraction, an exponent, or both.
    Float,
}

macro_rules! as_number {
    ($name:ident, $ty:ty, $doc:literal, $lit:literal) => {
        #[doc = concat!("Try and get the value as a ", $doc, ".")]
        ///
        /// # Examples
        ///
        /// ```
        /// use anyhow::Context;
        /// use json2yaml::json;
        ///
        #[doc = concat!("let doc = json::from_slice(\"", stringify!($lit), "\")?;")]
        /// let value = doc.as_ref().as_number().context("expected a number")?;
        #[doc = concat!("let value = value.", stringify!($name), "();")]
        #[doc = concat!("assert_eq!(value, Some(", stringify!($lit), "));")]
        /// # Ok::<_, anyhow::Error>(())
        /// ```
        #[must_use]
        pub fn $name(&self) -> Option<$ty> {
            let string = self.data.str(self.raw.string);
            lexical_core::parse(string).ok()
        }
    };
}

/// A number.
///
/// The value of the number can be accessed through the various `as_*` methods,
/// which parse the source text on demand.
///
/// # Examples
///
/// ```
/// use anyhow::Context;
/// use json2yaml::json;
///
/// let a = json::from_slice("42")?;
/// let a = a.as_ref().as_number().context("expected a number")?;
///
/// assert_eq!(a.as_u32(), Some(42));
/// assert_eq!(a.as_f64(), Some(42.0));
/// # Ok::<_, anyhow::Error>(())
/// ```
pub struct Number<'a> {
    data: &'a Data,
    raw: &'a raw::Number,
}

impl<'a> Number<'a> {
    pub(crate) fn new(data: &'a Data, raw: &'a raw::Number) -> Self {
        Self { data, raw }
    }

    /// Get the lexical kind of the number.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> NumberKind {
        self.raw.kind
    }

    /// Get the raw content of the number, exactly as it appeared in the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyhow::Context;
    /// use json2yaml::json;
    ///
    /// let doc = json::from_slice("3.1415e0")?;
    /// let value = doc.as_ref().as_number().context("expected a number")?;
    /// assert_eq!(value.as_raw(), "3.1415e0");
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn as_raw(&self) -> &'a BStr {
        self.data.str(self.raw.string)
    }

    as_number!(as_f64, f64, "64-bit float", 10.42);
    as_number!(as_u32, u32, "32-bit unsigned integer", 42);
    as_number!(as_u64, u64, "64-bit unsigned integer", 42);
    as_number!(as_i64, i64, "64-bit signed integer", -42);
    as_number!(as_u128, u128, "128-bit unsigned integer", 42);
    as_number!(as_i128, i128, "128-bit signed integer", -42);
}

impl fmt::Debug for Number<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Ok(string) = self.as_raw().to_str() {
            f.write_str(string)
        } else {
            f.write_str("NaN")
        }
    }
}
