use core::fmt;
use core::ops::Deref;

use bstr::BStr;

use crate::data::Data;
use crate::raw;

/// A decoded string.
///
/// The string is accessed through a [`BStr`] coercion. Strings produced by the
/// JSON decoder are always valid UTF-8, so [`bstr::ByteSlice::to_str`] will
/// succeed on them.
///
/// # Examples
///
/// ```
/// use anyhow::Context;
/// use bstr::ByteSlice;
/// use json2yaml::json;
///
/// let a = json::from_slice(r#""Hello\n World""#)?;
/// let a = a.as_ref().as_string().context("expected string")?;
/// let a = a.to_str()?;
/// assert_eq!(a, "Hello\n World");
/// # Ok::<_, anyhow::Error>(())
/// ```
pub struct String<'a> {
    data: &'a Data,
    raw: &'a raw::String,
}

impl<'a> String<'a> {
    pub(crate) fn new(data: &'a Data, raw: &'a raw::String) -> Self {
        Self { data, raw }
    }
}

impl Deref for String<'_> {
    type Target = BStr;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.data.str(self.raw.id)
    }
}

impl fmt::Debug for String<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.data.str(self.raw.id), f)
    }
}
