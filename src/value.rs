use core::fmt;

use bstr::{BStr, ByteSlice};

use crate::data::{Data, Id};
use crate::raw::Raw;
use crate::{Any, Mapping, Number, Sequence, String};

macro_rules! as_number {
    ($name:ident, $ty:ty, $doc:literal, $lit:literal) => {
        #[doc = concat!("Try and get the value as a ", $doc, ".")]
        ///
        /// # Examples
        ///
        /// ```
        /// use json2yaml::json;
        ///
        #[doc = concat!("let doc = json::from_slice(\"", stringify!($lit), "\")?;")]
        #[doc = concat!("let value = doc.as_ref().", stringify!($name), "();")]
        #[doc = concat!("assert_eq!(value, Some(", stringify!($lit), "));")]
        /// # Ok::<_, Box<dyn std::error::Error>>(())
        /// ```
        #[must_use]
        #[inline]
        pub fn $name(&self) -> Option<$ty> {
            self.as_number()?.$name()
        }
    };
}

/// A value inside of the document.
///
/// # Examples
///
/// ```
/// use json2yaml::json;
///
/// let doc = json::from_slice("\"string\"")?;
/// assert_eq!(doc.as_ref().as_str(), Some("string"));
///
/// let doc = json::from_slice("\"an \\\"escaped\\\" string\"")?;
/// assert_eq!(doc.as_ref().as_str(), Some("an \"escaped\" string"));
///
/// let doc = json::from_slice("true")?;
/// assert_eq!(doc.as_ref().as_bool(), Some(true));
///
/// let doc = json::from_slice("null")?;
/// assert!(doc.as_ref().is_null());
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy)]
pub struct Value<'a> {
    pub(crate) data: &'a Data,
    pub(crate) id: Id,
}

impl<'a> Value<'a> {
    pub(crate) fn new(data: &'a Data, id: Id) -> Self {
        Self { data, id }
    }

    /// Get the opaque [`Id`] associated with this value.
    ///
    /// This can be used through [`Document::value`] to look up the same value
    /// again.
    ///
    /// [`Document::value`]: crate::Document::value
    ///
    /// # Examples
    ///
    /// ```
    /// use anyhow::Context;
    /// use json2yaml::json;
    ///
    /// let doc = json::from_slice(r#"{"first": 32, "second": [1, 2, 3]}"#)?;
    ///
    /// let root = doc.as_ref().as_mapping().context("missing mapping")?;
    /// let second = root.get("second").context("missing second")?;
    /// let id = second.id();
    ///
    /// // Reference the same value again using the id.
    /// let second = doc.value(id).as_sequence().context("missing id")?;
    /// assert!(second.iter().flat_map(|v| v.as_u32()).eq([1, 2, 3]));
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Coerce into [`Any`] to help discriminate the value type.
    #[must_use]
    pub fn as_any(&self) -> Any<'a> {
        match self.data.raw(self.id) {
            Raw::Null => Any::Null(self.id),
            Raw::Boolean(value) => Any::Bool(*value),
            Raw::Number(raw) => Any::Number(Number::new(self.data, raw)),
            Raw::String(raw) => Any::String(String::new(self.data, raw)),
            Raw::Mapping(..) => Any::Mapping(Mapping::new(self.data, self.id)),
            Raw::Sequence(..) => Any::Sequence(Sequence::new(self.data, self.id)),
        }
    }

    /// Test if the value is `null`.
    #[must_use]
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self.data.raw(self.id), Raw::Null)
    }

    /// Get the value as a [`bool`].
    ///
    /// # Examples
    ///
    /// ```
    /// use json2yaml::json;
    ///
    /// let doc = json::from_slice("[true, false, \"true\"]")?;
    /// let root = doc.as_ref().as_sequence().ok_or("expected sequence")?;
    /// let values = root.iter().map(|v| v.as_bool()).collect::<Vec<_>>();
    /// assert_eq!(values, [Some(true), Some(false), None]);
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self.data.raw(self.id) {
            Raw::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the value as a [`BStr`].
    #[must_use]
    #[inline]
    pub fn as_bstr(&self) -> Option<&'a BStr> {
        match self.data.raw(self.id) {
            Raw::String(raw) => Some(self.data.str(raw.id)),
            _ => None,
        }
    }

    /// Get the value as a [`str`].
    ///
    /// See [`Value::as_bstr`] for an alternative.
    ///
    /// # Examples
    ///
    /// ```
    /// use json2yaml::json;
    ///
    /// let doc = json::from_slice(r#"["It's a string!", "It's a string!"]"#)?;
    /// let root = doc.as_ref().as_sequence().ok_or("expected sequence")?;
    ///
    /// for item in root {
    ///     assert_eq!(item.as_str(), Some("It's a string!"));
    /// }
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> Option<&'a str> {
        self.as_bstr()?.to_str().ok()
    }

    /// Get the value as a [`String`].
    #[must_use]
    #[inline]
    pub fn as_string(&self) -> Option<String<'a>> {
        match self.data.raw(self.id) {
            Raw::String(raw) => Some(String::new(self.data, raw)),
            _ => None,
        }
    }

    /// Get the value as a [`Number`].
    #[must_use]
    #[inline]
    pub fn as_number(&self) -> Option<Number<'a>> {
        match self.data.raw(self.id) {
            Raw::Number(raw) => Some(Number::new(self.data, raw)),
            _ => None,
        }
    }

    /// Get the value as a [`Mapping`].
    ///
    /// # Examples
    ///
    /// ```
    /// use anyhow::Context;
    /// use json2yaml::json;
    ///
    /// let doc = json::from_slice(r#"{"number1": 10, "number2": 20}"#)?;
    /// let root = doc.as_ref().as_mapping().context("missing root mapping")?;
    ///
    /// assert_eq!(root.get("number1").and_then(|v| v.as_u32()), Some(10));
    /// assert_eq!(root.get("number2").and_then(|v| v.as_u32()), Some(20));
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn as_mapping(&self) -> Option<Mapping<'a>> {
        match self.data.raw(self.id) {
            Raw::Mapping(..) => Some(Mapping::new(self.data, self.id)),
            _ => None,
        }
    }

    /// Get the value as a [`Sequence`].
    ///
    /// # Examples
    ///
    /// ```
    /// use anyhow::Context;
    /// use json2yaml::json;
    ///
    /// let doc = json::from_slice("[1, 2, 3]")?;
    /// let root = doc.as_ref().as_sequence().context("missing root sequence")?;
    /// assert!(root.iter().flat_map(|v| v.as_u32()).eq([1, 2, 3]));
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn as_sequence(&self) -> Option<Sequence<'a>> {
        match self.data.raw(self.id) {
            Raw::Sequence(..) => Some(Sequence::new(self.data, self.id)),
            _ => None,
        }
    }

    as_number!(as_f64, f64, "64-bit float", 10.42);
    as_number!(as_u32, u32, "32-bit unsigned integer", 42);
    as_number!(as_u64, u64, "64-bit unsigned integer", 42);
    as_number!(as_i64, i64, "64-bit signed integer", -42);
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_any() {
            Any::Null(..) => f.write_str("null"),
            Any::Bool(value) => fmt::Debug::fmt(&value, f),
            Any::Number(number) => fmt::Debug::fmt(&number, f),
            Any::String(string) => fmt::Debug::fmt(&string, f),
            Any::Mapping(mapping) => fmt::Debug::fmt(&mapping, f),
            Any::Sequence(sequence) => fmt::Debug::fmt(&sequence, f),
        }
    }
}
