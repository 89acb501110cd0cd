use crate::{Id, Mapping, Number, Sequence, String};

/// An enum which helps to externally discriminate the interior type of a
/// [`Value`].
///
/// See [`Value::as_any`].
///
/// [`Value`]: crate::Value
/// [`Value::as_any`]: crate::Value::as_any
///
/// # Examples
///
/// ```
/// use json2yaml::{json, Any};
///
/// let doc = json::from_slice("[null, true, 1, \"one\", {}, []]")?;
/// let root = doc.as_ref().as_sequence().ok_or("missing root sequence")?;
///
/// let mut iter = root.iter();
/// assert!(matches!(iter.next().map(|v| v.as_any()), Some(Any::Null(..))));
/// assert!(matches!(iter.next().map(|v| v.as_any()), Some(Any::Bool(true))));
/// assert!(matches!(iter.next().map(|v| v.as_any()), Some(Any::Number(..))));
/// assert!(matches!(iter.next().map(|v| v.as_any()), Some(Any::String(..))));
/// assert!(matches!(iter.next().map(|v| v.as_any()), Some(Any::Mapping(..))));
/// assert!(matches!(iter.next().map(|v| v.as_any()), Some(Any::Sequence(..))));
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[non_exhaustive]
pub enum Any<'a> {
    /// A null value, identified by its [`Id`].
    Null(Id),
    /// A boolean value.
    Bool(bool),
    /// The type is a [`Number`].
    Number(Number<'a>),
    /// The type is a [`String`].
    String(String<'a>),
    /// The type is a [`Mapping`].
    Mapping(Mapping<'a>),
    /// The type is a [`Sequence`].
    Sequence(Sequence<'a>),
}
