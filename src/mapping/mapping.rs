use core::fmt;

use bstr::BStr;

use crate::data::{Data, Id};
use crate::mapping::Iter;
use crate::Value;

/// Accessor for a mapping.
///
/// Keys are unique and iterate in the order they first appeared in the input.
///
/// # Examples
///
/// ```
/// use anyhow::Context;
/// use json2yaml::json;
///
/// let doc = json::from_slice(r#"{"one": 1, "two": 2, "one": 3}"#)?;
/// let root = doc.as_ref().as_mapping().context("missing root mapping")?;
///
/// assert_eq!(root.len(), 2);
/// assert_eq!(root.get("one").and_then(|v| v.as_u32()), Some(3));
///
/// let keys = root.iter().map(|(key, _)| key.to_string()).collect::<Vec<_>>();
/// assert_eq!(keys, ["one", "two"]);
/// # Ok::<_, anyhow::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct Mapping<'a> {
    data: &'a Data,
    pub(crate) id: Id,
}

impl<'a> Mapping<'a> {
    pub(crate) fn new(data: &'a Data, id: Id) -> Self {
        Self { data, id }
    }

    /// Get the opaque [`Id`] associated with this mapping.
    #[must_use]
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the length of the mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyhow::Context;
    /// use json2yaml::json;
    ///
    /// let doc = json::from_slice(r#"{"one": 1, "two": 2, "three": 3}"#)?;
    /// let root = doc.as_ref().as_mapping().context("missing root mapping")?;
    /// assert_eq!(root.len(), 3);
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.data.mapping(self.id).items.len()
    }

    /// Test if the mapping is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyhow::Context;
    /// use json2yaml::json;
    ///
    /// let doc = json::from_slice("{}")?;
    /// let root = doc.as_ref().as_mapping().context("missing root mapping")?;
    /// assert!(root.is_empty());
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.mapping(self.id).items.is_empty()
    }

    /// Get a value from the mapping by its key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value<'a>> {
        for item in &self.data.mapping(self.id).items {
            if self.data.str(item.key) == key {
                return Some(Value::new(self.data, item.value));
            }
        }

        None
    }

    /// Returns an iterator over the [Mapping].
    ///
    /// # Examples
    ///
    /// ```
    /// use anyhow::Context;
    /// use json2yaml::json;
    ///
    /// let doc = json::from_slice(r#"{"one": 1, "two": 2, "three": 3}"#)?;
    /// let root = doc.as_ref().as_mapping().context("missing root mapping")?;
    /// assert!(root.iter().flat_map(|(_, value)| value.as_u32()).eq([1, 2, 3]));
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn iter(&self) -> Iter<'a> {
        Iter::new(self.data, &self.data.mapping(self.id).items)
    }
}

impl fmt::Debug for Mapping<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for Mapping<'a> {
    type Item = (&'a BStr, Value<'a>);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &Mapping<'a> {
    type Item = (&'a BStr, Value<'a>);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
