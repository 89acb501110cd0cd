use core::fmt;

use crate::data::{Data, Id};
use crate::sequence::Iter;
use crate::Value;

/// Accessor for a sequence.
///
/// # Examples
///
/// ```
/// use anyhow::Context;
/// use json2yaml::json;
///
/// let doc = json::from_slice(r#"["one", "two", ["three", {"four": 2, "five": 1}], "six"]"#)?;
///
/// let root = doc.as_ref().as_sequence().context("missing root sequence")?;
///
/// assert_eq!(root.get(0).and_then(|v| v.as_str()), Some("one"));
/// assert_eq!(root.get(1).and_then(|v| v.as_str()), Some("two"));
///
/// let three = root
///     .get(2)
///     .and_then(|v| v.as_sequence())
///     .context("missing three")?;
///
/// assert_eq!(three.get(0).and_then(|v| v.as_str()), Some("three"));
///
/// let four = three
///     .get(1)
///     .and_then(|v| v.as_mapping())
///     .context("missing four")?;
///
/// assert_eq!(four.get("four").and_then(|v| v.as_u32()), Some(2));
/// assert_eq!(four.get("five").and_then(|v| v.as_u32()), Some(1));
///
/// assert_eq!(root.get(3).and_then(|v| v.as_str()), Some("six"));
/// # Ok::<_, anyhow::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct Sequence<'a> {
    data: &'a Data,
    pub(crate) id: Id,
}

impl<'a> Sequence<'a> {
    pub(crate) fn new(data: &'a Data, id: Id) -> Self {
        Self { data, id }
    }

    /// Get the opaque [`Id`] associated with this sequence.
    #[must_use]
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the length of the sequence.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.data.sequence(self.id).items.len()
    }

    /// Test if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyhow::Context;
    /// use json2yaml::json;
    ///
    /// let doc = json::from_slice("[]")?;
    /// let root = doc.as_ref().as_sequence().context("missing root sequence")?;
    /// assert!(root.is_empty());
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.sequence(self.id).items.is_empty()
    }

    /// Get a value from the sequence by its index.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> Option<Value<'a>> {
        let id = self.data.sequence(self.id).items.get(index)?;
        Some(Value::new(self.data, *id))
    }

    /// Get the first value of the sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyhow::Context;
    /// use json2yaml::json;
    ///
    /// let doc = json::from_slice("[1, 2, 3]")?;
    /// let root = doc.as_ref().as_sequence().context("missing root sequence")?;
    /// assert_eq!(root.first().and_then(|v| v.as_u32()), Some(1));
    /// assert_eq!(root.last().and_then(|v| v.as_u32()), Some(3));
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn first(&self) -> Option<Value<'a>> {
        let id = self.data.sequence(self.id).items.first()?;
        Some(Value::new(self.data, *id))
    }

    /// Get the last value of the sequence.
    #[must_use]
    #[inline]
    pub fn last(&self) -> Option<Value<'a>> {
        let id = self.data.sequence(self.id).items.last()?;
        Some(Value::new(self.data, *id))
    }

    /// Returns an iterator over the [Sequence].
    #[must_use]
    #[inline]
    pub fn iter(&self) -> Iter<'a> {
        Iter::new(self.data, &self.data.sequence(self.id).items)
    }
}

impl fmt::Debug for Sequence<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for Sequence<'a> {
    type Item = Value<'a>;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &Sequence<'a> {
    type Item = Value<'a>;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
