use core::fmt;
use std::io;

use crate::data::{Data, Id};
use crate::yaml;
use crate::Value;

/// A decoded document.
///
/// The document owns every value in the tree. Values are accessed through
/// borrowed views such as [`Value`], starting from [`Document::as_ref`].
///
/// The [`Display`] implementation of a document produces block-style YAML.
///
/// [`Display`]: std::fmt::Display
///
/// # Examples
///
/// ```
/// use json2yaml::json;
///
/// let doc = json::from_slice(r#"{"a": 1, "b": [1, 2, 3]}"#)?;
///
/// assert_eq!(
///     doc.to_string(),
///     "a: 1\nb:\n- 1\n- 2\n- 3\n"
/// );
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct Document {
    pub(crate) root: Id,
    pub(crate) data: Data,
}

impl Document {
    /// Construct a new document.
    pub(crate) fn new(root: Id, data: Data) -> Self {
        Self { root, data }
    }

    /// Get the root value of a document.
    ///
    /// # Examples
    ///
    /// ```
    /// use json2yaml::json;
    ///
    /// let doc = json::from_slice("32")?;
    /// assert_eq!(doc.as_ref().as_u32(), Some(32));
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn as_ref(&self) -> Value<'_> {
        Value::new(&self.data, self.root)
    }

    /// Get a value with the given [`Id`].
    ///
    /// # Panics
    ///
    /// Values constructed with identifiers from a different document may
    /// panic.
    #[must_use]
    #[inline]
    pub fn value(&self, id: Id) -> Value<'_> {
        Value::new(&self.data, id)
    }

    /// Number of values stored in the document, including the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use json2yaml::json;
    ///
    /// let doc = json::from_slice(r#"{"a": [1, 2], "b": null}"#)?;
    /// assert_eq!(doc.value_count(), 5);
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn value_count(&self) -> usize {
        self.data.len()
    }

    /// Write the document as block-style YAML to the given output.
    ///
    /// # Errors
    ///
    /// Errors in case the output cannot be written to.
    ///
    /// # Examples
    ///
    /// ```
    /// use json2yaml::json;
    ///
    /// let doc = json::from_slice(r#"{"greeting": "Hello World!"}"#)?;
    ///
    /// let mut output = Vec::new();
    /// doc.write_to(&mut output)?;
    /// assert_eq!(output, b"greeting: Hello World!\n");
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    pub fn write_to<O>(&self, output: O) -> io::Result<()>
    where
        O: io::Write,
    {
        yaml::to_writer(output, self)
    }
}

impl fmt::Display for Document {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        yaml::Emitter::new(&self.data).document(f, self.root)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.as_ref())
            .finish_non_exhaustive()
    }
}
