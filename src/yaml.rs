//! Block-style YAML encoding of a [`Document`].
//!
//! The output is indentation based and never uses inline flow collections,
//! except for `{}` and `[]` which are the only way to write an empty mapping
//! or sequence.
//!
//! * Nested mappings are indented by two spaces.
//! * Sequences under a mapping key line up with the key.
//! * Collections inside of a sequence item start on the same line as the `- `
//!   marker.
//! * Strings are written plain when a YAML parser reads them back as the same
//!   string, otherwise they are double-quoted.
//! * Floats always include a `.`, so they never read back as integers.
//!
//! # Examples
//!
//! ```
//! use json2yaml::{json, yaml};
//!
//! let doc = json::from_slice(r#"
//! {
//!     "name": "Descartes",
//!     "born": 1596,
//!     "height": 1.6,
//!     "books": [
//!         {"year": 1637, "title": "Discours de la méthode"},
//!         {"year": 1641, "title": "Meditationes de prima philosophia"}
//!     ],
//!     "motto": "cogito, ergo sum: I think",
//!     "spouse": null
//! }
//! "#)?;
//!
//! assert_eq!(
//!     yaml::to_string(&doc),
//!     r#"name: Descartes
//! born: 1596
//! height: 1.6
//! books:
//! - year: 1637
//!   title: Discours de la méthode
//! - year: 1641
//!   title: Meditationes de prima philosophia
//! motto: "cogito, ergo sum: I think"
//! spouse: null
//! "#
//! );
//! # Ok::<_, json2yaml::json::Error>(())
//! ```

#[cfg(test)]
mod tests;

mod emit;
pub(crate) use self::emit::Emitter;

mod scalar;

use std::io;

use crate::Document;

/// Encode a document as a YAML string.
#[must_use]
pub fn to_string(doc: &Document) -> String {
    doc.to_string()
}

/// Encode a document as YAML into the given writer.
///
/// # Errors
///
/// Errors in case the output cannot be written to.
pub fn to_writer<O>(mut output: O, doc: &Document) -> io::Result<()>
where
    O: io::Write,
{
    write!(output, "{doc}")
}
