//! Strict JSON decoding into a [`Document`].
//!
//! The decoder accepts exactly the grammar of [RFC 8259]: no comments, no
//! trailing commas, no unquoted keys and no non-finite number literals.
//! Numbers keep their source text and are classified as integers or floats by
//! their lexical form, see [`NumberKind`].
//!
//! [RFC 8259]: https://www.rfc-editor.org/rfc/rfc8259
//! [`NumberKind`]: crate::NumberKind
//!
//! # Examples
//!
//! ```
//! use anyhow::Context;
//! use json2yaml::json;
//!
//! let doc = json::from_slice(r#"{"name": "Descartes", "year": 1596}"#)?;
//! let root = doc.as_ref().as_mapping().context("missing root mapping")?;
//!
//! assert_eq!(root.get("name").and_then(|v| v.as_str()), Some("Descartes"));
//! assert_eq!(root.get("year").and_then(|v| v.as_u32()), Some(1596));
//! # Ok::<_, anyhow::Error>(())
//! ```

#[cfg(test)]
mod tests;

mod error;
pub use self::error::{Error, ErrorKind, Location};

mod parsing;
use self::parsing::Parser;

use crate::Document;

/// Decode a JSON document.
///
/// # Errors
///
/// Errors in case the input is not well-formed JSON.
///
/// # Examples
///
/// ```
/// use json2yaml::json;
///
/// let doc = json::from_slice("[1, 2.5, \"three\"]")?;
/// assert_eq!(doc.to_string(), "- 1\n- 2.5\n- three\n");
///
/// assert!(json::from_slice("[1, 2,]").is_err());
/// # Ok::<_, json::Error>(())
/// ```
pub fn from_slice<D>(input: D) -> Result<Document, Error>
where
    D: AsRef<[u8]>,
{
    let input = input.as_ref();
    let parser = Parser::new(input);
    let doc = parser.parse()?;
    tracing::trace!(bytes = input.len(), values = doc.value_count(), "decoded json");
    Ok(doc)
}
