//! Convert JSON documents into block-style YAML.
//!
//! Conversion happens in two steps. A JSON document is decoded with
//! [`json::from_slice`] into a [`Document`], which is a tree of mappings,
//! sequences and scalars. The document is then encoded as YAML through its
//! [`std::fmt::Display`] implementation, [`Document::write_to`] or
//! [`yaml::to_string`].
//!
//! [`convert`] and [`convert_path`] do both steps at once.
//!
//! <br>
//!
//! ## Working with documents
//!
//! A document owns all of its values. Access happens through borrowed views
//! starting at [`Document::as_ref`], and every value can be addressed
//! *globally* through its [identifier][Id].
//!
//! ```
//! use anyhow::Context;
//! use json2yaml::json;
//!
//! let doc = json::from_slice(r#"{"greeting": "Hello World!", "numbers": [10, 24, 30]}"#)?;
//!
//! let root = doc.as_ref().as_mapping().context("missing root mapping")?;
//! assert_eq!(root.get("greeting").and_then(|v| v.as_str()), Some("Hello World!"));
//!
//! let numbers = root.get("numbers").and_then(|v| v.as_sequence()).context("missing numbers")?;
//! let id = numbers.get(1).context("missing second number")?.id();
//! assert_eq!(doc.value(id).as_u32(), Some(24));
//! # Ok::<_, anyhow::Error>(())
//! ```
//!
//! <br>
//!
//! ## Numbers
//!
//! Numbers keep the text they were written with. A number with a fraction or
//! an exponent is a float and is always written back out as a float, even when
//! its value is integral.
//!
//! ```
//! let yaml = json2yaml::convert(r#"{"int": 1, "float": 1.0, "exp": 2E3}"#)?;
//! assert_eq!(yaml, "int: 1\nfloat: 1.0\nexp: 2000.0\n");
//! # Ok::<_, json2yaml::json::Error>(())
//! ```

#![deny(missing_docs)]
#![allow(clippy::module_inception)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod json;
pub mod yaml;

mod base;

mod any;
pub use self::any::Any;

mod data;
pub use self::data::Id;

mod document;
pub use self::document::Document;

mod error;
pub use self::error::Error;

mod number;
pub use self::number::{Number, NumberKind};

mod raw;

mod string;
pub use self::string::String;

mod value;
pub use self::value::Value;

pub mod mapping;
#[doc(inline)]
pub use self::mapping::Mapping;

pub mod sequence;
#[doc(inline)]
pub use self::sequence::Sequence;

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod serde;

use std::fs;
use std::path::Path;

/// Convert a JSON document into block-style YAML.
///
/// # Errors
///
/// Errors in case the input is not well-formed JSON.
///
/// # Examples
///
/// ```
/// let yaml = json2yaml::convert(r#"{"a": 1, "b": [1, 2, 3]}"#)?;
/// assert_eq!(yaml, "a: 1\nb:\n- 1\n- 2\n- 3\n");
///
/// assert_eq!(json2yaml::convert("{}")?, "{}\n");
/// assert_eq!(json2yaml::convert("[]")?, "[]\n");
///
/// assert!(json2yaml::convert("{a: 1}").is_err());
/// # Ok::<_, json2yaml::json::Error>(())
/// ```
pub fn convert<D>(input: D) -> Result<std::string::String, json::Error>
where
    D: AsRef<[u8]>,
{
    let doc = json::from_slice(input)?;
    Ok(yaml::to_string(&doc))
}

/// Read the JSON file at the given path and convert it into block-style YAML.
///
/// # Errors
///
/// Errors with [`Error::FileAccess`] if the file can't be read, and with
/// [`Error::Parse`] if its contents are not well-formed JSON.
pub fn convert_path<P>(path: P) -> Result<std::string::String, Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let input = fs::read(path).map_err(|error| Error::FileAccess {
        path: path.to_owned(),
        error,
    })?;

    tracing::debug!(path = %path.display(), bytes = input.len(), "read input");

    let doc = json::from_slice(&input).map_err(|error| Error::Parse {
        path: path.to_owned(),
        location: error.location(&input),
        error,
    })?;

    let output = yaml::to_string(&doc);
    tracing::debug!(values = doc.value_count(), bytes = output.len(), "converted to yaml");
    Ok(output)
}
