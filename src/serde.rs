//! Serde support for documents.
//!
//! By enabling the `serde` feature [`Document`], [`Value`], [`Mapping`] and
//! [`Sequence`] implement [`Serialize`], allowing a decoded document to be fed
//! into any serde data format.
//!
//! Integers serialize as the narrowest of `u64`, `i64`, `u128` or `i128` that
//! holds them and floats serialize as `f64`.
//!
//! [`Serialize`]: serde::Serialize
//! [`Document`]: crate::Document
//! [`Value`]: crate::Value
//! [`Mapping`]: crate::Mapping
//! [`Sequence`]: crate::Sequence
//!
//! ```
//! use json2yaml::json;
//!
//! const SOURCE: &str = r#"
//! {
//!     "name": "Descartes",
//!     "year": 1596,
//!     "books": [
//!         {"year": 1618, "title": "Musicae Compendium"},
//!         {"year": 1637, "title": "La Géométrie"}
//!     ]
//! }
//! "#;
//!
//! let doc = json::from_slice(SOURCE)?;
//!
//! let value = serde_yaml::to_value(&doc)?;
//! let expected: serde_yaml::Value = serde_yaml::from_str(&doc.to_string())?;
//! assert_eq!(value, expected);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use bstr::ByteSlice;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::Serialize;

use crate::{Any, Document, Mapping, Number, NumberKind, Sequence, Value};

impl Serialize for Document {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_ref().serialize(serializer)
    }
}

impl Serialize for Value<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.as_any() {
            Any::Null(..) => serializer.serialize_unit(),
            Any::Bool(value) => serializer.serialize_bool(value),
            Any::Number(number) => serialize_number(&number, serializer),
            Any::String(string) => {
                if let Ok(string) = string.to_str() {
                    serializer.serialize_str(string)
                } else {
                    serializer.serialize_bytes(string.as_bytes())
                }
            }
            Any::Mapping(mapping) => mapping.serialize(serializer),
            Any::Sequence(sequence) => sequence.serialize(serializer),
        }
    }
}

fn serialize_number<S>(number: &Number<'_>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if number.kind() == NumberKind::Integer {
        if let Some(value) = number.as_u64() {
            return serializer.serialize_u64(value);
        }

        if let Some(value) = number.as_i64() {
            return serializer.serialize_i64(value);
        }

        if let Some(value) = number.as_u128() {
            return serializer.serialize_u128(value);
        }

        if let Some(value) = number.as_i128() {
            return serializer.serialize_i128(value);
        }
    }

    match number.as_f64() {
        Some(value) => serializer.serialize_f64(value),
        None => serializer.serialize_none(),
    }
}

impl Serialize for Sequence<'_> {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;

        for item in self.iter() {
            seq.serialize_element(&item)?;
        }

        seq.end()
    }
}

impl Serialize for Mapping<'_> {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;

        for (key, value) in self.iter() {
            if let Ok(string) = key.to_str() {
                map.serialize_entry(string, &value)?;
            } else {
                map.serialize_entry(key, &value)?;
            }
        }

        map.end()
    }
}
