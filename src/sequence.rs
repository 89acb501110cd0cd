//! A [`Sequence`] of values.
//!
//! # Examples
//!
//! ```
//! use anyhow::Context;
//! use json2yaml::json;
//!
//! let doc = json::from_slice(r#"["one", "two", "three"]"#)?;
//!
//! let root = doc.as_ref().as_sequence().context("missing root sequence")?;
//!
//! assert_eq!(root.get(0).and_then(|v| v.as_str()), Some("one"));
//! assert_eq!(root.get(1).and_then(|v| v.as_str()), Some("two"));
//! assert_eq!(root.get(2).and_then(|v| v.as_str()), Some("three"));
//! # Ok::<_, anyhow::Error>(())
//! ```

mod iter;
pub use self::iter::Iter;

mod sequence;
pub use self::sequence::Sequence;
