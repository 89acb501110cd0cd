use core::fmt::{self, Write};

use crate::data::{Data, Id};
use crate::number::NumberKind;
use crate::raw::{self, Raw};
use crate::yaml::scalar;

/// Number of spaces a nested mapping is indented by.
const INDENT: usize = 2;

/// Longest key, in characters, which is written as an implicit `key:`.
/// Longer keys use the explicit `? key` form since YAML caps the length of
/// implicit keys.
const MAX_IMPLICIT_KEY: usize = 128;

/// Block-style emitter over the values of a document.
///
/// Every line written, including the last one, is terminated by a newline.
pub(crate) struct Emitter<'a> {
    data: &'a Data,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(data: &'a Data) -> Self {
        Self { data }
    }

    /// Emit a whole document rooted at `id`.
    pub(crate) fn document<W>(&self, f: &mut W, id: Id) -> fmt::Result
    where
        W: ?Sized + Write,
    {
        match self.data.raw(id) {
            Raw::Mapping(raw) if !raw.items.is_empty() => self.mapping(f, raw, 0, false),
            Raw::Sequence(raw) if !raw.items.is_empty() => self.sequence(f, raw, 0, false),
            raw => {
                self.scalar(f, raw)?;
                f.write_char('\n')
            }
        }
    }

    /// Emit the entries of a non-empty mapping.
    ///
    /// If `inline` is set, the cursor is already positioned where the first
    /// key goes, as it is after a sequence marker.
    fn mapping<W>(
        &self,
        f: &mut W,
        raw: &raw::Mapping,
        indent: usize,
        inline: bool,
    ) -> fmt::Result
    where
        W: ?Sized + Write,
    {
        let mut key = String::new();

        for (n, item) in raw.items.iter().enumerate() {
            if n > 0 || !inline {
                write_indent(f, indent)?;
            }

            key.clear();
            scalar::string(&mut key, self.data.str(item.key))?;

            if key.chars().count() > MAX_IMPLICIT_KEY {
                f.write_str("? ")?;
                f.write_str(&key)?;
                f.write_char('\n')?;
                write_indent(f, indent)?;
            } else {
                f.write_str(&key)?;
            }

            f.write_char(':')?;

            match self.data.raw(item.value) {
                Raw::Mapping(raw) if !raw.items.is_empty() => {
                    f.write_char('\n')?;
                    self.mapping(f, raw, indent + INDENT, false)?;
                }
                // Sequences under a key line up with the key.
                Raw::Sequence(raw) if !raw.items.is_empty() => {
                    f.write_char('\n')?;
                    self.sequence(f, raw, indent, false)?;
                }
                raw => {
                    f.write_char(' ')?;
                    self.scalar(f, raw)?;
                    f.write_char('\n')?;
                }
            }
        }

        Ok(())
    }

    /// Emit the items of a non-empty sequence.
    fn sequence<W>(
        &self,
        f: &mut W,
        raw: &raw::Sequence,
        indent: usize,
        inline: bool,
    ) -> fmt::Result
    where
        W: ?Sized + Write,
    {
        for (n, id) in raw.items.iter().enumerate() {
            if n > 0 || !inline {
                write_indent(f, indent)?;
            }

            f.write_str("- ")?;

            match self.data.raw(*id) {
                Raw::Mapping(raw) if !raw.items.is_empty() => {
                    self.mapping(f, raw, indent + INDENT, true)?;
                }
                Raw::Sequence(raw) if !raw.items.is_empty() => {
                    self.sequence(f, raw, indent + INDENT, true)?;
                }
                raw => {
                    self.scalar(f, raw)?;
                    f.write_char('\n')?;
                }
            }
        }

        Ok(())
    }

    /// Emit a scalar, or an empty collection.
    fn scalar<W>(&self, f: &mut W, raw: &Raw) -> fmt::Result
    where
        W: ?Sized + Write,
    {
        match raw {
            Raw::Null => f.write_str("null"),
            Raw::Boolean(true) => f.write_str("true"),
            Raw::Boolean(false) => f.write_str("false"),
            Raw::Number(raw) => {
                let string = self.data.str(raw.string);

                match raw.kind {
                    NumberKind::Integer => write!(f, "{string}"),
                    NumberKind::Float => scalar::float(f, string),
                }
            }
            Raw::String(raw) => scalar::string(f, self.data.str(raw.id)),
            Raw::Mapping(..) => f.write_str("{}"),
            Raw::Sequence(..) => f.write_str("[]"),
        }
    }
}

fn write_indent<W>(f: &mut W, indent: usize) -> fmt::Result
where
    W: ?Sized + Write,
{
    for _ in 0..indent {
        f.write_char(' ')?;
    }

    Ok(())
}
