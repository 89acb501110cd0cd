use crate::data::{Id, StringId};
use crate::number::NumberKind;

/// A raw value stored in the document arena.
#[derive(Debug, Clone)]
pub(crate) enum Raw {
    /// A null value.
    Null,
    /// A boolean value.
    Boolean(bool),
    /// A single number.
    Number(Number),
    /// A string.
    String(String),
    /// A mapping.
    Mapping(Mapping),
    /// A sequence.
    Sequence(Sequence),
}

/// A number as it was written in the source.
#[derive(Debug, Clone)]
pub(crate) struct Number {
    pub(crate) string: StringId,
    pub(crate) kind: NumberKind,
}

impl Number {
    pub(crate) fn new(string: StringId, kind: NumberKind) -> Self {
        Self { string, kind }
    }
}

/// A decoded string.
#[derive(Debug, Clone)]
pub(crate) struct String {
    pub(crate) id: StringId,
}

impl String {
    pub(crate) fn new(id: StringId) -> Self {
        Self { id }
    }
}

/// An item in a mapping.
#[derive(Debug, Clone)]
pub(crate) struct MappingItem {
    pub(crate) key: StringId,
    pub(crate) value: Id,
}

/// A mapping of unique keys to values, in insertion order.
#[derive(Debug, Clone, Default)]
pub(crate) struct Mapping {
    pub(crate) items: Vec<MappingItem>,
}

/// An ordered sequence of values.
#[derive(Debug, Clone, Default)]
pub(crate) struct Sequence {
    pub(crate) items: Vec<Id>,
}

macro_rules! from {
    ($ident:ident) => {
        impl From<$ident> for Raw {
            #[inline]
            fn from(value: $ident) -> Self {
                Raw::$ident(value)
            }
        }
    };
}

from!(Number);
from!(String);
from!(Mapping);
from!(Sequence);
