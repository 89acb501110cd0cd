use std::collections::hash_map::{self, HashMap};
use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;

use bstr::BStr;
use twox_hash::xxh3::{Hash128, HasherExt};

use crate::raw::{self, Raw};

/// The unique hash of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub(crate) struct StringId(u128);

impl fmt::Display for StringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// An opaque identifier for a value inside of a [`Document`].
///
/// Is constructed through [`Value::id`], [`Mapping::id`], or [`Sequence::id`]
/// and can be converted into a [`Value`] again through [`Document::value`].
///
/// [`Value::id`]: crate::Value::id
/// [`Mapping::id`]: crate::Mapping::id
/// [`Sequence::id`]: crate::Sequence::id
/// [`Value`]: crate::Value
/// [`Document`]: crate::Document
/// [`Document::value`]: crate::Document::value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Id(NonZeroUsize);

impl Id {
    #[inline]
    fn get(self) -> usize {
        self.0.get().wrapping_sub(1)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.get())
    }
}

/// Value arena and strings cache.
#[derive(Clone, Default)]
pub(crate) struct Data {
    strings: HashMap<StringId, Box<[u8]>>,
    slab: slab::Slab<Raw>,
}

impl Data {
    /// Get a string.
    #[inline]
    pub(crate) fn str(&self, id: StringId) -> &BStr {
        let Some(string) = self.strings.get(&id) else {
            panic!("missing string with id {id}");
        };

        BStr::new(string.as_ref())
    }

    /// Insert a string into the string cache.
    pub(crate) fn insert_str<B>(&mut self, string: B) -> StringId
    where
        B: AsRef<[u8]>,
    {
        let mut hasher = Hash128::default();
        string.as_ref().hash(&mut hasher);
        let id = StringId(hasher.finish_ext());

        if let hash_map::Entry::Vacant(e) = self.strings.entry(id) {
            e.insert(string.as_ref().into());
        }

        id
    }

    #[cfg(test)]
    pub(crate) fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// Number of values currently stored.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slab.len()
    }

    #[inline]
    pub(crate) fn raw(&self, id: Id) -> &Raw {
        if let Some(raw) = self.slab.get(id.get()) {
            return raw;
        }

        panic!("expected raw at {id}")
    }

    #[inline]
    pub(crate) fn sequence(&self, id: Id) -> &raw::Sequence {
        if let Some(Raw::Sequence(raw)) = self.slab.get(id.get()) {
            return raw;
        }

        panic!("expected sequence at {id}")
    }

    #[inline]
    pub(crate) fn mapping(&self, id: Id) -> &raw::Mapping {
        if let Some(Raw::Mapping(raw)) = self.slab.get(id.get()) {
            return raw;
        }

        panic!("expected mapping at {id}")
    }

    /// Insert a raw value and return its identifier.
    #[inline]
    pub(crate) fn insert<T>(&mut self, raw: T) -> Id
    where
        T: Into<Raw>,
    {
        let index = self.slab.insert(raw.into());
        let index = NonZeroUsize::new(index.wrapping_add(1)).expect("ran out of ids");
        Id(index)
    }

    /// Drop a value recursively.
    pub(crate) fn drop(&mut self, id: Id) {
        let Some(raw) = self.slab.try_remove(id.get()) else {
            return;
        };

        match raw {
            Raw::Mapping(raw) => {
                for item in raw.items {
                    self.drop(item.value);
                }
            }
            Raw::Sequence(raw) => {
                for item in raw.items {
                    self.drop(item);
                }
            }
            _ => {}
        }
    }
}
