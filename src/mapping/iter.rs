use core::slice;

use bstr::BStr;

use crate::data::Data;
use crate::raw::MappingItem;
use crate::Value;

/// An immutable iterator over a [`Mapping`][crate::mapping::Mapping].
///
/// See [`Mapping::iter`][crate::mapping::Mapping::iter].
pub struct Iter<'a> {
    data: &'a Data,
    iter: slice::Iter<'a, MappingItem>,
}

impl<'a> Iter<'a> {
    #[inline]
    pub(crate) fn new(data: &'a Data, slice: &'a [MappingItem]) -> Self {
        Self {
            data,
            iter: slice.iter(),
        }
    }

    #[inline]
    fn item(&self, item: &'a MappingItem) -> (&'a BStr, Value<'a>) {
        (self.data.str(item.key), Value::new(self.data, item.value))
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a BStr, Value<'a>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        Some(self.item(item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.iter.next_back()?;
        Some(self.item(item))
    }
}

impl ExactSizeIterator for Iter<'_> {}
