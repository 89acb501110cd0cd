use core::slice;

use crate::data::{Data, Id};
use crate::Value;

/// An immutable iterator over a [`Sequence`][crate::sequence::Sequence].
///
/// See [`Sequence::iter`][crate::sequence::Sequence::iter].
pub struct Iter<'a> {
    data: &'a Data,
    iter: slice::Iter<'a, Id>,
}

impl<'a> Iter<'a> {
    #[inline]
    pub(crate) fn new(data: &'a Data, slice: &'a [Id]) -> Self {
        Self {
            data,
            iter: slice.iter(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Value<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.iter.next()?;
        Some(Value::new(self.data, *id))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.iter.next_back()?;
        Some(Value::new(self.data, *id))
    }
}

impl ExactSizeIterator for Iter<'_> {}
