//! The [`Iterator`] and cursor types that can be created from an [`AllocVec`]

mod cursor;
mod into_iter;

pub use cursor::Cursor;
pub use into_iter::IntoIter;

use core::iter::FromIterator;

use crate::{raw::Allocator, AllocVec};

impl<T, A: Allocator + Default> FromIterator<T> for AllocVec<T, A> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::default();
        vec.extend(iter);
        vec
    }
}

impl<T, A: Allocator> Extend<T> for AllocVec<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let _ = self.try_reserve_additional(iter.size_hint().0);
        iter.for_each(|item| {
            self.push(item);
        });
    }
}

impl<'a, T: Clone + 'a, A: Allocator> Extend<&'a T> for AllocVec<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) { self.extend(iter.into_iter().cloned()) }
}
