use crate::{raw::Allocator, AllocVec};

use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

/// Copies the live elements into a new region of the same capacity
impl<T: Clone, A: Allocator + Clone> Clone for AllocVec<T, A> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(vec) => vec,
            Err(_) => crate::raw::capacity::allocation_failure(self.capacity()),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.try_clone_from(source).is_err() {
            crate::raw::capacity::allocation_failure(source.capacity())
        }
    }
}

impl<T, A: Allocator + Default> Default for AllocVec<T, A> {
    fn default() -> Self { Self::new_in(A::default()) }
}

impl<T, A: Allocator, O: ?Sized + AsRef<[T]>> PartialEq<O> for AllocVec<T, A>
where
    T: PartialEq,
{
    fn eq(&self, other: &O) -> bool { self.as_slice() == other.as_ref() }
}

impl<T: Eq, A: Allocator> Eq for AllocVec<T, A> {}

impl<T, A: Allocator, O: ?Sized + AsRef<[T]>> PartialOrd<O> for AllocVec<T, A>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &O) -> Option<core::cmp::Ordering> { self.as_slice().partial_cmp(other.as_ref()) }
}

impl<T: Ord, A: Allocator> Ord for AllocVec<T, A> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering { self.as_slice().cmp(other.as_slice()) }
}

impl<T: Hash, A: Allocator> Hash for AllocVec<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.as_slice().hash(state) }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for AllocVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.as_slice().fmt(f) }
}

impl<T, A: Allocator> AsRef<[T]> for AllocVec<T, A> {
    fn as_ref(&self) -> &[T] { self }
}

impl<T, A: Allocator> AsMut<[T]> for AllocVec<T, A> {
    fn as_mut(&mut self) -> &mut [T] { self }
}

impl<T, A: Allocator> Borrow<[T]> for AllocVec<T, A> {
    fn borrow(&self) -> &[T] { self }
}

impl<T, A: Allocator> BorrowMut<[T]> for AllocVec<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] { self }
}

/// Bounds checked indexing, panics with the position and length when out of range.
/// Use [`AllocVec::at`] to get an [`Error::OutOfRange`](crate::Error::OutOfRange) instead.
impl<T, A: Allocator, I> Index<I> for AllocVec<T, A>
where
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output { self.as_slice().index(index) }
}

impl<T, A: Allocator, I> IndexMut<I> for AllocVec<T, A>
where
    I: SliceIndex<[T]>,
{
    fn index_mut(&mut self, index: I) -> &mut Self::Output { self.as_mut_slice().index_mut(index) }
}
