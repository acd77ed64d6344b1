use crate::{
    raw::{buffer::RawBuf, Allocator},
    AllocVec,
};
use core::iter::{ExactSizeIterator, FusedIterator};

/// This struct is created by [`AllocVec::into_iter`](crate::AllocVec::into_iter).
/// See its documentation for more.
pub struct IntoIter<T, A: Allocator> {
    index: usize,
    len: usize,
    buf: RawBuf<T, A>,
}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        // the elements that were not yielded are still live,
        // the buffer releases the region afterwards
        unsafe { self.buf.destroy_range(self.index, self.len) }
    }
}

impl<T, A: Allocator> IntoIterator for AllocVec<T, A> {
    type IntoIter = IntoIter<T, A>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        let (len, buf) = self.into_raw_parts();
        IntoIter { index: 0, len, buf }
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut AllocVec<T, A> {
    type IntoIter = core::slice::IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<'a, T, A: Allocator> IntoIterator for &'a AllocVec<T, A> {
    type IntoIter = core::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}
impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> IntoIter<T, A> {
    /// Get a slice to the remaining elements in the iterator
    pub fn as_slice(&self) -> &[T] {
        let ptr = self.buf.ptr().as_ptr();
        unsafe { core::slice::from_raw_parts(ptr.add(self.index), self.len - self.index) }
    }

    /// Get a mutable slice to the remaining elements in the iterator
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let ptr = self.buf.ptr().as_ptr();
        unsafe { core::slice::from_raw_parts_mut(ptr.add(self.index), self.len - self.index) }
    }

    /// The allocator of the vector this iterator came from
    pub fn allocator(&self) -> &A { self.buf.allocator() }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.len {
            None
        } else {
            // Safety
            //
            // the slot at `index` is live, and is moved-out before `index` moves past it
            unsafe {
                let value = self.buf.ptr().add(self.index).as_ptr().read();
                self.index += 1;
                Some(value)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len - self.index;
        (len, Some(len))
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len()
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.index == self.len {
            None
        } else {
            // Safety
            //
            // the slot at `len - 1` is live, and is moved-out as `len` moves past it
            unsafe {
                self.len -= 1;
                Some(self.buf.ptr().add(self.len).as_ptr().read())
            }
        }
    }
}
