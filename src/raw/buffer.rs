use crate::raw::{AllocResult, Allocator};

use core::{
    marker::PhantomData,
    ptr::{self, NonNull},
};

/// An owned region of `capacity` slots obtained from `A`
///
/// The buffer knows nothing about which slots are live; the owner tracks that
/// and must tear the live prefix down before the buffer is dropped. Dropping
/// only returns the region to the allocator.
pub(crate) struct RawBuf<T, A: Allocator> {
    ptr: NonNull<T>,
    capacity: usize,
    alloc: A,
    marker: PhantomData<T>,
}

unsafe impl<T: Send, A: Allocator + Send> Send for RawBuf<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawBuf<T, A> {}

impl<T, A: Allocator> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        // Safety
        //
        // `ptr` was obtained from `alloc.allocate(capacity)`, or it is the dangling
        // empty sentinel with a capacity of zero
        unsafe { self.alloc.deallocate(self.ptr, self.capacity) }
    }
}

impl<T, A: Allocator> RawBuf<T, A> {
    /// A buffer that owns no storage
    pub(crate) fn empty(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            alloc,
            marker: PhantomData,
        }
    }

    pub(crate) fn try_with_capacity_in(capacity: usize, alloc: A) -> AllocResult<Self> {
        let ptr = alloc.allocate(capacity)?;
        Ok(Self {
            ptr,
            capacity,
            alloc,
            marker: PhantomData,
        })
    }

    #[inline]
    pub(crate) fn ptr(&self) -> NonNull<T> { self.ptr }

    #[inline]
    pub(crate) fn capacity(&self) -> usize { self.capacity }

    #[inline]
    pub(crate) fn allocator(&self) -> &A { &self.alloc }

    /// Move the first `len` elements into a fresh region of exactly `capacity`
    /// slots, then release the old region
    ///
    /// On failure nothing changes.
    ///
    /// # Safety
    ///
    /// * the first `len` slots must be live
    /// * `len <= capacity`
    pub(crate) unsafe fn try_relocate(&mut self, len: usize, capacity: usize) -> AllocResult<()> {
        debug_assert!(len <= capacity);

        let new = self.alloc.allocate::<T>(capacity)?;

        // Safety
        //
        // * the new region has room for `capacity >= len` elements and does not
        //   overlap the old one
        // * the old slots are logically moved-out, so releasing the region without
        //   destroying them is correct
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new.as_ptr(), len);
            self.alloc.deallocate(self.ptr, self.capacity);
        }

        self.ptr = new;
        self.capacity = capacity;
        Ok(())
    }

    /// Destroy the slots in `[start, end)` in order through the allocator
    ///
    /// # Safety
    ///
    /// every slot in `start..end` must be live, and is dead after this call
    pub(crate) unsafe fn destroy_range(&mut self, start: usize, end: usize) {
        for index in start..end {
            unsafe { self.alloc.destroy(self.ptr.add(index)) }
        }
    }

    /// Clone `source` into the first `source.len()` slots
    ///
    /// If a clone panics, the clones constructed so far are destroyed again.
    ///
    /// # Safety
    ///
    /// the first `source.len()` slots must be allocated and not live
    pub(crate) unsafe fn clone_into_prefix(&mut self, source: &[T])
    where
        T: Clone,
    {
        struct OnUnwind<'a, T, A: Allocator> {
            buf: &'a mut RawBuf<T, A>,
            len: usize,
        }

        impl<T, A: Allocator> Drop for OnUnwind<'_, T, A> {
            fn drop(&mut self) {
                // Safety
                //
                // the slots `0..len` were constructed by the loop below
                unsafe { self.buf.destroy_range(0, self.len) }
            }
        }

        debug_assert!(source.len() <= self.capacity);

        let mut guard = OnUnwind { buf: self, len: 0 };

        for value in source {
            // Safety
            //
            // the slot at `len` is allocated and not yet live
            unsafe {
                let slot = guard.buf.ptr.add(guard.len);
                guard.buf.alloc.construct(slot, value.clone());
            }
            guard.len += 1;
        }

        core::mem::forget(guard);
    }
}
