//! The allocator capability and the raw buffer that back-up the [`AllocVec`](crate::AllocVec)

use core::ptr::{self, NonNull};

pub(crate) mod buffer;
pub(crate) mod capacity;
#[cfg(feature = "alloc")]
mod heap;

#[cfg(feature = "alloc")]
pub use heap::Heap;

/// Error on failure to allocate
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("memory allocation failed")]
pub struct AllocError;

/// Result of an allocation
pub type AllocResult<T> = Result<T, AllocError>;

/// A capability that provides raw storage for elements and runs their
/// construction and destruction.
///
/// [`AllocVec`](crate::AllocVec) performs every memory and object-lifecycle
/// step through this trait, so any allocation strategy (the global heap, an
/// arena, a pool) can be substituted without changing the vector.
///
/// # Safety
///
/// Other safe types rely on this trait being implemented correctly.
/// See the safety requirements on each function
pub unsafe trait Allocator {
    /// Allocates uninitialized storage for `capacity` values of `T`
    ///
    /// # Safety
    ///
    /// If `Ok(ptr)` is returned, `ptr` must be aligned for `T` and valid to
    /// read-write for the range `ptr..ptr.add(capacity)` until it is passed to
    /// [`Allocator::deallocate`]. If `capacity` is zero or `T` is zero-sized,
    /// a dangling pointer may be returned, and it must be accepted again by
    /// [`Allocator::deallocate`].
    ///
    /// # Errors
    ///
    /// If the storage cannot be obtained, returns `Err(AllocError)`
    fn allocate<T>(&self, capacity: usize) -> AllocResult<NonNull<T>>;

    /// Releases storage previously obtained from [`Allocator::allocate`]
    ///
    /// A zero `capacity` is the empty sentinel and must be a no-op.
    ///
    /// # Safety
    ///
    /// * `ptr` must have been returned by `self.allocate::<T>(capacity)` (or be
    ///   dangling with a `capacity` of zero)
    /// * `ptr` must not be used after this call
    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, capacity: usize);

    /// Initializes `slot` with `value`
    ///
    /// # Safety
    ///
    /// `slot` must be valid to write and must not hold a live value
    #[inline]
    unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) {
        // Safety
        //
        // the caller guarantees that `slot` is valid for writes
        unsafe { slot.as_ptr().write(value) }
    }

    /// Runs the destructor of the value in `slot` without releasing the memory
    ///
    /// # Safety
    ///
    /// `slot` must hold a live value, which is dead after this call
    #[inline]
    unsafe fn destroy<T>(&self, slot: NonNull<T>) {
        // Safety
        //
        // the caller guarantees that `slot` holds a live value
        unsafe { ptr::drop_in_place(slot.as_ptr()) }
    }
}

unsafe impl<A: Allocator> Allocator for &A {
    #[inline]
    fn allocate<T>(&self, capacity: usize) -> AllocResult<NonNull<T>> { A::allocate(self, capacity) }

    #[inline]
    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, capacity: usize) { unsafe { A::deallocate(self, ptr, capacity) } }

    #[inline]
    unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) { unsafe { A::construct(self, slot, value) } }

    #[inline]
    unsafe fn destroy<T>(&self, slot: NonNull<T>) { unsafe { A::destroy(self, slot) } }
}
