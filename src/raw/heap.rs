use crate::raw::{AllocError, AllocResult, Allocator};

use allocator_api2::alloc::{Allocator as RawAllocator, Global};
use core::{
    alloc::Layout,
    mem::{align_of, size_of},
    ptr::NonNull,
};

/// The default allocator: places elements on the heap through any
/// [`allocator_api2`] allocator, the [`Global`] one unless told otherwise.
///
/// Construction and destruction are plain writes and drops.
#[derive(Debug, Default, Clone, Copy)]
pub struct Heap<A: RawAllocator = Global>(A);

impl Heap {
    /// Create a new heap allocator backed by [`Global`]
    pub const fn new() -> Self { Self(Global) }
}

impl<A: RawAllocator> Heap<A> {
    /// Create a new heap allocator backed by the given allocator
    pub const fn with_alloc(alloc: A) -> Self { Self(alloc) }

    /// The underlying allocator
    pub fn inner(&self) -> &A { &self.0 }

    /// Convert into the underlying allocator
    pub fn into_inner(self) -> A { self.0 }
}

fn is_dangling<T>(capacity: usize) -> bool { capacity == 0 || size_of::<T>() == 0 }

unsafe impl<A: RawAllocator> Allocator for Heap<A> {
    fn allocate<T>(&self, capacity: usize) -> AllocResult<NonNull<T>> {
        if is_dangling::<T>(capacity) {
            return Ok(NonNull::dangling())
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| AllocError)?;
        let ptr = self.0.allocate(layout).map_err(|_| AllocError)?;
        Ok(ptr.cast())
    }

    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, capacity: usize) {
        if is_dangling::<T>(capacity) {
            return
        }

        // Safety
        //
        // `ptr` came from `allocate::<T>(capacity)`, so `Layout::array::<T>(capacity)`
        // was valid when it was allocated
        unsafe {
            let layout = Layout::from_size_align_unchecked(size_of::<T>().wrapping_mul(capacity), align_of::<T>());
            self.0.deallocate(ptr.cast(), layout);
        }
    }
}
