#![cfg_attr(not(feature = "std"), no_std)]
#![allow(unused_unsafe)]
#![deny(missing_docs, clippy::missing_safety_doc)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

//! A growable vector that hands every allocation and every element
//! construction and destruction to a pluggable allocator.
//!
//! [`AllocVec`] owns one contiguous region obtained from an
//! [`Allocator`](raw::Allocator). The first [`len`](AllocVec::len) slots of the
//! region hold live elements, the rest up to [`capacity`](AllocVec::capacity)
//! are allocated but uninitialized. When a push finds the vector full, the
//! capacity doubles (an empty region grows to one slot), which keeps appends
//! amortized O(1).
//!
//! # Features
//!
//! * `std` (default) - enables `std::error::Error` for the error types, and
//! * `alloc` - enables the default [`Heap`](raw::Heap) allocator
//! * `nightly` - lets [`Heap`](raw::Heap) wrap any nightly `Allocator`
//!
//! # Basic Usage
//!
//! ```rust
//! use alloc_vec::AllocVec;
//!
//! let mut vec = AllocVec::new();
//! assert_eq!(vec.capacity(), 1);
//!
//! vec.push(10);
//! vec.push(20);
//! vec.push(30);
//!
//! assert_eq!(vec, [10, 20, 30]);
//! assert_eq!(vec.capacity(), 4);
//!
//! vec.pop_back();
//! assert_eq!(vec.back(), Ok(20));
//!
//! let copy = vec.clone();
//! assert_eq!(copy, [10, 20]);
//! ```
//!
//! Out of range access is reported, never undefined:
//!
//! ```rust
//! use alloc_vec::{avec, AllocVec, Error};
//!
//! let vec: AllocVec<i32> = avec![1, 2];
//! assert_eq!(vec.at(2), Err(Error::OutOfRange { index: 2, len: 2 }));
//! ```
//!
//! ## Custom allocators
//!
//! Anything that implements [`Allocator`](raw::Allocator) can back the vector.
//! A reference to an allocator is an allocator too, so an arena can be shared
//! by several vectors.

use core::{
    mem::{self, ManuallyDrop},
    ops::{Deref, DerefMut},
    ptr, slice,
};

mod error;
mod impls;

pub mod iter;
pub mod raw;

pub use error::Error;
use iter::Cursor;
use raw::{buffer::RawBuf, capacity, Allocator};

#[doc(hidden)]
pub use core;

/// The capacity of a vector created with [`AllocVec::new`] or [`AllocVec::new_in`]
pub const DEFAULT_CAPACITY: usize = 1;

#[doc(hidden)]
#[macro_export]
macro_rules! count {
    () => { 0 };
    ($($a:tt $b:tt)*) => { $crate::count!($($a)*) << 1 };
    ($c:tt $($a:tt $b:tt)*) => { ($crate::count!($($a)*) << 1) | 1 };
}

/// Create a new heap backed [`AllocVec`]
///
/// The capacity of the vector is exactly the number of elements.
///
/// ```rust
/// # use alloc_vec::{avec, AllocVec};
/// let x: AllocVec<i32> = avec![1, 2, 3, 4];
/// assert_eq!(x, [1, 2, 3, 4]);
/// assert_eq!(x.capacity(), 4);
///
/// let y = avec![String::from("a"); 3];
/// assert!(y.iter().all(|s| s == "a"));
/// ```
#[macro_export]
#[cfg(feature = "alloc")]
macro_rules! avec {
    ($expr:expr; $n:expr) => {{
        let len = $n;
        let value = $expr;
        let mut vec = $crate::AllocVec::with_capacity(len);
        for _ in 0..len {
            vec.push($crate::core::clone::Clone::clone(&value));
        }
        vec
    }};
    ($($expr:expr),* $(,)?) => {{
        let mut vec = $crate::AllocVec::with_capacity($crate::count!($(($expr))*));
        $(vec.push($expr);)*
        vec
    }};
}

/// A growable vector whose storage and element lifecycle are managed by `A`
///
/// Invariants:
/// * `len <= capacity`
/// * the slots `0..len` hold live elements
/// * the slots `len..capacity` are allocated and uninitialized
#[cfg(feature = "alloc")]
pub struct AllocVec<T, A: Allocator = raw::Heap> {
    len: usize,
    buf: RawBuf<T, A>,
}

/// A growable vector whose storage and element lifecycle are managed by `A`
///
/// Invariants:
/// * `len <= capacity`
/// * the slots `0..len` hold live elements
/// * the slots `len..capacity` are allocated and uninitialized
#[cfg(not(feature = "alloc"))]
pub struct AllocVec<T, A: Allocator> {
    len: usize,
    buf: RawBuf<T, A>,
}

impl<T, A: Allocator> Deref for AllocVec<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // The first `len` elements are live
        unsafe { slice::from_raw_parts(self.buf.ptr().as_ptr(), self.len) }
    }
}

impl<T, A: Allocator> DerefMut for AllocVec<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // The first `len` elements are live
        unsafe { slice::from_raw_parts_mut(self.buf.ptr().as_ptr(), self.len) }
    }
}

impl<T, A: Allocator> Drop for AllocVec<T, A> {
    fn drop(&mut self) {
        // The first `len` elements are live and get destroyed here,
        // the buffer releases the region when it is dropped
        let len = mem::replace(&mut self.len, 0);
        unsafe { self.buf.destroy_range(0, len) }
    }
}

#[cfg(feature = "alloc")]
impl<T> AllocVec<T> {
    /// Create a new empty heap backed vector with room for one element
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails
    pub fn new() -> Self { Self::new_in(raw::Heap::new()) }

    /// Create a new empty heap backed vector with room for exactly `capacity` elements
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails
    pub fn with_capacity(capacity: usize) -> Self { Self::with_capacity_in(capacity, raw::Heap::new()) }
}

impl<T, A: Allocator> AllocVec<T, A> {
    /// Create a new empty vector in the given allocator with room for one element
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails
    pub fn new_in(alloc: A) -> Self { Self::with_capacity_in(DEFAULT_CAPACITY, alloc) }

    /// Create a new empty vector in the given allocator with room for exactly `capacity` elements
    ///
    /// A capacity of zero is valid and does not allocate.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        match Self::try_with_capacity_in(capacity, alloc) {
            Ok(vec) => vec,
            Err(_) => capacity::allocation_failure(capacity),
        }
    }

    /// Create a new empty vector in the given allocator with room for exactly `capacity` elements
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the allocator cannot provide the storage
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, Error> {
        Ok(Self {
            len: 0,
            buf: RawBuf::try_with_capacity_in(capacity, alloc)?,
        })
    }

    /// The number of live elements
    #[inline]
    pub fn len(&self) -> usize { self.len }

    /// The number of allocated slots, live or not
    #[inline]
    pub fn capacity(&self) -> usize { self.buf.capacity() }

    /// Returns true if there are no live elements
    #[inline]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns true if every allocated slot holds a live element,
    /// so the next push has to grow the storage
    #[inline]
    pub fn is_full(&self) -> bool { self.len == self.capacity() }

    /// Returns the number of pushes that fit before the storage grows
    #[inline]
    pub fn remaining_capacity(&self) -> usize { self.capacity() - self.len }

    /// The allocator this vector uses
    pub fn allocator(&self) -> &A { self.buf.allocator() }

    /// Returns a raw pointer to the first slot
    ///
    /// The pointer is dangling if the capacity is zero
    pub fn as_ptr(&self) -> *const T { self.buf.ptr().as_ptr() }

    /// Returns an unsafe mutable pointer to the first slot
    ///
    /// The pointer is dangling if the capacity is zero
    pub fn as_mut_ptr(&mut self) -> *mut T { self.buf.ptr().as_ptr() }

    /// Extracts a slice containing the live elements
    pub fn as_slice(&self) -> &[T] { self }

    /// Extracts a mutable slice containing the live elements
    pub fn as_mut_slice(&mut self) -> &mut [T] { self }

    /// Returns a reference to the element at `index`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.as_slice().get(index).ok_or(Error::out_of_range(index, len))
    }

    /// Returns a mutable reference to the element at `index`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice().get_mut(index).ok_or(Error::out_of_range(index, len))
    }

    /// Returns a copy of the first element
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the vector is empty
    pub fn front(&self) -> Result<T, Error>
    where
        T: Clone,
    {
        self.as_slice().first().cloned().ok_or(Error::out_of_range(0, 0))
    }

    /// Returns a copy of the last element
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the vector is empty
    pub fn back(&self) -> Result<T, Error>
    where
        T: Clone,
    {
        self.as_slice().last().cloned().ok_or(Error::out_of_range(0, 0))
    }

    /// Grow the storage to exactly `new_capacity` slots
    ///
    /// Does nothing if the capacity is already at least `new_capacity`. The
    /// live elements are moved into the new region in order, the length is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails
    pub fn reserve(&mut self, new_capacity: usize) {
        if self.try_reserve(new_capacity).is_err() {
            capacity::allocation_failure(new_capacity)
        }
    }

    /// Grow the storage to exactly `new_capacity` slots
    ///
    /// Does nothing if the capacity is already at least `new_capacity`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the allocator cannot provide the storage,
    /// in which case the vector is left unchanged
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity <= self.capacity() {
            return Ok(())
        }

        // Safety
        //
        // * the first `len` slots are live
        // * `len <= capacity < new_capacity`
        unsafe { self.buf.try_relocate(self.len, new_capacity)? }
        Ok(())
    }

    /// Make room for at least `additional` more elements, growing by at least doubling
    pub(crate) fn try_reserve_additional(&mut self, additional: usize) -> Result<(), Error> {
        if self.remaining_capacity() >= additional {
            return Ok(())
        }

        let needed = self.len.checked_add(additional).ok_or(raw::AllocError)?;
        let grown = capacity::grown(self.capacity()).unwrap_or(needed);
        self.try_reserve(needed.max(grown))
    }

    #[cold]
    #[inline(never)]
    fn try_grow(&mut self) -> Result<(), Error> {
        let new_capacity = capacity::grown(self.capacity())?;
        self.try_reserve(new_capacity)
    }

    /// Appends an element to the back of the vector, doubling the capacity if it is full
    ///
    /// # Panics
    ///
    /// Panics if the storage needs to grow and the allocation fails
    pub fn push(&mut self, value: T) -> &mut T { self.emplace_back_with(|| value) }

    /// Appends an element to the back of the vector, doubling the capacity if it is full
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the storage needs to grow and the allocation
    /// fails. The vector is unchanged and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<&mut T, Error> { self.try_emplace_back_with(|| value) }

    /// Appends the element produced by `make` to the back of the vector,
    /// doubling the capacity if it is full
    ///
    /// `make` runs after any growth, and its result is constructed in
    /// place through the allocator.
    ///
    /// # Panics
    ///
    /// Panics if the storage needs to grow and the allocation fails
    pub fn emplace_back_with<F: FnOnce() -> T>(&mut self, make: F) -> &mut T {
        if self.is_full() && self.try_grow().is_err() {
            capacity::growth_failure(self.capacity())
        }

        // Safety
        //
        // the vector isn't full
        unsafe { self.construct_back(make()) }
    }

    /// Appends the element produced by `make` to the back of the vector,
    /// doubling the capacity if it is full
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the storage needs to grow and the allocation
    /// fails. The vector is unchanged and `make` is not called.
    pub fn try_emplace_back_with<F: FnOnce() -> T>(&mut self, make: F) -> Result<&mut T, Error> {
        if self.is_full() {
            self.try_grow()?;
        }

        // Safety
        //
        // the vector isn't full
        Ok(unsafe { self.construct_back(make()) })
    }

    /// # Safety
    ///
    /// the vector must not be full
    unsafe fn construct_back(&mut self, value: T) -> &mut T {
        debug_assert!(
            !self.is_full(),
            "Tried to construct past capacity! This is UB in release mode"
        );

        // Safety
        //
        // the slot at `len` is allocated and not live. `len` only moves
        // once the element has been constructed
        unsafe {
            let slot = self.buf.ptr().add(self.len);
            self.buf.allocator().construct(slot, value);
            self.len += 1;
            &mut *slot.as_ptr()
        }
    }

    /// Destroys the last element, if there is one
    ///
    /// The capacity is unchanged.
    pub fn pop_back(&mut self) {
        if let Some(len) = self.len.checked_sub(1) {
            self.len = len;
            // Safety
            //
            // the slot at the old `len - 1` was live
            unsafe { self.buf.destroy_range(len, len + 1) }
        }
    }

    /// Removes the last element from the vector and returns it, or [`None`] if it is empty
    pub fn pop(&mut self) -> Option<T> {
        let len = self.len.checked_sub(1)?;
        self.len = len;
        // Safety
        //
        // the slot at the old `len - 1` was live, and is now logically moved-out
        unsafe { Some(self.buf.ptr().add(len).as_ptr().read()) }
    }

    /// Destroys every element, keeping the capacity
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        // Safety
        //
        // the slots `0..len` were live
        unsafe { self.buf.destroy_range(0, len) }
    }

    /// Takes the storage out of this vector, leaving it without any storage
    ///
    /// The returned vector owns exactly the elements and capacity this vector had.
    /// This vector is left empty with a capacity of zero and a copy of the
    /// allocator; it may be reused or dropped.
    ///
    /// ```rust
    /// # use alloc_vec::{avec, AllocVec};
    /// let mut a: AllocVec<i32> = avec![1, 2, 3];
    /// let b = a.take();
    /// assert_eq!(b, [1, 2, 3]);
    /// assert!(a.is_empty());
    /// assert_eq!(a.capacity(), 0);
    /// ```
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        let sentinel = Self {
            len: 0,
            buf: RawBuf::empty(self.allocator().clone()),
        };
        mem::replace(self, sentinel)
    }

    /// Replaces the contents of this vector with the storage of `other`
    ///
    /// The previous elements of this vector are destroyed and its storage released.
    /// `other` is left as by [`AllocVec::take`].
    pub fn move_from(&mut self, other: &mut Self)
    where
        A: Clone,
    {
        *self = other.take();
    }

    /// Creates a copy of this vector with the same capacity
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the allocator cannot provide the storage
    pub fn try_clone(&self) -> Result<Self, Error>
    where
        T: Clone,
        A: Clone,
    {
        self.try_clone_in(self.allocator().clone())
    }

    /// Creates a copy of this vector with the same capacity, allocated from `alloc`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the allocator cannot provide the storage
    pub fn try_clone_in(&self, alloc: A) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut buf = RawBuf::try_with_capacity_in(self.capacity(), alloc)?;
        // Safety
        //
        // the new region holds `capacity >= len` uninitialized slots
        unsafe { buf.clone_into_prefix(self) }
        Ok(Self { len: self.len, buf })
    }

    /// Replaces the contents of this vector with a copy of `source`
    ///
    /// The copy is allocated from this vector's allocator and is built completely
    /// before anything of this vector is released.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the allocator cannot provide the storage,
    /// in which case this vector is left unchanged
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), Error>
    where
        T: Clone,
        A: Clone,
    {
        *self = source.try_clone_in(self.allocator().clone())?;
        Ok(())
    }

    /// A cursor at the first element
    pub fn begin(&mut self) -> Cursor<'_, T> { Cursor::new(self.buf.ptr(), 0) }

    /// A cursor one past the last element
    pub fn end(&mut self) -> Cursor<'_, T> { Cursor::new(self.buf.ptr(), self.len) }

    /// Cursors at the first element and one past the last element
    ///
    /// ```rust
    /// # use alloc_vec::{avec, AllocVec};
    /// let mut vec: AllocVec<i32> = avec![1, 2, 3];
    /// let (mut cursor, end) = vec.cursors();
    /// while cursor != end {
    ///     // Safety: the cursor is in `begin..end`
    ///     unsafe { *cursor.get_mut() *= 10 };
    ///     cursor.inc();
    /// }
    /// assert_eq!(vec, [10, 20, 30]);
    /// ```
    pub fn cursors(&mut self) -> (Cursor<'_, T>, Cursor<'_, T>) {
        let ptr = self.buf.ptr();
        (Cursor::new(ptr, 0), Cursor::new(ptr, self.len))
    }

    /// Split the vector into its length and buffer without destroying anything
    pub(crate) fn into_raw_parts(self) -> (usize, RawBuf<T, A>) {
        let this = ManuallyDrop::new(self);
        // Safety
        //
        // `this` is never dropped, so the buffer is read out exactly once
        unsafe { (this.len, ptr::read(&this.buf)) }
    }
}
