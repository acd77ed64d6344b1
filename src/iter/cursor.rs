use core::{fmt, marker::PhantomData, ptr::NonNull};

/// A position inside the storage of an [`AllocVec`](crate::AllocVec)
///
/// Created by [`AllocVec::begin`](crate::AllocVec::begin),
/// [`AllocVec::end`](crate::AllocVec::end) and
/// [`AllocVec::cursors`](crate::AllocVec::cursors). Two cursors compare equal
/// when they point at the same slot of the same vector. Vectors without
/// storage (a capacity of zero, or zero-sized elements) all share the same
/// dangling base, so cursors from two such vectors at the same position also
/// compare equal; only compare cursors taken from one vector.
///
/// Moving a cursor is always safe, it performs no bounds checking; only
/// dereferencing requires that the position is on a live element. The borrow
/// of the vector keeps it from growing or being dropped while cursors exist.
pub struct Cursor<'a, T> {
    base: NonNull<T>,
    index: usize,
    marker: PhantomData<&'a mut [T]>,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self { *self }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool { self.base == other.base && self.index == other.index }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("base", &self.base)
            .field("index", &self.index)
            .finish()
    }
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(base: NonNull<T>, index: usize) -> Self {
        Self {
            base,
            index,
            marker: PhantomData,
        }
    }

    /// The index of the slot this cursor points at
    pub fn position(&self) -> usize { self.index }

    /// Move to the next slot
    pub fn inc(&mut self) -> &mut Self {
        self.index = self.index.wrapping_add(1);
        self
    }

    /// Move to the previous slot
    pub fn dec(&mut self) -> &mut Self {
        self.index = self.index.wrapping_sub(1);
        self
    }

    /// Move to the next slot, returning the cursor from before the move
    pub fn post_inc(&mut self) -> Self {
        let old = *self;
        self.inc();
        old
    }

    /// Move to the previous slot, returning the cursor from before the move
    pub fn post_dec(&mut self) -> Self {
        let old = *self;
        self.dec();
        old
    }

    /// Get a reference to the element under the cursor
    ///
    /// # Safety
    ///
    /// * the cursor must be in `begin..end` of the vector it came from
    /// * no reference from [`Cursor::get_mut`] to the same slot may be alive
    pub unsafe fn get(&self) -> &T { unsafe { &*self.base.as_ptr().add(self.index) } }

    /// Get a mutable reference to the element under the cursor
    ///
    /// # Safety
    ///
    /// * the cursor must be in `begin..end` of the vector it came from
    /// * no other reference to the same slot may be alive, including ones
    ///   obtained through copies of this cursor
    pub unsafe fn get_mut(&mut self) -> &mut T { unsafe { &mut *self.base.as_ptr().add(self.index) } }
}
