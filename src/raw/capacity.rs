use super::{AllocError, AllocResult};

/// The capacity a full buffer grows to: one slot for an empty buffer,
/// double the current capacity otherwise
pub(crate) fn grown(capacity: usize) -> AllocResult<usize> {
    match capacity {
        0 => Ok(1),
        capacity => capacity.checked_mul(2).ok_or(AllocError),
    }
}

#[cold]
#[inline(never)]
pub(crate) fn allocation_failure(capacity: usize) -> ! {
    panic!("Tried to allocate space for {} elements and failed", capacity)
}

#[cold]
#[inline(never)]
pub(crate) fn growth_failure(capacity: usize) -> ! {
    panic!("Tried to grow past a capacity of {} and failed", capacity)
}
