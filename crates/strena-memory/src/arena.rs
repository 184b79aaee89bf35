//! Fixed-capacity bump arena with LIFO retraction.
//!
//! An [`Arena`] owns a buffer of exactly the capacity it was created with
//! and hands out regions by advancing a single offset. Allocation takes a
//! shared receiver so any number of live views can coexist; `free` and
//! `clear` take an exclusive receiver, so the borrow checker retires every
//! outstanding view before the offset can move backwards.

use std::cell::{Cell, UnsafeCell};
use std::fmt;
use std::mem;

/// Error for the recoverable allocation path ([`Arena::try_alloc`]).
///
/// Hosts with data-dependent capacity needs can handle this instead of
/// crashing; the plain [`Arena::alloc`] path treats exhaustion as a
/// contract violation and panics.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    /// The request does not fit in the remaining capacity.
    #[error("arena exhausted: requested {requested} bytes, {available} available")]
    Exhausted {
        /// Bytes asked for.
        requested: usize,
        /// Bytes left before the capacity limit.
        available: usize,
    },
}

/// Identity of an arena's backing buffer.
///
/// Compared by storage address, never by contents. Used by
/// [`ScratchProvider`](crate::ScratchProvider) to guarantee the scratch
/// arena it returns is not the one the caller is already allocating into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaId(usize);

/// Fixed-capacity bump allocator.
///
/// Invariant: `0 <= used <= capacity` at all times. Memory handed out is
/// reclaimed either in LIFO order via [`free`](Arena::free) or all at once
/// via [`clear`](Arena::clear); there is no general deallocator. Dropping
/// the arena releases the buffer, and any view still borrowing it is a
/// compile error rather than a dangling pointer.
pub struct Arena {
    buf: Box<[UnsafeCell<u8>]>,
    used: Cell<usize>,
}

impl Arena {
    /// Create an arena backed by exactly `capacity` bytes.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let buf = (0..capacity).map(|_| UnsafeCell::new(0)).collect();
        Self {
            buf,
            used: Cell::new(0),
        }
    }

    /// Total capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Current bump offset in bytes.
    #[must_use]
    pub fn used(&self) -> usize {
        self.used.get()
    }

    /// Bytes left before the capacity limit.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.used.get()
    }

    /// Identity of this arena's buffer, for scratch-conflict checks.
    #[must_use]
    pub fn id(&self) -> ArenaId {
        ArenaId(self.buf.as_ptr() as usize)
    }

    /// Allocate `size` bytes, panicking if they do not fit.
    ///
    /// Exceeding the capacity is a caller bug, not a runtime condition;
    /// see [`try_alloc`](Arena::try_alloc) for the recoverable variant.
    /// The returned bytes are zeroed on a fresh arena but may hold stale
    /// data after [`clear`](Arena::clear).
    pub fn alloc(&self, size: usize) -> &mut [u8] {
        match self.try_alloc(size) {
            Ok(bytes) => bytes,
            Err(e) => panic!("arena contract violation: {e}"),
        }
    }

    /// Allocate `size` bytes, or report exhaustion.
    pub fn try_alloc(&self, size: usize) -> Result<&mut [u8], ArenaError> {
        let start = self.used.get();
        let available = self.buf.len() - start;
        if size > available {
            return Err(ArenaError::Exhausted {
                requested: size,
                available,
            });
        }
        self.used.set(start + size);

        let cells = &self.buf[start..start + size];
        let data = UnsafeCell::raw_get(cells.as_ptr());
        // SAFETY: `[start, start + size)` was reserved above. `used` only
        // grows while shared borrows exist (`free`/`clear` take `&mut
        // self`), so no other live reference covers this range, and the
        // arena itself never reads through `buf`.
        Ok(unsafe { std::slice::from_raw_parts_mut(data, size) })
    }

    /// Allocate a default-initialized slice of `len` values of `T`.
    ///
    /// The offset is first padded to `align_of::<T>()`, so `used` advances
    /// by the padding plus `len * size_of::<T>()`. Panics if the padded
    /// request does not fit.
    pub fn alloc_slice<T: Copy + Default>(&self, len: usize) -> &mut [T] {
        if len == 0 {
            return &mut [];
        }
        let Some(size) = mem::size_of::<T>().checked_mul(len) else {
            panic!("arena contract violation: slice of {len} elements overflows usize");
        };
        let align = mem::align_of::<T>();
        let start = self.used.get();
        let addr = self.buf.as_ptr() as usize + start;
        let pad = addr.wrapping_neg() & (align - 1);
        let Some(needed) = size.checked_add(pad) else {
            panic!("arena contract violation: slice of {len} elements overflows usize");
        };
        let available = self.buf.len() - start;
        assert!(
            needed <= available,
            "arena contract violation: requested {needed} bytes, {available} available"
        );
        self.used.set(start + needed);

        let cells = &self.buf[start + pad..start + needed];
        let data = UnsafeCell::raw_get(cells.as_ptr()).cast::<T>();
        // SAFETY: the region was reserved above, is aligned for `T` by the
        // padding, and is disjoint from every other live allocation for
        // the same reason as in `try_alloc`. Every element is written
        // before the slice is formed.
        unsafe {
            for i in 0..len {
                data.add(i).write(T::default());
            }
            std::slice::from_raw_parts_mut(data, len)
        }
    }

    /// Retract the most recent `size` bytes.
    ///
    /// Contract: retractions must mirror allocations in reverse (LIFO)
    /// order; the arena cannot verify this. Retracting more than `used`
    /// panics.
    pub fn free(&mut self, size: usize) {
        let used = self.used.get();
        assert!(
            size <= used,
            "arena contract violation: freeing {size} bytes with {used} in use"
        );
        self.used.set(used - size);
    }

    /// Reset the bump offset to zero in O(1).
    ///
    /// Does not touch the bytes; the next allocation reuses the buffer
    /// from offset zero.
    pub fn clear(&mut self) {
        self.used.set(0);
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.capacity())
            .field("used", &self.used.get())
            .finish_non_exhaustive()
    }
}
