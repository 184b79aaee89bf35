//! Trivial heap-backed allocation pool.
//!
//! The portability counterpart of the bump arena: every request gets its
//! own heap block, addresses stay stable for the pool's lifetime, and
//! [`release`](HeapPool::release) returns everything at once. Exists so
//! the string algorithms, generic over
//! [`BytesAlloc`](crate::BytesAlloc), need no arena to run.

use std::cell::{RefCell, UnsafeCell};
use std::fmt;

use tracing::debug;

/// Heap-backed allocation pool with bulk release.
#[derive(Default)]
pub struct HeapPool {
    blocks: RefCell<Vec<Box<[UnsafeCell<u8>]>>>,
}

impl HeapPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate `size` zeroed bytes in a fresh heap block.
    ///
    /// The block is retained by the pool, so its address is stable until
    /// [`release`](HeapPool::release) or drop.
    pub fn alloc(&self, size: usize) -> &mut [u8] {
        let block: Box<[UnsafeCell<u8>]> = (0..size).map(|_| UnsafeCell::new(0)).collect();
        let data = UnsafeCell::raw_get(block.as_ptr());
        self.blocks.borrow_mut().push(block);
        // SAFETY: the block's heap storage is freshly allocated, unaliased,
        // and pinned in place by the boxed slice just pushed; it is only
        // dropped by `release` or `Drop`, both of which require `&mut
        // self` and therefore end this loan first.
        unsafe { std::slice::from_raw_parts_mut(data, size) }
    }

    /// Number of live blocks.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.borrow().len()
    }

    /// Drop every block at once.
    pub fn release(&mut self) {
        let blocks = self.blocks.get_mut();
        debug!(blocks = blocks.len(), "heap pool released");
        blocks.clear();
    }
}

impl fmt::Debug for HeapPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapPool")
            .field("blocks", &self.block_count())
            .finish_non_exhaustive()
    }
}
