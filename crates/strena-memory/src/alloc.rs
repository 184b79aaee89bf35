//! Allocation capability shared by the arena and heap backends.

use crate::arena::Arena;
use crate::heap::HeapPool;

/// Capability to hand out a fresh byte region.
///
/// String algorithms are generic over this trait, so their bodies exist
/// once and work against any backend. Backends differ only in how the
/// storage is reclaimed: the bump arena retracts or resets, the heap pool
/// releases every block at once.
pub trait BytesAlloc {
    /// Allocate `len` bytes of storage valid for as long as `self` is
    /// borrowed.
    ///
    /// Exhaustion is a contract violation and panics; backends with a
    /// recoverable path expose it on their own type.
    fn alloc_bytes(&self, len: usize) -> &mut [u8];
}

impl BytesAlloc for Arena {
    fn alloc_bytes(&self, len: usize) -> &mut [u8] {
        self.alloc(len)
    }
}

impl BytesAlloc for HeapPool {
    fn alloc_bytes(&self, len: usize) -> &mut [u8] {
        self.alloc(len)
    }
}
