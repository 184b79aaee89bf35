//! # strena-memory
//!
//! Memory management for the Strena workspace.
//!
//! Provides a fixed-capacity bump [`Arena`] with LIFO retraction, a
//! per-thread [`ScratchProvider`] holding a pair of reusable scratch
//! arenas, a trivial [`HeapPool`] backend, and the [`BytesAlloc`]
//! capability trait the string algorithms are generic over.
#![warn(missing_docs)]

pub mod alloc;
pub mod arena;
pub mod heap;
pub mod scratch;
pub mod stats;

pub use alloc::BytesAlloc;
pub use arena::{Arena, ArenaError, ArenaId};
pub use heap::HeapPool;
pub use scratch::{Scratch, ScratchProvider, DEFAULT_SCRATCH_CAPACITY};
pub use stats::ScratchStats;

/// `n` kibibytes, in bytes.
#[must_use]
pub const fn kib(n: usize) -> usize {
    n << 10
}

/// `n` mebibytes, in bytes.
#[must_use]
pub const fn mib(n: usize) -> usize {
    n << 20
}

/// `n` gibibytes, in bytes.
#[must_use]
pub const fn gib(n: usize) -> usize {
    n << 30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_helpers() {
        assert_eq!(kib(1), 1024);
        assert_eq!(mib(2), 2 * 1024 * 1024);
        assert_eq!(gib(1), 1024 * 1024 * 1024);
    }
}
