//! Paired scratch arenas with conflict-aware checkout.
//!
//! A [`ScratchProvider`] is a per-thread context object owning exactly two
//! arenas. Helpers that need transient storage while producing results in
//! a caller's arena check out a scratch arena whose identity differs from
//! the caller's; the [`Scratch`] guard clears the arena again when it goes
//! out of scope, on every exit path.

use std::cell::{RefCell, RefMut};
use std::ops::Deref;

use tracing::{debug, trace};

use crate::arena::{Arena, ArenaId};
use crate::stats::{ScratchStats, StatCounters};

/// Capacity of each scratch arena unless overridden: 16 MiB.
pub const DEFAULT_SCRATCH_CAPACITY: usize = crate::mib(16);

/// A per-thread pool of exactly two scratch arenas.
///
/// Create one provider per thread (or per logically independent task) and
/// pass it by reference into any algorithm needing scratch space. The two
/// slots are distinct memory regions; a checkout naming one of them as the
/// conflict always yields the other. A third simultaneously-live disjoint
/// scratch buffer is unsupported: checking out a slot that is already
/// checked out is a fatal contract violation.
pub struct ScratchProvider {
    slots: [RefCell<Arena>; 2],
    // Cached so a conflict check never has to borrow a slot that the
    // caller may currently hold.
    ids: [ArenaId; 2],
    stats: StatCounters,
}

impl ScratchProvider {
    /// Create a provider with two arenas of [`DEFAULT_SCRATCH_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SCRATCH_CAPACITY)
    }

    /// Create a provider with two arenas of `capacity` bytes each.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let first = Arena::new(capacity);
        let second = Arena::new(capacity);
        let ids = [first.id(), second.id()];
        debug!(capacity, "scratch arena pair initialized");
        Self {
            slots: [RefCell::new(first), RefCell::new(second)],
            ids,
            stats: StatCounters::new(),
        }
    }

    /// Check out a scratch arena that is not the one identified by
    /// `conflict`.
    ///
    /// With no conflict, or a conflict matching neither slot, the first
    /// slot is returned. The guard clears the arena when dropped.
    ///
    /// # Panics
    ///
    /// Panics if the selected slot is already checked out; two scratch
    /// arenas is the pool's hard limit.
    pub fn scratch(&self, conflict: Option<ArenaId>) -> Scratch<'_> {
        let slot = match conflict {
            Some(id) if id == self.ids[0] => {
                self.stats.record_conflict_reroute();
                1
            }
            Some(id) if id == self.ids[1] => {
                self.stats.record_conflict_reroute();
                0
            }
            _ => 0,
        };
        self.stats.record_acquisition();
        trace!(slot, "scratch arena checked out");
        Scratch {
            arena: self.slots[slot].borrow_mut(),
        }
    }

    /// Snapshot of acquisition counters.
    #[must_use]
    pub fn stats(&self) -> ScratchStats {
        self.stats.snapshot()
    }

    /// Reset the acquisition counters.
    pub fn reset_stats(&self) {
        self.stats.reset();
    }
}

impl Default for ScratchProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Checked-out scratch arena; clears the arena on drop.
///
/// Dereferences to [`Arena`], so it can be handed to anything expecting a
/// shared arena reference. Views allocated from the scratch arena borrow
/// through the guard and therefore cannot outlive it.
pub struct Scratch<'p> {
    arena: RefMut<'p, Arena>,
}

impl Deref for Scratch<'_> {
    type Target = Arena;

    fn deref(&self) -> &Arena {
        &self.arena
    }
}

impl Drop for Scratch<'_> {
    fn drop(&mut self) {
        self.arena.clear();
    }
}
