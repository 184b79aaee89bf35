//! Scratch-pool usage counters.

use std::cell::Cell;

/// Snapshot of scratch-pool usage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScratchStats {
    /// Total scratch acquisitions.
    pub acquisitions: u64,
    /// Acquisitions rerouted to the other slot because of a conflict.
    pub conflict_rerouted: u64,
}

/// Counter cells behind [`ScratchStats`].
///
/// A scratch pool is thread-scoped by design, so plain `Cell` counters
/// are enough; no atomics.
#[derive(Debug, Default)]
pub(crate) struct StatCounters {
    acquisitions: Cell<u64>,
    conflict_rerouted: Cell<u64>,
}

impl StatCounters {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn snapshot(&self) -> ScratchStats {
        ScratchStats {
            acquisitions: self.acquisitions.get(),
            conflict_rerouted: self.conflict_rerouted.get(),
        }
    }

    pub(crate) fn reset(&self) {
        self.acquisitions.set(0);
        self.conflict_rerouted.set(0);
    }

    pub(crate) fn record_acquisition(&self) {
        self.acquisitions.set(self.acquisitions.get() + 1);
    }

    pub(crate) fn record_conflict_reroute(&self) {
        self.conflict_rerouted.set(self.conflict_rerouted.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_counters_are_zeroed() {
        let counters = StatCounters::new();
        assert_eq!(counters.snapshot(), ScratchStats::default());
    }

    #[test]
    fn record_and_snapshot() {
        let counters = StatCounters::new();
        counters.record_acquisition();
        counters.record_acquisition();
        counters.record_conflict_reroute();
        let snap = counters.snapshot();
        assert_eq!(snap.acquisitions, 2);
        assert_eq!(snap.conflict_rerouted, 1);
    }

    #[test]
    fn reset_clears_counters() {
        let counters = StatCounters::new();
        counters.record_acquisition();
        counters.record_conflict_reroute();
        counters.reset();
        assert_eq!(counters.snapshot(), ScratchStats::default());
    }
}
