//! Fixed-count, arena-backed sequences of string views.

use strena_memory::{Arena, BytesAlloc};

use crate::view::{Str, StrBuf};

/// An ordered sequence of [`Str`] views with its backing slice carved
/// from an arena.
///
/// The count is fixed at creation. [`clear`](StrSeq::clear) blanks the
/// entries and drops the logical count to zero, but the backing slice
/// stays allocated until the arena itself is reset.
#[derive(Debug)]
pub struct StrSeq<'a> {
    entries: &'a mut [Str<'a>],
    len: usize,
}

impl<'a> StrSeq<'a> {
    /// Allocate backing storage for exactly `count` views from `arena`,
    /// all initialized to the empty view.
    pub fn new_in(count: usize, arena: &'a Arena) -> Self {
        Self {
            entries: arena.alloc_slice::<Str<'a>>(count),
            len: count,
        }
    }

    /// Logical number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the logical count is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entry at `idx`; panics when out of range.
    #[must_use]
    pub fn get(&self, idx: usize) -> Str<'a> {
        assert!(
            idx < self.len,
            "string contract violation: index {idx} in a {}-entry sequence",
            self.len
        );
        self.entries[idx]
    }

    /// Replace the entry at `idx`; panics when out of range.
    pub fn set(&mut self, idx: usize, s: Str<'a>) {
        assert!(
            idx < self.len,
            "string contract violation: index {idx} in a {}-entry sequence",
            self.len
        );
        self.entries[idx] = s;
    }

    /// Iterate over the logical entries.
    pub fn iter(&self) -> impl Iterator<Item = Str<'a>> + '_ {
        self.entries[..self.len].iter().copied()
    }

    /// Blank every entry to the empty view and drop the logical count to
    /// zero. The arena's bump offset is untouched.
    pub fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry = Str::default();
        }
        self.len = 0;
    }

    /// Join every entry with `delim` between consecutive entries.
    ///
    /// Allocates the total length once, then writes each piece at its
    /// offset. Panics on an empty sequence.
    pub fn join<'b, A: BytesAlloc>(&self, delim: Str<'_>, alloc: &'b A) -> Str<'b> {
        assert!(
            self.len >= 1,
            "string contract violation: joining an empty sequence"
        );
        let total =
            self.iter().map(|s| s.len()).sum::<usize>() + (self.len - 1) * delim.len();
        let mut buf = StrBuf::alloc_in(total, alloc);
        let mut offset = 0;
        for (idx, part) in self.iter().enumerate() {
            buf.insert_at(part, offset);
            offset += part.len();
            if idx + 1 != self.len {
                buf.insert_at(delim, offset);
                offset += delim.len();
            }
        }
        buf.into_str()
    }
}
