//! Non-owning byte-string views and pre-sized mutable buffers.

use std::fmt;
use std::io::Write;

use strena_memory::BytesAlloc;

/// A non-owning view of bytes with explicit length and no terminator.
///
/// Validity is bounded by the storage it points into: a view into an
/// arena must not outlive the arena's next `free`/`clear`, which the
/// borrow checker enforces. Two views may alias the same bytes.
/// Equality and ordering are pure byte comparisons over the full length.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Str<'a> {
    bytes: &'a [u8],
}

impl<'a> Str<'a> {
    /// Zero-copy view over borrowed bytes.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the view is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The viewed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Byte at `idx`; panics when out of range.
    #[must_use]
    pub fn byte(&self, idx: usize) -> u8 {
        self.bytes[idx]
    }

    /// Debug output: the raw bytes followed by a newline, to stdout.
    ///
    /// Diagnostic only; not part of the core contract, and write errors
    /// are ignored.
    pub fn print(&self) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let _ = out.write_all(self.bytes);
        let _ = out.write_all(b"\n");
    }
}

impl<'a> From<&'a str> for Str<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Str<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Display for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.bytes))
    }
}

impl fmt::Debug for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Str")
            .field(&String::from_utf8_lossy(self.bytes))
            .finish()
    }
}

/// A mutable string whose storage was pre-sized through an allocator.
///
/// This is the only way bytes are written in place: the buffer's bounds
/// come from the allocator itself, so piecewise construction (as in
/// [`StrSeq::join`](crate::StrSeq::join)) cannot write past what was
/// allocated.
pub struct StrBuf<'a> {
    bytes: &'a mut [u8],
}

impl<'a> StrBuf<'a> {
    /// Allocate a buffer of exactly `len` bytes from `alloc`.
    pub fn alloc_in<A: BytesAlloc>(len: usize, alloc: &'a A) -> Self {
        Self {
            bytes: alloc.alloc_bytes(len),
        }
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Overwrite `[loc, loc + s.len())` with the bytes of `s`.
    ///
    /// No allocation; panics if `s` does not fit at `loc`.
    pub fn insert_at(&mut self, s: Str<'_>, loc: usize) {
        let len = self.bytes.len();
        let end = loc.checked_add(s.len());
        let Some(end) = end.filter(|&end| end <= len) else {
            panic!(
                "string contract violation: inserting {} bytes at {loc} into a {len}-byte buffer",
                s.len()
            );
        };
        self.bytes[loc..end].copy_from_slice(s.as_bytes());
    }

    /// Overwrite the front of the buffer with the bytes of `s`.
    pub fn copy_from(&mut self, s: Str<'_>) {
        self.insert_at(s, 0);
    }

    /// Read-only view of the buffer.
    #[must_use]
    pub fn as_str(&self) -> Str<'_> {
        Str::new(self.bytes)
    }

    /// Freeze the buffer into a view.
    #[must_use]
    pub fn into_str(self) -> Str<'a> {
        Str::new(self.bytes)
    }
}

impl fmt::Debug for StrBuf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StrBuf")
            .field(&String::from_utf8_lossy(self.bytes))
            .finish()
    }
}
