//! Derivative string operations: copies, slices, strips, case maps.
//!
//! Everything here allocates fresh storage from a caller-supplied
//! backend; nothing mutates the source view. The strip operations
//! additionally borrow a scratch arena guaranteed to be disjoint from the
//! destination arena, mirroring the discipline every helper in this
//! system is expected to follow.

use strena_memory::{Arena, BytesAlloc, ScratchProvider};

use crate::view::{Str, StrBuf};

impl<'a> Str<'a> {
    /// Byte-for-byte copy into `alloc`, independent of this view's
    /// storage.
    pub fn copy_in<'b, A: BytesAlloc>(&self, alloc: &'b A) -> Str<'b> {
        let bytes = alloc.alloc_bytes(self.len());
        bytes.copy_from_slice(self.as_bytes());
        Str::new(bytes)
    }

    /// New string holding `self` followed by `other`.
    pub fn concat<'b, A: BytesAlloc>(&self, other: Str<'_>, alloc: &'b A) -> Str<'b> {
        let mut buf = StrBuf::alloc_in(self.len() + other.len(), alloc);
        buf.insert_at(*self, 0);
        buf.insert_at(other, self.len());
        buf.into_str()
    }

    /// Fresh copy of `self[start..end)`.
    ///
    /// Requires `start < len`, `0 < end <= len` and `start < end`;
    /// violations panic.
    pub fn substr<'b, A: BytesAlloc>(&self, start: usize, end: usize, alloc: &'b A) -> Str<'b> {
        let len = self.len();
        assert!(
            start < len && end > 0 && end <= len && start < end,
            "string contract violation: substr range {start}..{end} of a {len}-byte string"
        );
        let bytes = alloc.alloc_bytes(end - start);
        bytes.copy_from_slice(&self.as_bytes()[start..end]);
        Str::new(bytes)
    }

    /// Remove `pat` from the front if `self` starts with it.
    ///
    /// The prefix is copied into a scratch arena disjoint from `arena`
    /// and compared there; on a match the remainder is a fresh copy from
    /// `arena`, otherwise `self` is returned unchanged with no
    /// allocation. The scratch arena is cleared when the comparison is
    /// done. Requires `pat.len() <= self.len()`.
    pub fn strip_front(self, pat: Str<'_>, arena: &'a Arena, scratch: &ScratchProvider) -> Str<'a> {
        let (len, n) = (self.len(), pat.len());
        assert!(
            n <= len,
            "string contract violation: stripping {n} bytes from a {len}-byte string"
        );
        let scratch = scratch.scratch(Some(arena.id()));
        let front = scratch.alloc(n);
        front.copy_from_slice(&self.as_bytes()[..n]);
        if Str::new(front) == pat {
            let rest = arena.alloc(len - n);
            rest.copy_from_slice(&self.as_bytes()[n..]);
            Str::new(rest)
        } else {
            self
        }
    }

    /// Remove `pat` from the back if `self` ends with it.
    ///
    /// Same contract and scratch discipline as
    /// [`strip_front`](Str::strip_front).
    pub fn strip_back(self, pat: Str<'_>, arena: &'a Arena, scratch: &ScratchProvider) -> Str<'a> {
        let (len, n) = (self.len(), pat.len());
        assert!(
            n <= len,
            "string contract violation: stripping {n} bytes from a {len}-byte string"
        );
        let scratch = scratch.scratch(Some(arena.id()));
        let back = scratch.alloc(n);
        back.copy_from_slice(&self.as_bytes()[len - n..]);
        if Str::new(back) == pat {
            let rest = arena.alloc(len - n);
            rest.copy_from_slice(&self.as_bytes()[..len - n]);
            Str::new(rest)
        } else {
            self
        }
    }

    /// Copy with a terminating zero byte appended, for consumers that
    /// expect one. The returned view's length excludes the terminator.
    pub fn nullify<'b, A: BytesAlloc>(&self, alloc: &'b A) -> Str<'b> {
        let len = self.len();
        let bytes = alloc.alloc_bytes(len + 1);
        bytes[..len].copy_from_slice(self.as_bytes());
        bytes[len] = 0;
        Str::new(&bytes[..len])
    }

    /// Copy with ASCII uppercase letters mapped to lowercase.
    pub fn to_lower<'b, A: BytesAlloc>(&self, alloc: &'b A) -> Str<'b> {
        let bytes = alloc.alloc_bytes(self.len());
        for (dst, src) in bytes.iter_mut().zip(self.as_bytes()) {
            *dst = src.to_ascii_lowercase();
        }
        Str::new(bytes)
    }

    /// Copy with ASCII lowercase letters mapped to uppercase.
    pub fn to_upper<'b, A: BytesAlloc>(&self, alloc: &'b A) -> Str<'b> {
        let bytes = alloc.alloc_bytes(self.len());
        for (dst, src) in bytes.iter_mut().zip(self.as_bytes()) {
            *dst = src.to_ascii_uppercase();
        }
        Str::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strena_memory::HeapPool;

    #[test]
    fn copy_is_independent_storage() {
        let arena = Arena::new(32);
        let src = Str::from("hello");
        let copy = src.copy_in(&arena);
        assert_eq!(copy, src);
        assert_ne!(copy.as_bytes().as_ptr(), src.as_bytes().as_ptr());
        assert_eq!(arena.used(), 5);
    }

    #[test]
    fn concat_appends() {
        let arena = Arena::new(32);
        let joined = Str::from("foo").concat(Str::from("bar"), &arena);
        assert_eq!(joined, Str::from("foobar"));
        assert_eq!(joined.len(), 6);
    }

    #[test]
    fn concat_works_over_the_heap_backend() {
        let pool = HeapPool::new();
        let joined = Str::from("a").concat(Str::from("b"), &pool);
        assert_eq!(joined, Str::from("ab"));
    }

    #[test]
    fn substr_matches_manual_slice() {
        let arena = Arena::new(32);
        let s = Str::from("abcdef");
        let mid = s.substr(1, 4, &arena);
        assert_eq!(mid.as_bytes(), &s.as_bytes()[1..4]);
        assert_eq!(mid, Str::from("bcd"));
    }

    #[test]
    #[should_panic(expected = "string contract violation")]
    fn substr_start_at_len_panics() {
        let arena = Arena::new(8);
        Str::from("abc").substr(3, 3, &arena);
    }

    #[test]
    #[should_panic(expected = "string contract violation")]
    fn substr_inverted_range_panics() {
        let arena = Arena::new(8);
        Str::from("abc").substr(2, 1, &arena);
    }

    #[test]
    fn strip_front_on_match_drops_the_prefix() {
        let arena = Arena::new(64);
        let scratch = ScratchProvider::with_capacity(64);
        let s = Str::from("prefix-body");
        let stripped = s.strip_front(Str::from("prefix-"), &arena, &scratch);
        assert_eq!(stripped, Str::from("body"));
        assert_eq!(stripped.len(), s.len() - 7);
    }

    #[test]
    fn strip_front_without_match_returns_the_same_view() {
        let arena = Arena::new(64);
        let scratch = ScratchProvider::with_capacity(64);
        let s = Str::from("body");
        let kept = s.strip_front(Str::from("nope"), &arena, &scratch);
        assert_eq!(kept.as_bytes().as_ptr(), s.as_bytes().as_ptr());
        assert_eq!(arena.used(), 0);
    }

    #[test]
    fn strip_front_of_the_whole_string_yields_empty() {
        let arena = Arena::new(64);
        let scratch = ScratchProvider::with_capacity(64);
        let stripped = Str::from("all").strip_front(Str::from("all"), &arena, &scratch);
        assert!(stripped.is_empty());
    }

    #[test]
    fn strip_front_with_empty_pattern_copies() {
        let arena = Arena::new(64);
        let scratch = ScratchProvider::with_capacity(64);
        let s = Str::from("same");
        let copied = s.strip_front(Str::from(""), &arena, &scratch);
        assert_eq!(copied, s);
        assert_eq!(arena.used(), 4);
    }

    #[test]
    fn strip_back_on_match_drops_the_suffix() {
        let arena = Arena::new(64);
        let scratch = ScratchProvider::with_capacity(64);
        let stripped = Str::from("file.txt").strip_back(Str::from(".txt"), &arena, &scratch);
        assert_eq!(stripped, Str::from("file"));
    }

    #[test]
    fn strip_back_without_match_returns_the_same_view() {
        let arena = Arena::new(64);
        let scratch = ScratchProvider::with_capacity(64);
        let s = Str::from("file.txt");
        let kept = s.strip_back(Str::from(".rs"), &arena, &scratch);
        assert_eq!(kept.as_bytes().as_ptr(), s.as_bytes().as_ptr());
    }

    #[test]
    fn strips_leave_the_scratch_arena_clean() {
        let arena = Arena::new(64);
        let provider = ScratchProvider::with_capacity(64);
        Str::from("abcdef").strip_front(Str::from("abc"), &arena, &provider);
        Str::from("abcdef").strip_back(Str::from("xyz"), &arena, &provider);
        let scratch = provider.scratch(None);
        assert_eq!(scratch.used(), 0);
    }

    #[test]
    #[should_panic(expected = "string contract violation")]
    fn strip_with_oversized_pattern_panics() {
        let arena = Arena::new(64);
        let scratch = ScratchProvider::with_capacity(64);
        Str::from("ab").strip_front(Str::from("abc"), &arena, &scratch);
    }

    #[test]
    fn nullify_appends_a_terminator_byte() {
        let arena = Arena::new(8);
        let s = Str::from("ab").nullify(&arena);
        assert_eq!(s, Str::from("ab"));
        assert_eq!(s.len(), 2);
        // Logical length excludes the terminator, allocation includes it.
        assert_eq!(arena.used(), 3);
    }

    #[test]
    fn case_maps_are_ascii_only() {
        let arena = Arena::new(64);
        let mixed = Str::from("MiXeD-123");
        assert_eq!(mixed.to_lower(&arena), Str::from("mixed-123"));
        assert_eq!(mixed.to_upper(&arena), Str::from("MIXED-123"));
        let non_ascii = Str::new(&[0xC3, 0x89]); // UTF-8 'É', untouched
        assert_eq!(non_ascii.to_lower(&arena).as_bytes(), &[0xC3, 0x89]);
    }
}
