//! Substring and byte search.
//!
//! Naive scans, O(len * pat_len); absence is an ordinary `None`/`false`
//! result, never an error. An empty pattern and a pattern longer than the
//! string both report absence.

use crate::view::Str;

impl Str<'_> {
    /// Lowest index where `pat` occurs, or `None`.
    #[must_use]
    pub fn find(&self, pat: Str<'_>) -> Option<usize> {
        if pat.is_empty() || self.len() < pat.len() {
            return None;
        }
        self.as_bytes()
            .windows(pat.len())
            .position(|window| window == pat.as_bytes())
    }

    /// Lowest index holding the byte `c`, or `None`.
    #[must_use]
    pub fn find_char(&self, c: u8) -> Option<usize> {
        self.as_bytes().iter().position(|&b| b == c)
    }

    /// Whether `pat` occurs anywhere in `self`.
    #[must_use]
    pub fn contains(&self, pat: Str<'_>) -> bool {
        self.find(pat).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_returns_the_lowest_index() {
        assert_eq!(Str::from("abcabc").find(Str::from("bc")), Some(1));
        assert_eq!(Str::from("aaaa").find(Str::from("aa")), Some(0));
    }

    #[test]
    fn find_misses_report_none() {
        assert_eq!(Str::from("abc").find(Str::from("zz")), None);
        assert_eq!(Str::from("ab").find(Str::from("abc")), None);
        assert_eq!(Str::from("abc").find(Str::from("")), None);
    }

    #[test]
    fn find_char_scans_bytes() {
        let s = Str::from("hello");
        assert_eq!(s.find_char(b'l'), Some(2));
        assert_eq!(s.find_char(b'z'), None);
    }

    #[test]
    fn contains_tracks_find() {
        let s = Str::from("needle in haystack");
        assert!(s.contains(Str::from("in")));
        assert!(s.contains(Str::from("needle")));
        assert!(!s.contains(Str::from("thread")));
    }
}
