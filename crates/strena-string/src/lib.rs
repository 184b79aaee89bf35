//! # strena-string
//!
//! Byte-string views and algorithms that allocate exclusively through
//! `strena-memory`.
//!
//! [`Str`] is a `Copy` non-owning view; every derivative operation either
//! copies into a caller-supplied allocator or, for [`StrBuf`], writes in
//! place within bounds the allocator already handed out. Operations are
//! byte-oriented throughout; there is no Unicode awareness beyond the
//! ASCII case maps.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ops;
pub mod search;
pub mod seq;
pub mod view;

pub use seq::StrSeq;
pub use view::{Str, StrBuf};
