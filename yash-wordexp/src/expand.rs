// This file is part of yash, an extended POSIX shell.
// Copyright (C) 2025 WATANABE Yuki

//! Stand-in word expansion and cleanup
//!
//! These functions are the safe Rust counterparts of the C
//! [`wordexp`](crate::ffi::wordexp) and [`wordfree`](crate::ffi::wordfree).
//! Word expansion is not available, so [`wordexp`] always fails with
//! [`Error::NoSys`] and leaves the record empty.

use crate::flag::Flag;
use crate::record::WordExp;
use crate::status::Error;
use enumset::EnumSet;
use std::ffi::CStr;

/// Performs word expansion.
///
/// This implementation ignores `words` and `flags`, resets the record (if
/// any) to the empty state, and returns `Err(Error::NoSys)`. It never
/// allocates memory.
///
/// The record is reset even with [`Flag::Append`] or [`Flag::Reuse`]. A
/// previous call cannot have stored any words in it, so there is nothing to
/// keep or free.
///
/// ```
/// # use yash_wordexp::{wordexp, Error, Flag, WordExp};
/// let mut record = WordExp::new();
/// let result = wordexp(c"echo hi", Some(&mut record), Flag::NoCmd.into());
/// assert_eq!(result, Err(Error::NoSys));
/// assert!(record.is_empty());
/// ```
pub fn wordexp(
    words: &CStr,
    record: Option<&mut WordExp>,
    flags: EnumSet<Flag>,
) -> Result<(), Error> {
    let _ = (words, flags);
    if let Some(record) = record {
        record.reset();
    }
    Err(Error::NoSys)
}

/// Frees the result of word expansion.
///
/// Since [`wordexp`] never stores any words, this function only resets the
/// record to the empty state. It does nothing if `record` is `None`, and
/// calling it again on the same record has no further effect.
pub fn wordfree(record: Option<&mut WordExp>) {
    if let Some(record) = record {
        record.reset();
    }
}
