// This file is part of yash, an extended POSIX shell.
// Copyright (C) 2025 WATANABE Yuki

//! Result record of word expansion
//!
//! [`WordExp`] has the same layout as the C `wordexp_t` structure. The caller
//! owns the record and passes it to [`wordexp`](crate::wordexp) and
//! [`wordfree`](crate::wordfree).

use std::ffi::c_char;
use std::ptr;

/// Result of word expansion
///
/// The fields are public and named after the C structure members so that
/// C code and Rust code can share the record through the
/// [C interface](crate::ffi).
///
/// A native implementation would store the expanded words in `we_wordv`.
/// The stand-in implementation never produces any word, so a record passed
/// to it is always left in the [empty](Self::is_empty) state.
#[derive(Debug, Eq, PartialEq)]
#[repr(C)]
pub struct WordExp {
    /// Number of words in `we_wordv`, not counting the reserved slots
    pub we_wordc: usize,
    /// Null-terminated array of null-terminated strings
    pub we_wordv: *mut *mut c_char,
    /// Number of null slots reserved at the start of `we_wordv`
    pub we_offs: usize,
}

/// Alias for code that prefers the C name
#[allow(non_camel_case_types)]
pub type wordexp_t = WordExp;

impl WordExp {
    /// Creates a record in the empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            we_wordc: 0,
            we_wordv: ptr::null_mut(),
            we_offs: 0,
        }
    }

    /// Tests whether the record holds no words and no array.
    ///
    /// The reserved offset is not considered because a caller may set it
    /// before calling `wordexp` with `WRDE_DOOFFS`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.we_wordc == 0 && self.we_wordv.is_null()
    }

    /// Returns the number of words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.we_wordc
    }

    /// Returns the number of reserved slots.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.we_offs
    }

    /// Returns the pointer to the word array.
    #[must_use]
    pub fn words_ptr(&self) -> *mut *mut c_char {
        self.we_wordv
    }

    /// Resets all the fields to the empty state.
    ///
    /// This function does not free the word array. The stand-in
    /// implementation never allocates one.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for WordExp {
    fn default() -> Self {
        Self::new()
    }
}
