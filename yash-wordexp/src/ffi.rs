// This file is part of yash, an extended POSIX shell.
// Copyright (C) 2025 WATANABE Yuki

//! C interface
//!
//! This module defines `wordexp` and `wordfree` with the C calling
//! convention and the signatures POSIX specifies. With the
//! `export-symbols` feature, they are exported under their unmangled names
//! so that C code can link against this crate built as a static or dynamic
//! library. The declarations for C are in `include/wordexp.h`.

use crate::expand;
use crate::flag::{RawFlags, flags_from_raw};
use crate::record::WordExp;
use crate::status::{RawStatus, status_from_result};
use std::ffi::c_char;

pub use crate::flag::{
    WRDE_APPEND, WRDE_DOOFFS, WRDE_NOCMD, WRDE_REUSE, WRDE_SHOWERR, WRDE_UNDEF,
};
pub use crate::record::wordexp_t;
pub use crate::status::{
    WRDE_BADCHAR, WRDE_BADVAL, WRDE_CMDSUB, WRDE_NOSPACE, WRDE_NOSYS, WRDE_SUCCESS, WRDE_SYNTAX,
};

/// Performs word expansion.
///
/// See [`crate::wordexp`] for the behavior. This function always returns
/// [`WRDE_NOSYS`].
///
/// # Safety
///
/// `pwordexp` must be null or point to a `wordexp_t` that is valid for
/// writes. `words` is never read, so it may be any pointer including null.
#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn wordexp(
    words: *const c_char,
    pwordexp: *mut WordExp,
    flags: RawFlags,
) -> RawStatus {
    // The expression is not inspected, so we do not even read it.
    let _ = words;
    let (flags, _unknown) = flags_from_raw(flags);
    let record = unsafe { pwordexp.as_mut() };
    status_from_result(expand::wordexp(c"", record, flags))
}

/// Frees the result of word expansion.
///
/// See [`crate::wordfree`] for the behavior.
///
/// # Safety
///
/// `pwordexp` must be null or point to a `wordexp_t` that is valid for
/// writes.
#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn wordfree(pwordexp: *mut WordExp) {
    let record = unsafe { pwordexp.as_mut() };
    expand::wordfree(record)
}
