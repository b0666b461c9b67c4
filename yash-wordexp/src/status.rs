// This file is part of yash, an extended POSIX shell.
// Copyright (C) 2025 WATANABE Yuki

//! Status codes of word expansion
//!
//! The C `wordexp` function returns zero on success and one of the `WRDE_*`
//! status codes defined in this module on failure. The [`Error`] type is the
//! Rust counterpart of the non-zero codes.
//!
//! The status codes and the [flag bits](crate::flag) are disjoint sets of
//! constants even though some of their numeric values coincide.

use std::ffi::c_int;
use strum::EnumIter;
use thiserror::Error;

/// Raw status code as returned from the C `wordexp` function
pub type RawStatus = c_int;

/// Status code indicating successful expansion
pub const WRDE_SUCCESS: RawStatus = 0;
/// Illegal occurrence of a newline or one of `|&;<>(){}`
pub const WRDE_BADCHAR: RawStatus = 1;
/// Reference to an undefined shell variable with `WRDE_UNDEF`
pub const WRDE_BADVAL: RawStatus = 2;
/// Command substitution requested with `WRDE_NOCMD`
pub const WRDE_CMDSUB: RawStatus = 3;
/// Out of memory
pub const WRDE_NOSPACE: RawStatus = 4;
/// Shell syntax error
pub const WRDE_SYNTAX: RawStatus = 5;
/// Word expansion is not available on this platform
pub const WRDE_NOSYS: RawStatus = 6;

/// Reason word expansion failed
///
/// The stand-in implementation in this crate only ever produces
/// [`NoSys`](Self::NoSys). The other variants exist so that callers can
/// handle the full set of outcomes a native implementation may report.
#[derive(Clone, Copy, Debug, EnumIter, Eq, Error, Hash, PartialEq)]
pub enum Error {
    /// `WRDE_BADCHAR`
    #[error("illegal character in the expression")]
    BadChar,
    /// `WRDE_BADVAL`
    #[error("reference to an undefined variable")]
    BadVal,
    /// `WRDE_CMDSUB`
    #[error("command substitution is not allowed")]
    CmdSub,
    /// `WRDE_NOSPACE`
    #[error("out of memory")]
    NoSpace,
    /// `WRDE_SYNTAX`
    #[error("syntax error in the expression")]
    Syntax,
    /// `WRDE_NOSYS`
    #[error("word expansion is not supported")]
    NoSys,
}

impl Error {
    /// Returns the raw status code for this error.
    #[must_use]
    pub const fn to_raw(self) -> RawStatus {
        match self {
            Self::BadChar => WRDE_BADCHAR,
            Self::BadVal => WRDE_BADVAL,
            Self::CmdSub => WRDE_CMDSUB,
            Self::NoSpace => WRDE_NOSPACE,
            Self::Syntax => WRDE_SYNTAX,
            Self::NoSys => WRDE_NOSYS,
        }
    }

    /// Converts a raw status code to an error.
    ///
    /// Returns `None` for [`WRDE_SUCCESS`] and for values that are not
    /// defined status codes.
    #[must_use]
    pub const fn from_raw(raw: RawStatus) -> Option<Self> {
        match raw {
            WRDE_BADCHAR => Some(Self::BadChar),
            WRDE_BADVAL => Some(Self::BadVal),
            WRDE_CMDSUB => Some(Self::CmdSub),
            WRDE_NOSPACE => Some(Self::NoSpace),
            WRDE_SYNTAX => Some(Self::Syntax),
            WRDE_NOSYS => Some(Self::NoSys),
            _ => None,
        }
    }

    /// Tests whether this error means word expansion is unavailable.
    ///
    /// Callers receiving this error should fall back to another way of
    /// handling the expression rather than report a failure to the user.
    #[must_use]
    pub const fn is_unsupported(self) -> bool {
        matches!(self, Self::NoSys)
    }
}

impl From<Error> for RawStatus {
    fn from(error: Error) -> Self {
        error.to_raw()
    }
}

/// Converts the result of an expansion to the raw status code.
#[must_use]
pub fn status_from_result(result: Result<(), Error>) -> RawStatus {
    match result {
        Ok(()) => WRDE_SUCCESS,
        Err(error) => error.to_raw(),
    }
}
