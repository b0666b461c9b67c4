// This file is part of yash, an extended POSIX shell.
// Copyright (C) 2025 WATANABE Yuki

//! Flags for configuring word expansion
//!
//! The C interface takes the flags as a bit mask of `WRDE_*` values. This
//! module defines the raw bit values along with the [`Flag`] type that
//! represents each of them in a type-safe manner. A set of flags is
//! represented as an [`EnumSet<Flag>`](EnumSet).

use enumset::{EnumSet, EnumSetType};
use std::ffi::c_int;

/// Raw flag bits as passed to the C `wordexp` function
pub type RawFlags = c_int;

/// Append the results to those of a previous call
pub const WRDE_APPEND: RawFlags = 0x01;
/// Reserve `we_offs` null slots at the start of `we_wordv`
pub const WRDE_DOOFFS: RawFlags = 0x02;
/// Fail if command substitution is requested
pub const WRDE_NOCMD: RawFlags = 0x04;
/// The record contains the result of a previous call, which should be freed
pub const WRDE_REUSE: RawFlags = 0x08;
/// Do not redirect standard error to `/dev/null`
pub const WRDE_SHOWERR: RawFlags = 0x10;
/// Fail on expansion of an undefined shell variable
pub const WRDE_UNDEF: RawFlags = 0x20;

/// Option for word expansion
///
/// Each variant corresponds to one of the `WRDE_*` flag bits. The stand-in
/// [`wordexp`](crate::wordexp) accepts and ignores all of them.
#[derive(Debug, EnumSetType, Hash)]
pub enum Flag {
    /// `WRDE_APPEND`
    Append,
    /// `WRDE_DOOFFS`
    DoOffs,
    /// `WRDE_NOCMD`
    NoCmd,
    /// `WRDE_REUSE`
    Reuse,
    /// `WRDE_SHOWERR`
    ShowErr,
    /// `WRDE_UNDEF`
    Undef,
}

impl Flag {
    /// Returns the raw bit for this flag.
    #[must_use]
    pub const fn to_raw(self) -> RawFlags {
        match self {
            Self::Append => WRDE_APPEND,
            Self::DoOffs => WRDE_DOOFFS,
            Self::NoCmd => WRDE_NOCMD,
            Self::Reuse => WRDE_REUSE,
            Self::ShowErr => WRDE_SHOWERR,
            Self::Undef => WRDE_UNDEF,
        }
    }
}

/// Converts a set of flags to the raw bit mask.
#[must_use]
pub fn flags_to_raw(flags: EnumSet<Flag>) -> RawFlags {
    flags.iter().fold(0, |raw, flag| raw | flag.to_raw())
}

/// Converts a raw bit mask to a set of flags.
///
/// The second element of the returned tuple contains the bits that do not
/// correspond to any [`Flag`]. Unknown bits are not an error here because
/// the caller may be built against a C library that defines more flags.
#[must_use]
pub fn flags_from_raw(raw: RawFlags) -> (EnumSet<Flag>, RawFlags) {
    let mut flags = EnumSet::empty();
    let mut rest = raw;
    for flag in EnumSet::<Flag>::all() {
        let bit = flag.to_raw();
        if raw & bit != 0 {
            flags.insert(flag);
            rest &= !bit;
        }
    }
    (flags, rest)
}
