// This file is part of yash, an extended POSIX shell.
// Copyright (C) 2025 WATANABE Yuki

//! This crate provides stand-in implementations of the POSIX `wordexp` and
//! `wordfree` functions for platforms whose C library lacks them, such as
//! Android's bionic.
//!
//! The stand-in does not perform word expansion. [`wordexp`] always fails
//! with [`Error::NoSys`] (`WRDE_NOSYS`) and leaves the result record empty.
//! What this crate does preserve is the interface: the [record
//! layout](WordExp), the [flag bits](flag), the [status codes](status), and
//! the function signatures. Code written against a native implementation
//! compiles and links unchanged, and sees the same behavior as on a platform
//! whose `wordexp` always reports that expansion is unavailable. Such code
//! should treat `WRDE_NOSYS` as an expected outcome and fall back to another
//! code path.
//!
//! Rust callers use the safe functions re-exported at the crate root. C
//! callers use the functions in the [`ffi`] module, which are exported under
//! their C names when the `export-symbols` feature is enabled. Do not enable
//! the feature on platforms that already provide `wordexp`.
//!
//! ```
//! # use yash_wordexp::{wordexp, wordfree, WordExp};
//! # use enumset::EnumSet;
//! let mut record = WordExp::new();
//! match wordexp(c"echo $HOME", Some(&mut record), EnumSet::empty()) {
//!     Ok(()) => unreachable!(),
//!     Err(error) => assert!(error.is_unsupported()),
//! }
//! assert_eq!(record.word_count(), 0);
//! wordfree(Some(&mut record));
//! ```
//!
//! Both functions touch nothing but the record passed to them, so they can
//! be called concurrently from any number of threads as long as each thread
//! uses its own record.

pub mod ffi;
pub mod flag;
pub mod record;
pub mod status;

mod expand;

pub use self::expand::{wordexp, wordfree};
pub use self::flag::Flag;
pub use self::record::WordExp;
pub use self::status::Error;
