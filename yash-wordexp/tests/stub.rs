// This file is part of yash, an extended POSIX shell.
// Copyright (C) 2025 WATANABE Yuki

use assert_matches::assert_matches;
use enumset::EnumSet;
use std::ptr;
use std::thread;
use yash_wordexp::ffi::{self, WRDE_APPEND, WRDE_NOSYS, wordexp_t};
use yash_wordexp::flag::{Flag, flags_to_raw};
use yash_wordexp::status::{RawStatus, WRDE_SUCCESS};
use yash_wordexp::{Error, WordExp, wordexp, wordfree};

#[test]
fn echo_hi_without_flags() {
    let mut record = WordExp::new();
    let result = wordexp(c"echo hi", Some(&mut record), EnumSet::empty());
    assert_eq!(result, Err(Error::NoSys));
    assert_eq!(
        record,
        WordExp {
            we_wordc: 0,
            we_wordv: ptr::null_mut(),
            we_offs: 0,
        }
    );
}

#[test]
fn empty_string_with_append_and_no_record() {
    let status = unsafe { ffi::wordexp(c"".as_ptr(), ptr::null_mut(), WRDE_APPEND) };
    assert_eq!(status, WRDE_NOSYS);
}

#[test]
fn caller_falls_back_on_unsupported_expansion() {
    fn expand_or_split(expr: &std::ffi::CStr) -> Vec<String> {
        let mut record = WordExp::new();
        let result = wordexp(expr, Some(&mut record), Flag::NoCmd | Flag::Undef);
        wordfree(Some(&mut record));
        match result {
            Err(error) if error.is_unsupported() => expr
                .to_string_lossy()
                .split_whitespace()
                .map(str::to_owned)
                .collect(),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    assert_eq!(expand_or_split(c"ls -l  /tmp"), ["ls", "-l", "/tmp"]);
}

#[test]
fn status_is_distinct_from_other_outcomes() {
    let status = unsafe { ffi::wordexp(c"*".as_ptr(), ptr::null_mut(), 0) };
    assert_ne!(status, WRDE_SUCCESS);
    assert_matches!(Error::from_raw(status), Some(Error::NoSys));
    for other in [
        ffi::WRDE_BADCHAR,
        ffi::WRDE_BADVAL,
        ffi::WRDE_CMDSUB,
        ffi::WRDE_NOSPACE,
        ffi::WRDE_SYNTAX,
    ] {
        assert_ne!(status, other);
    }
}

#[test]
fn c_and_rust_interfaces_agree() {
    let expressions = [c"", c"a b c", c"$(date)", c"'quoted' \"text\"", c"~/x*"];
    for expr in expressions {
        for flags in [EnumSet::empty(), EnumSet::all(), Flag::DoOffs.into()] {
            let mut rust_record = WordExp::new();
            let rust_status: RawStatus = wordexp(expr, Some(&mut rust_record), flags)
                .err()
                .map_or(WRDE_SUCCESS, RawStatus::from);

            let mut c_record: wordexp_t = WordExp::new();
            let c_status =
                unsafe { ffi::wordexp(expr.as_ptr(), &mut c_record, flags_to_raw(flags)) };

            assert_eq!(rust_status, c_status);
            assert_eq!(rust_record, c_record);
        }
    }
}

#[test]
fn independent_records_on_many_threads() {
    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                scope.spawn(move || {
                    let mut record = WordExp {
                        we_offs: i,
                        ..WordExp::new()
                    };
                    for _ in 0..100 {
                        let result = wordexp(c"echo $i", Some(&mut record), Flag::Reuse.into());
                        assert_eq!(result, Err(Error::NoSys));
                        assert!(record.is_empty());
                        wordfree(Some(&mut record));
                    }
                    record.offset()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 0);
        }
    });
}
