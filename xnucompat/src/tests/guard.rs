// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::cell::Cell;

use nix::errno::Errno;

use crate::{
    error::{GuardError, ParseError},
    guard::{
        is_affected_syscall, is_affected_syscall_against, is_buggy_version,
        is_buggy_version_against, xnu_version,
    },
    kernel_types::{Utsname, SYS_NAMELEN},
    version::VersionTuple,
};

const CATALINA: &str =
    "Darwin Kernel Version 19.6.0: Thu Jun 18 20:49:00 PDT 2020; root:xnu-6153.141.1~1/RELEASE_X86_64";
const BIG_SUR: &str =
    "Darwin Kernel Version 20.6.0: Tue Feb 22 21:10:41 PST 2022; root:xnu-7195.141.26~1/RELEASE_X86_64";

fn uts_for(version: &str) -> Utsname {
    Utsname::from_version(&format!("hello world xnu-{version}~foo/bar"))
}

fn failing_source() -> nix::Result<Utsname> {
    panic!("the kernel must not be queried for unguarded syscalls");
}

#[test]
fn buggy_versions() {
    let cases = [
        ("1.2.3.4", true),
        ("6153", true),
        ("6153.1", true),
        ("6153.141", true),
        ("6153.141.1", true),
        ("6153.141.1.1", false),
        ("6153.141.11", false),
        ("6153.142.1", false),
        ("8080", false),
    ];

    for (version, expected) in cases {
        let buggy = is_buggy_version(&uts_for(version)).unwrap();
        assert_eq!(buggy, expected, "version {version}");
    }
}

#[test]
fn real_kernel_strings() {
    assert!(is_buggy_version(&Utsname::from_version(CATALINA)).unwrap());
    assert!(!is_buggy_version(&Utsname::from_version(BIG_SUR)).unwrap());
    assert_eq!(
        xnu_version(&Utsname::from_version(BIG_SUR)).unwrap(),
        VersionTuple::new(vec![7195, 141, 26])
    );
}

#[test]
fn missing_marker() {
    let uts = Utsname::from_version("#1 SMP PREEMPT_DYNAMIC Debian 6.1.76-1");
    assert_eq!(is_buggy_version(&uts), Err(ParseError::MarkerNotFound));
    assert_eq!(is_buggy_version(&Utsname::default()), Err(ParseError::MarkerNotFound));
}

#[test]
fn missing_terminator() {
    let uts = Utsname::from_version("root:xnu-6153.141.1/RELEASE_X86_64");
    assert_eq!(is_buggy_version(&uts), Err(ParseError::TerminatorNotFound));
}

#[test]
fn terminator_before_marker_does_not_count() {
    let uts = Utsname::from_version("~ root:xnu-6153.141.1");
    assert_eq!(is_buggy_version(&uts), Err(ParseError::TerminatorNotFound));
}

#[test]
fn non_numeric_component() {
    let err = is_buggy_version(&uts_for("6153.abc.1")).unwrap_err();
    assert!(matches!(
        err,
        ParseError::NonNumericComponent { ref component, .. } if component == "abc"
    ));
    assert_eq!(
        err.to_string(),
        "invalid component \"abc\": invalid digit found in string"
    );
}

#[test]
fn null_padding_is_ignored() {
    let mut uts = Utsname::default();
    uts.version[..16].copy_from_slice(b"xnu-6153.141.1~1");
    assert!(uts.version[16..].iter().all(|&b| b == 0));
    assert_eq!(
        xnu_version(&uts).unwrap(),
        VersionTuple::new(vec![6153, 141, 1])
    );

    // A terminator hidden behind the first null must not be found.
    let mut uts = Utsname::default();
    uts.version[..8].copy_from_slice(b"xnu-6153");
    uts.version[9] = b'~';
    assert_eq!(xnu_version(&uts), Err(ParseError::TerminatorNotFound));
}

#[test]
fn version_filling_the_whole_buffer() {
    let text = format!("{}xnu-6153.142.1~1", "x".repeat(SYS_NAMELEN - 1 - 16));
    assert_eq!(text.len(), SYS_NAMELEN - 1);
    let uts = Utsname::from_version(&text);
    assert_eq!(uts.version[SYS_NAMELEN - 1], 0);
    assert!(!is_buggy_version(&uts).unwrap());
}

#[test]
fn deterministic() {
    let uts = uts_for("6153.141.1");
    assert_eq!(is_buggy_version(&uts), is_buggy_version(&uts));
}

#[test]
fn custom_threshold() {
    let uts = uts_for("7195.141.26");
    assert!(!is_buggy_version(&uts).unwrap());
    assert!(is_buggy_version_against(&uts, &[7195, 141, 26]).unwrap());
    assert!(is_buggy_version_against(&uts, &[8000]).unwrap());
}

#[test]
fn unguarded_syscalls_skip_the_kernel_query() {
    for name in ["kern.ostype", "kern.procargs", "hw.ncpu", "", "KERN.PROCARGS2"] {
        assert_eq!(is_affected_syscall(name, &failing_source), Ok(false));
    }
}

#[test]
fn guarded_syscall_queries_the_kernel_once() {
    let calls = Cell::new(0);
    let source = || {
        calls.set(calls.get() + 1);
        Ok::<_, Errno>(Utsname::from_version(CATALINA))
    };

    assert_eq!(is_affected_syscall("kern.procargs2", &source), Ok(true));
    assert_eq!(calls.get(), 1);

    assert_eq!(
        is_affected_syscall("sysctl kern.procargs2.1234", &source),
        Ok(true)
    );
    assert_eq!(calls.get(), 2);
}

#[test]
fn guarded_syscall_on_fixed_kernel() {
    let source = || Ok::<_, Errno>(Utsname::from_version(BIG_SUR));
    assert_eq!(is_affected_syscall("kern.procargs2", &source), Ok(false));
    assert_eq!(
        is_affected_syscall_against("kern.procargs2", &source, &[7195, 141, 26]),
        Ok(true)
    );
}

#[test]
fn host_query_failure_is_propagated() {
    let source = || Err::<Utsname, _>(Errno::EPERM);
    assert_eq!(
        is_affected_syscall("kern.procargs2", &source),
        Err(GuardError::HostQuery(Errno::EPERM))
    );
}

#[test]
fn parse_failure_is_propagated() {
    let source = || Ok::<_, Errno>(Utsname::from_version("Linux"));
    assert_eq!(
        is_affected_syscall("kern.procargs2", &source),
        Err(GuardError::Parse(ParseError::MarkerNotFound))
    );
}
