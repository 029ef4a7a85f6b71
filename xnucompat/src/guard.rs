// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Workaround for the `kern.procargs2` sysctl bug in macOS Catalina kernels.
//!
//! See <https://github.com/apple-oss-distributions/xnu/blob/xnu-7195.50.7.100.1/bsd/kern/kern_sysctl.c#L1552-#L1592>
//! for the kernel side of the bug.

use log::{debug, trace};

use crate::{
    cstr::str_from_fixed,
    error::{GuardError, ParseError},
    kernel_types::Utsname,
    uname::UnameSource,
    version::{is_at_or_below_threshold, VersionTuple},
};

/// Syscall names containing this are the ones that hit the bug.
pub const GUARDED_SYSCALL_MARKER: &str = "kern.procargs2";

/// Newest xnu release known to carry the bug.
pub const BUGGY_XNU_VERSION: [u64; 3] = [6153, 141, 1];

const XNU_VERSION_START: &str = "xnu-";
const XNU_VERSION_END: char = '~';

/// Whether issuing `syscall_name` on the running kernel would trigger the
/// bug. Only queries the kernel when the name refers to the guarded sysctl.
pub fn is_affected_syscall<S>(syscall_name: &str, source: &S) -> Result<bool, GuardError>
where
    S: UnameSource + ?Sized,
{
    is_affected_syscall_against(syscall_name, source, &BUGGY_XNU_VERSION)
}

pub fn is_affected_syscall_against<S>(
    syscall_name: &str,
    source: &S,
    threshold: &[u64],
) -> Result<bool, GuardError>
where
    S: UnameSource + ?Sized,
{
    if !syscall_name.contains(GUARDED_SYSCALL_MARKER) {
        trace!("{syscall_name} is not guarded");
        return Ok(false);
    }

    let uts = source.uname()?;

    Ok(is_buggy_version_against(&uts, threshold)?)
}

pub fn is_buggy_version(uts: &Utsname) -> Result<bool, ParseError> {
    is_buggy_version_against(uts, &BUGGY_XNU_VERSION)
}

pub fn is_buggy_version_against(uts: &Utsname, threshold: &[u64]) -> Result<bool, ParseError> {
    let version = xnu_version(uts)?;
    let buggy = is_at_or_below_threshold(threshold, version.as_slice());

    debug!("xnu-{version} buggy: {buggy}");

    Ok(buggy)
}

/// Extract the xnu build number from the `version` field, e.g. `6153.141.1`
/// out of `"... root:xnu-6153.141.1~1/RELEASE_X86_64"`.
pub fn xnu_version(uts: &Utsname) -> Result<VersionTuple, ParseError> {
    let text = str_from_fixed(&uts.version);

    let start = text
        .find(XNU_VERSION_START)
        .ok_or(ParseError::MarkerNotFound)?
        + XNU_VERSION_START.len();
    let rest = &text[start..];
    let end = rest
        .find(XNU_VERSION_END)
        .ok_or(ParseError::TerminatorNotFound)?;

    rest[..end].parse()
}
