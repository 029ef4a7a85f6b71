// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Darwin/amd64 syscall compatibility shim.
//!
//! The interesting part is [`guard`], which tells callers whether the running
//! XNU kernel carries the `kern.procargs2` sysctl defect (Apple bug
//! 25397314, present in macOS Catalina kernels up to and including
//! xnu-6153.141.1). The rest adapts kernel-visible structures and exposes the
//! raw syscall entry point as a narrow trait.

pub use xnucompat_common::{kernel_types, syscalls};

pub mod cstr;
pub mod error;
pub mod guard;
pub mod raw;
pub mod uname;
pub mod version;

pub use error::{GuardError, ParseError, SyscallError};
pub use guard::{is_affected_syscall, is_buggy_version, BUGGY_XNU_VERSION};
pub use uname::{HostUname, UnameSource};
pub use version::VersionTuple;

#[cfg(test)]
mod tests;
