// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! The raw syscall entry point: syscall number plus up to nine
//! register-width arguments in, two result registers and an errno out.

use log::trace;
use nix::errno::Errno;

use crate::{error::SyscallError, syscalls::Binding};

pub const MAX_SYSCALL_ARGS: usize = 9;

pub trait RawSyscall {
    /// Issue syscall `nr`. A zero errno (`Errno::UnknownErrno`) means success.
    ///
    /// Implementations that cannot observe the second result register
    /// return 0 in its place; see `HostSyscall` for the width of the first.
    fn syscall9(&self, nr: i64, args: [usize; MAX_SYSCALL_ARGS]) -> (usize, usize, Errno);
}

/// Issue the syscall behind `binding`, checking the argument count against
/// the wrapper's signature.
pub fn invoke<R>(raw: &R, binding: &Binding, args: &[usize]) -> Result<(usize, usize), SyscallError>
where
    R: RawSyscall + ?Sized,
{
    if args.len() != binding.nargs {
        return Err(SyscallError::ArgumentCount {
            name: binding.name,
            expected: binding.nargs,
            got: args.len(),
        });
    }

    let mut regs = [0usize; MAX_SYSCALL_ARGS];
    regs[..args.len()].copy_from_slice(args);

    trace!("{}({:x?}) -> syscall {}", binding.name, args, binding.nr);

    let (r1, r2, errno) = raw.syscall9(binding.nr, regs);
    if errno as i32 != 0 {
        return Err(errno.into());
    }

    Ok((r1, r2))
}

/// Traps straight into the running kernel through syscall(2).
///
/// syscall(2) only hands back a C `int`, so the first result register is
/// sign-extended from 32 bits and the second is always 0. None of the
/// bindings in the table need more than that.
#[cfg(all(target_os = "macos", target_arch = "x86_64"))]
#[derive(Debug, Default, Copy, Clone)]
pub struct HostSyscall;

#[cfg(all(target_os = "macos", target_arch = "x86_64"))]
impl RawSyscall for HostSyscall {
    #[allow(deprecated)]
    fn syscall9(&self, nr: i64, a: [usize; MAX_SYSCALL_ARGS]) -> (usize, usize, Errno) {
        Errno::clear();
        let ret = unsafe {
            libc::syscall(
                nr as libc::c_int,
                a[0],
                a[1],
                a[2],
                a[3],
                a[4],
                a[5],
                a[6],
                a[7],
                a[8],
            )
        };

        if ret == -1 {
            (ret as usize, 0, Errno::last())
        } else {
            (ret as usize, 0, Errno::from_raw(0))
        }
    }
}
