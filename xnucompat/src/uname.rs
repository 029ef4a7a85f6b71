// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::os::unix::ffi::OsStrExt as _;

use log::trace;
use nix::sys::utsname;

use crate::kernel_types::{fill_field, Utsname};

/// Something that can describe the running kernel.
pub trait UnameSource {
    fn uname(&self) -> nix::Result<Utsname>;
}

impl<F> UnameSource for F
where
    F: Fn() -> nix::Result<Utsname>,
{
    fn uname(&self) -> nix::Result<Utsname> {
        self()
    }
}

/// Asks the host kernel through uname(3).
#[derive(Debug, Default, Copy, Clone)]
pub struct HostUname;

impl UnameSource for HostUname {
    fn uname(&self) -> nix::Result<Utsname> {
        let host = utsname::uname()?;

        let mut uts = Utsname::default();
        fill_field(&mut uts.sysname, host.sysname().as_bytes());
        fill_field(&mut uts.nodename, host.nodename().as_bytes());
        fill_field(&mut uts.release, host.release().as_bytes());
        fill_field(&mut uts.version, host.version().as_bytes());
        fill_field(&mut uts.machine, host.machine().as_bytes());

        trace!("uname version: {:?}", host.version());

        Ok(uts)
    }
}
