// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Timespec {
    pub sec: i64,
    pub nsec: i64,
}

/// Time value structure, matching Darwin's struct timeval (32-bit usec).
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Timeval {
    pub sec: i64,  // seconds
    pub usec: i32, // microseconds
}

/// Kernel event structure for kqueue/kevent, matching struct kevent
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Kevent {
    pub ident: u64,  // Identifier for this event (usually a file descriptor)
    pub filter: i16, // Filter for event (EVFILT_READ, EVFILT_WRITE, ...)
    pub flags: u16,  // Action flags (EV_ADD, EV_DELETE, ...)
    pub fflags: u32, // Filter-specific flags
    pub data: i64,   // Filter-specific data
    pub udata: u64,  // Opaque user data pointer
}

impl Kevent {
    /// Fill in the identifier, filter and action flags the way kevent(2)
    /// expects them, truncating to the kernel's field widths.
    pub fn set(&mut self, fd: i32, mode: i32, flags: i32) {
        self.ident = fd as u64;
        self.filter = mode as i16;
        self.flags = flags as u16;
    }
}

/// I/O vector structure for scatter-gather operations
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Iovec {
    pub base: u64, // Base address of buffer
    pub len: u64,  // Length of buffer
}

impl Iovec {
    pub fn set_len(&mut self, length: usize) {
        self.len = length as u64;
    }
}

/// Message header structure for socket message operations
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Msghdr {
    pub name: u64,       // Optional address pointer
    pub namelen: u32,    // Size of address
    pub iov: u64,        // Scatter/gather array pointer
    pub iovlen: i32,     // Number of elements in iov
    pub control: u64,    // Ancillary data pointer
    pub controllen: u32, // Ancillary data buffer size
    pub flags: i32,      // Flags on received message
}

impl Msghdr {
    pub fn set_controllen(&mut self, length: usize) {
        self.controllen = length as u32;
    }

    pub fn set_iovlen(&mut self, length: usize) {
        self.iovlen = length as i32;
    }
}

/// Control message header, matching struct cmsghdr
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Cmsghdr {
    pub len: u32,   // Data byte count, including header
    pub level: i32, // Originating protocol
    pub kind: i32,  // Protocol-specific type (cmsg_type)
}

impl Cmsghdr {
    pub fn set_len(&mut self, length: usize) {
        self.len = length as u32;
    }
}

pub fn set_timespec(sec: i64, nsec: i64) -> Timespec {
    Timespec { sec, nsec }
}

/// Darwin keeps microseconds in 32 bits; larger values are truncated.
pub fn set_timeval(sec: i64, usec: i64) -> Timeval {
    Timeval {
        sec,
        usec: usec as i32,
    }
}

/// Length of every utsname field on Darwin (_SYS_NAMELEN).
pub const SYS_NAMELEN: usize = 256;

/// System identification, matching Darwin's struct utsname. Every field is a
/// null-padded byte buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Utsname {
    pub sysname: [u8; SYS_NAMELEN],  // Name of OS (e.g., "Darwin")
    pub nodename: [u8; SYS_NAMELEN], // Name of this network node
    pub release: [u8; SYS_NAMELEN],  // Release level (e.g., "19.6.0")
    pub version: [u8; SYS_NAMELEN],  // Version level, carries the xnu build tag
    pub machine: [u8; SYS_NAMELEN],  // Hardware type (e.g., "x86_64")
}

impl Default for Utsname {
    fn default() -> Self {
        Self {
            sysname: [0; SYS_NAMELEN],
            nodename: [0; SYS_NAMELEN],
            release: [0; SYS_NAMELEN],
            version: [0; SYS_NAMELEN],
            machine: [0; SYS_NAMELEN],
        }
    }
}

impl Utsname {
    /// Build a descriptor with only the version field filled in.
    pub fn from_version(version: &str) -> Self {
        let mut uts = Self::default();
        fill_field(&mut uts.version, version.as_bytes());
        uts
    }
}

/// Copy `src` into a fixed-size field, truncating so that at least one
/// trailing null byte is always left in place. Returns the number of bytes
/// copied.
pub fn fill_field(dst: &mut [u8], src: &[u8]) -> usize {
    let len = src.len().min(dst.len().saturating_sub(1));
    dst[..len].copy_from_slice(&src[..len]);
    dst[len..].fill(0);
    len
}
