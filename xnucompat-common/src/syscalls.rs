// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Syscall numbers for Darwin on amd64 (BSD class, without the 0x2000000
//! class prefix the trap entry adds).

#![allow(non_upper_case_globals)]

pub const SYS_ptrace: i64 = 26;
pub const SYS_STAT64: i64 = 338;
pub const SYS_FSTAT64: i64 = 339;
pub const SYS_LSTAT64: i64 = 340;
pub const SYS_STATFS64: i64 = 345;
pub const SYS_FSTATFS64: i64 = 346;
pub const SYS_GETFSSTAT64: i64 = 347;
pub const SYS_FSTATAT64: i64 = 470;

pub const ALL_SYSCALLS: &[i64] = &[
    SYS_ptrace,
    SYS_STAT64,
    SYS_FSTAT64,
    SYS_LSTAT64,
    SYS_STATFS64,
    SYS_FSTATFS64,
    SYS_GETFSSTAT64,
    SYS_FSTATAT64,
];

pub fn syscall_name_from_nr(nr: i64) -> Option<&'static str> {
    match nr {
        SYS_ptrace => Some("ptrace"),
        SYS_STAT64 => Some("stat64"),
        SYS_FSTAT64 => Some("fstat64"),
        SYS_LSTAT64 => Some("lstat64"),
        SYS_STATFS64 => Some("statfs64"),
        SYS_FSTATFS64 => Some("fstatfs64"),
        SYS_GETFSSTAT64 => Some("getfsstat64"),
        SYS_FSTATAT64 => Some("fstatat64"),
        _ => None,
    }
}

pub fn syscall_nr_from_name(name: &str) -> Option<i64> {
    ALL_SYSCALLS
        .iter()
        .copied()
        .find(|&nr| syscall_name_from_nr(nr) == Some(name))
}

/// A wrapper entry point bound to the syscall it issues.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: &'static str,
    pub nr: i64,
    pub nargs: usize,
}

/// Wrappers whose syscall number differs from the generic BSD table: the
/// 64-bit inode variants of the stat family, and ptrace in its integer and
/// pointer flavours.
#[rustfmt::skip]
pub const BINDINGS: &[Binding] = &[
    Binding { name: "Fstat", nr: SYS_FSTAT64, nargs: 2 },
    Binding { name: "Fstatat", nr: SYS_FSTATAT64, nargs: 4 },
    Binding { name: "Fstatfs", nr: SYS_FSTATFS64, nargs: 2 },
    Binding { name: "getfsstat", nr: SYS_GETFSSTAT64, nargs: 3 },
    Binding { name: "Lstat", nr: SYS_LSTAT64, nargs: 2 },
    Binding { name: "ptrace1", nr: SYS_ptrace, nargs: 4 },
    Binding { name: "ptrace1Ptr", nr: SYS_ptrace, nargs: 4 },
    Binding { name: "Stat", nr: SYS_STAT64, nargs: 2 },
    Binding { name: "Statfs", nr: SYS_STATFS64, nargs: 2 },
];

pub fn binding(name: &str) -> Option<&'static Binding> {
    BINDINGS.iter().find(|b| b.name == name)
}
