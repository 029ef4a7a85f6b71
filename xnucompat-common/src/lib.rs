// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Kernel ABI mirrors and syscall numbers for Darwin on amd64.
//!
//! Everything here is plain data: the structures match the kernel's layout
//! and can be handed to raw syscalls, and the syscall table maps the wrapper
//! names used by the shim to their numbers.

#![cfg_attr(not(test), no_std)]

pub mod kernel_types;
pub mod syscalls;

#[cfg(test)]
mod tests;
