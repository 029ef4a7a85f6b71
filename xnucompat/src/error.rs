// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::num::ParseIntError;

use nix::errno::Errno;
use thiserror::Error;

/// The kernel version string did not have the shape `...xnu-A.B.C~...`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("marker not found")]
    MarkerNotFound,
    #[error("terminator not found")]
    TerminatorNotFound,
    #[error("invalid component {component:?}: {source}")]
    NonNumericComponent {
        component: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// uname(3) itself failed; no verdict can be given.
    #[error("querying the running kernel failed: {0}")]
    HostQuery(#[from] Errno),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyscallError {
    #[error("{name} takes {expected} arguments, got {got}")]
    ArgumentCount {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    #[error(transparent)]
    Errno(#[from] Errno),
}
