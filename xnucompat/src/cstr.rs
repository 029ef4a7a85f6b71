// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::borrow::Cow;

/// Decode a fixed-capacity, null-padded buffer as reported by the kernel.
///
/// Decoding stops at the first null byte; a buffer without one is used in
/// full. Invalid UTF-8 is replaced rather than rejected, as these buffers are
/// only ever searched for ASCII markers.
pub fn str_from_fixed(buf: &[u8]) -> Cow<'_, str> {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end])
}
