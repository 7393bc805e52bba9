// ABOUTME: Latin-1 text encoding and PDF string literal escaping
// ABOUTME: Characters outside Latin-1 are reported, never replaced or dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

/// A character the core fonts cannot draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnencodableChar {
    /// Offending character
    pub ch: char,
    /// Character (not byte) offset within the encoded text
    pub position: usize,
}

impl fmt::Display for UnencodableChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "character '{}' (U+{:04X}) at position {} is outside Latin-1",
            self.ch, self.ch as u32, self.position
        )
    }
}

impl std::error::Error for UnencodableChar {}

/// Encode text as Latin-1, one byte per character
///
/// # Errors
///
/// Returns the first character above U+00FF.
pub fn encode_latin1(text: &str) -> Result<Vec<u8>, UnencodableChar> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| u8::try_from(ch).map_err(|_| UnencodableChar { ch, position }))
        .collect()
}

/// Escape bytes for use inside a PDF literal string `( ... )`
#[must_use]
pub fn escape_literal(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + 8);
    for &b in bytes {
        match b {
            b'\\' | b'(' | b')' => {
                out.push(b'\\');
                out.push(b);
            }
            b'\r' => out.extend_from_slice(b"\\r"),
            _ => out.push(b),
        }
    }
    out
}
