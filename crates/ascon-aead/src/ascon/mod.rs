// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Ascon permutation, parameter sets and duplex protocol.
//!
//! 128-bit key, 128-bit nonce, 5 x 64-bit state words.
//! Based on the Ascon v1.2 submission to the NIST lightweight cryptography
//! standardization process.

pub(crate) mod duplex;
pub mod permutation;
pub mod variant;

pub use permutation::{AsconState, permute};
pub use variant::{Parameters, Variant};

#[cfg(test)]
mod tests;
