// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AEAD trait definitions.

use crate::AeadError;

/// Object-safe AEAD API for generic code and testing.
///
/// Lets callers and tests hold either Ascon variant behind `&dyn Aead`
/// without caring which one is in use. [`Ascon`](crate::Ascon) exposes the
/// same operations as inherent methods.
pub trait Aead {
    /// Nonce length in bytes accepted by [`Aead::seal`] and [`Aead::open`].
    fn nonce_size(&self) -> usize;

    /// Bytes added to the plaintext length by [`Aead::seal`].
    fn overhead(&self) -> usize;

    /// Encrypts and authenticates `plaintext`, appending `ciphertext || tag`
    /// to `dst`.
    ///
    /// # Panics
    /// Panics if `nonce` has the wrong length or the appended region
    /// inexactly overlaps `plaintext`.
    fn seal(&self, dst: &mut Vec<u8>, nonce: &[u8], plaintext: &[u8], aad: &[u8]);

    /// Verifies and decrypts `ciphertext || tag`, appending the plaintext to
    /// `dst`. On failure `dst` is restored to its original length.
    ///
    /// # Panics
    /// Panics if `nonce` has the wrong length or the appended region
    /// inexactly overlaps `ciphertext`.
    fn open(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        aad: &[u8],
    ) -> Result<(), AeadError>;
}
