// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Ascon AEAD bound to a key and a variant.
//!
//! Every call builds its own duplex state, so one instance can serve
//! concurrent seal/open calls from several threads.

use ascon_util::{
    constant_time_eq, inexact_overlap, slice_for_append, u64_pair_from_be,
    zeroize_spare_capacity,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ascon::Variant;
use crate::ascon::duplex::Duplex;
use crate::consts::{AsconKey, AsconNonce, AsconTag, KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::error::AeadError;
use crate::traits::Aead;

/// Ascon-128 / Ascon-128a AEAD with the key zeroized on drop.
///
/// Each key can protect at most 2^64 blocks of plaintext and associated
/// data. Nonces must never repeat under the same key; any other
/// composition, a counter included, is fine.
///
/// The key is fixed for the lifetime of the instance and wiped on drop;
/// `Ascon` is [`ZeroizeOnDrop`] but not [`Zeroize`].
pub struct Ascon {
    key: [u64; 2],
    variant: Variant,
}

impl Drop for Ascon {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl ZeroizeOnDrop for Ascon {}

impl core::fmt::Debug for Ascon {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ascon {{ variant: {}, key: [protected] }}", self.variant)
    }
}

impl Ascon {
    /// Key size in bytes
    pub const KEY_SIZE: usize = KEY_SIZE;
    /// Nonce size in bytes
    pub const NONCE_SIZE: usize = NONCE_SIZE;
    /// Authentication tag size in bytes
    pub const TAG_SIZE: usize = TAG_SIZE;

    /// Creates an AEAD for `variant` from a 16-byte key.
    ///
    /// # Errors
    /// Returns [`AeadError::InvalidKeySize`] if `key` is not 16 bytes long.
    pub fn new(variant: Variant, key: &[u8]) -> Result<Self, AeadError> {
        let key: &AsconKey = key.try_into().map_err(|_| {
            #[cfg(feature = "tracing-integration")]
            tracing::debug!(
                got = key.len(),
                expected = KEY_SIZE,
                "ascon: rejected key"
            );

            AeadError::InvalidKeySize
        })?;

        Ok(Self::from_key(variant, key))
    }

    /// Creates an Ascon-128 AEAD (8-byte rate, 6 data rounds).
    ///
    /// Lower throughput, more robust against partial or full state recovery
    /// than Ascon-128a.
    pub fn new_128(key: &[u8]) -> Result<Self, AeadError> {
        Self::new(Variant::Ascon128, key)
    }

    /// Creates an Ascon-128a AEAD (16-byte rate, 8 data rounds).
    ///
    /// Higher throughput, less robust against partial or full state recovery
    /// than Ascon-128.
    pub fn new_128a(key: &[u8]) -> Result<Self, AeadError> {
        Self::new(Variant::Ascon128a, key)
    }

    /// Creates an AEAD from a fixed-size key.
    pub fn from_key(variant: Variant, key: &AsconKey) -> Self {
        let mut words = [0u64; 2];
        u64_pair_from_be(&mut words, key);

        #[cfg(feature = "tracing-integration")]
        tracing::debug!(variant = %variant, "ascon AEAD constructed");

        Self {
            key: words,
            variant,
        }
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.variant.name()
    }

    #[inline]
    pub fn nonce_size(&self) -> usize {
        NONCE_SIZE
    }

    #[inline]
    pub fn overhead(&self) -> usize {
        TAG_SIZE
    }

    /// Encrypts `plaintext` and appends `ciphertext || tag` to `dst`.
    ///
    /// # Panics
    /// Panics if `nonce` is not 16 bytes, or if the appended region
    /// inexactly overlaps `plaintext`.
    pub fn seal(&self, dst: &mut Vec<u8>, nonce: &[u8], plaintext: &[u8], aad: &[u8]) {
        let nonce = nonce_words(nonce);

        let out = slice_for_append(dst, plaintext.len() + TAG_SIZE);
        // Safe borrows cannot alias `dst`; this enforces the buffer contract
        if inexact_overlap(out, plaintext) {
            panic!("ascon: invalid buffer overlap");
        }

        let (data, tag_out) = out.split_at_mut(plaintext.len());
        data.copy_from_slice(plaintext);

        let mut tag = self.encrypt_words(&nonce, aad, data);
        tag_out.copy_from_slice(&tag);
        tag.zeroize();
    }

    /// Verifies `ciphertext || tag` and appends the plaintext to `dst`.
    ///
    /// On failure nothing is appended: the candidate plaintext is zeroized
    /// and `dst` is truncated back to its original length.
    ///
    /// # Errors
    /// Returns [`AeadError::AuthenticationFailed`] if the input is shorter
    /// than a tag or the tag does not verify.
    ///
    /// # Panics
    /// Panics if `nonce` is not 16 bytes, or if the appended region
    /// inexactly overlaps `ciphertext`.
    pub fn open(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        aad: &[u8],
    ) -> Result<(), AeadError> {
        let nonce = nonce_words(nonce);

        if ciphertext.len() < TAG_SIZE {
            return Err(self.authentication_failed(ciphertext.len()));
        }

        let (ciphertext, tag) = ciphertext.split_at(ciphertext.len() - TAG_SIZE);

        let start = dst.len();
        let out = slice_for_append(dst, ciphertext.len());
        // Safe borrows cannot alias `dst`; this enforces the buffer contract
        if inexact_overlap(out, ciphertext) {
            panic!("ascon: invalid buffer overlap");
        }
        out.copy_from_slice(ciphertext);

        if let Err(err) = self.decrypt_words(&nonce, aad, out, tag) {
            dst.truncate(start);
            zeroize_spare_capacity(dst);
            return Err(err);
        }

        Ok(())
    }

    /// Encrypts into a new `ciphertext || tag` buffer.
    ///
    /// # Panics
    /// Panics if `nonce` is not 16 bytes.
    pub fn encrypt(&self, nonce: &[u8], aad: &[u8], plaintext: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(plaintext.len() + TAG_SIZE);
        self.seal(&mut out, nonce, plaintext, aad);
        out
    }

    /// Decrypts `ciphertext || tag` into a new plaintext buffer.
    ///
    /// # Panics
    /// Panics if `nonce` is not 16 bytes.
    pub fn decrypt(&self, nonce: &[u8], aad: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, AeadError> {
        let mut out = Vec::with_capacity(ciphertext.len().saturating_sub(TAG_SIZE));
        self.open(&mut out, nonce, ciphertext, aad)?;
        Ok(out)
    }

    /// Encrypts `data` in place and returns the detached tag.
    pub fn encrypt_in_place_detached(
        &self,
        nonce: &AsconNonce,
        aad: &[u8],
        data: &mut [u8],
    ) -> AsconTag {
        let mut words = [0u64; 2];
        u64_pair_from_be(&mut words, nonce);
        self.encrypt_words(&words, aad, data)
    }

    /// Decrypts `data` in place after checking the detached tag.
    ///
    /// `data` is zeroized when authentication fails.
    ///
    /// # Errors
    /// Returns [`AeadError::AuthenticationFailed`] if the tag does not verify.
    pub fn decrypt_in_place_detached(
        &self,
        nonce: &AsconNonce,
        aad: &[u8],
        data: &mut [u8],
        tag: &AsconTag,
    ) -> Result<(), AeadError> {
        let mut words = [0u64; 2];
        u64_pair_from_be(&mut words, nonce);
        self.decrypt_words(&words, aad, data, tag)
    }

    fn encrypt_words(&self, nonce: &[u64; 2], aad: &[u8], data: &mut [u8]) -> AsconTag {
        Duplex::initialize(self.variant.parameters(), &self.key, nonce)
            .absorb_associated_data(aad)
            .encrypt_in_place(data)
            .finalize(&self.key)
    }

    fn decrypt_words(
        &self,
        nonce: &[u64; 2],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8],
    ) -> Result<(), AeadError> {
        let mut expected_tag = Duplex::initialize(self.variant.parameters(), &self.key, nonce)
            .absorb_associated_data(aad)
            .decrypt_in_place(data)
            .finalize(&self.key);

        let authentic = constant_time_eq(&expected_tag, tag);
        expected_tag.zeroize();

        if !authentic {
            data.zeroize();
            return Err(self.authentication_failed(data.len() + TAG_SIZE));
        }

        Ok(())
    }

    #[cold]
    fn authentication_failed(&self, ciphertext_len: usize) -> AeadError {
        #[cfg(feature = "tracing-integration")]
        tracing::debug!(
            variant = %self.variant,
            ciphertext_len,
            "ascon: message authentication failed"
        );
        #[cfg(not(feature = "tracing-integration"))]
        let _ = ciphertext_len;

        AeadError::AuthenticationFailed
    }
}

impl Aead for Ascon {
    fn nonce_size(&self) -> usize {
        Ascon::nonce_size(self)
    }

    fn overhead(&self) -> usize {
        Ascon::overhead(self)
    }

    fn seal(&self, dst: &mut Vec<u8>, nonce: &[u8], plaintext: &[u8], aad: &[u8]) {
        Ascon::seal(self, dst, nonce, plaintext, aad)
    }

    fn open(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        aad: &[u8],
    ) -> Result<(), AeadError> {
        Ascon::open(self, dst, nonce, ciphertext, aad)
    }
}

/// Loads a caller-supplied nonce into state words.
///
/// # Panics
/// Panics if `nonce` is not exactly 16 bytes; a wrong length is a caller bug.
fn nonce_words(nonce: &[u8]) -> [u64; 2] {
    let bytes: &AsconNonce = match nonce.try_into() {
        Ok(bytes) => bytes,
        Err(_) => panic!("ascon: incorrect nonce length: {}", nonce.len()),
    };

    let mut words = [0u64; 2];
    u64_pair_from_be(&mut words, bytes);
    words
}
