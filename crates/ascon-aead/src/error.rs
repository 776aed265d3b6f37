// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AEAD error types.

/// Errors that can occur while constructing or using an Ascon AEAD.
///
/// Authentication failures are deliberately opaque: a short ciphertext and a
/// tag mismatch produce the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AeadError {
    #[error("ascon: bad key length")]
    InvalidKeySize,

    #[error("ascon: message authentication failed")]
    AuthenticationFailed,

    #[error("ascon: unknown variant")]
    UnknownVariant,
}
