// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Ascon AEAD constants and type aliases.

/// Key size: 128 bits (16 bytes)
pub const KEY_SIZE: usize = 16;
/// Nonce size: 128 bits (16 bytes)
pub const NONCE_SIZE: usize = 16;
/// Tag size: 128 bits (16 bytes)
pub const TAG_SIZE: usize = 16;
/// Ascon-128 block (rate) size: 64 bits (8 bytes)
pub const BLOCK_SIZE_128: usize = 8;
/// Ascon-128a block (rate) size: 128 bits (16 bytes)
pub const BLOCK_SIZE_128A: usize = 16;

/// Number of 64-bit words in the permutation state (320 bits).
pub(crate) const STATE_WORDS: usize = 5;
/// Largest supported rate, used to size padding scratch buffers.
pub(crate) const MAX_RATE: usize = BLOCK_SIZE_128A;
/// Rounds of the full permutation used by initialization and finalization.
pub(crate) const FULL_ROUNDS: usize = 12;

/// Ascon key type
pub type AsconKey = [u8; KEY_SIZE];
/// Ascon nonce type
pub type AsconNonce = [u8; NONCE_SIZE];
/// Ascon tag type
pub type AsconTag = [u8; TAG_SIZE];
