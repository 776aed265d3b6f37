// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Ascon-128 and Ascon-128a authenticated encryption with associated data.
//!
//! ```
//! use ascon_aead::Ascon;
//!
//! let aead = Ascon::new_128a(&[0x42; 16]).expect("Failed to create Ascon-128a");
//! let nonce = [0x24; 16];
//!
//! let sealed = aead.encrypt(&nonce, b"header", b"secret");
//! assert_eq!(sealed.len(), b"secret".len() + Ascon::TAG_SIZE);
//!
//! let opened = aead.decrypt(&nonce, b"header", &sealed).expect("Failed to decrypt(..)");
//! assert_eq!(opened, b"secret");
//! ```

#[cfg(test)]
mod tests;

mod aead;
pub mod ascon;
mod consts;
mod error;
mod traits;

pub use aead::Ascon;
pub use ascon::{AsconState, Parameters, Variant, permute};
pub use consts::{
    AsconKey, AsconNonce, AsconTag, BLOCK_SIZE_128, BLOCK_SIZE_128A, KEY_SIZE, NONCE_SIZE,
    TAG_SIZE,
};
pub use error::AeadError;
pub use traits::Aead;
