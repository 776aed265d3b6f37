// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Ascon duplex protocol.
//!
//! Phases are type states: `Duplex<Initialized>` absorbs associated data
//! into `Duplex<Absorbed>`, which processes the message into
//! `Duplex<Processed>`, which is consumed by finalization. Each transition
//! takes `self` by value, so no phase can be skipped or repeated.
//!
//! The state words are zeroized on drop and whenever they move into the
//! next phase.

use core::marker::PhantomData;

use ascon_util::{u64_from_be, u64_to_be};
use zeroize::Zeroize;

use crate::consts::{AsconTag, MAX_RATE, TAG_SIZE};

use super::permutation::{AsconState, permute};
use super::variant::Parameters;

/// First padding byte appended after the last input byte of a phase.
const PAD: u8 = 0x80;
/// Domain separator XORed into the last word between AD and message.
const DOMAIN_SEPARATOR: u64 = 1;

/// Rate region viewed as big-endian lanes; only `rate / 8` lanes are live.
type RateLanes = [[u8; 8]; MAX_RATE / 8];

/// Key and nonce freshly loaded, full permutation applied.
pub(crate) enum Initialized {}
/// Associated data absorbed and domain separator applied.
pub(crate) enum Absorbed {}
/// Message encrypted or decrypted; ready for finalization.
pub(crate) enum Processed {}

pub(crate) struct Duplex<P> {
    state: AsconState,
    params: Parameters,
    _phase: PhantomData<P>,
}

impl<P> Drop for Duplex<P> {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

impl<P> Duplex<P> {
    #[inline(always)]
    fn into_phase<Q>(mut self) -> Duplex<Q> {
        let next = Duplex {
            state: self.state,
            params: self.params,
            _phase: PhantomData,
        };
        self.state.zeroize();
        next
    }

    #[inline(always)]
    fn permute_data(&mut self) {
        permute(&mut self.state, self.params.data_rounds);
    }

    #[inline(always)]
    fn live_lanes(&self) -> usize {
        self.params.rate / 8
    }

    /// Copies the rate words out as big-endian bytes.
    #[inline(always)]
    fn load_rate(&self) -> RateLanes {
        let mut lanes: RateLanes = [[0u8; 8]; MAX_RATE / 8];
        for (lane, word) in lanes.iter_mut().zip(&self.state[..self.live_lanes()]) {
            let mut word = *word;
            u64_to_be(&mut word, lane);
        }
        lanes
    }

    /// Writes the rate bytes back into the state, zeroizing `lanes`.
    #[inline(always)]
    fn store_rate(&mut self, lanes: &mut RateLanes) {
        let live = self.live_lanes();
        for (lane, word) in lanes.iter_mut().zip(self.state[..live].iter_mut()) {
            u64_from_be(word, lane);
        }
        lanes.zeroize();
    }

    /// XORs `block` into the rate. A block shorter than the rate is the
    /// final one of its phase and receives the `0x80` pad byte.
    fn absorb_block(&mut self, block: &[u8]) {
        debug_assert!(block.len() <= self.params.rate);

        let mut lanes = self.load_rate();
        let rate = lanes.as_flattened_mut();
        for (s, b) in rate.iter_mut().zip(block) {
            *s ^= *b;
        }
        if block.len() < self.params.rate {
            rate[block.len()] ^= PAD;
        }
        self.store_rate(&mut lanes);
    }

    /// Absorbs plaintext and overwrites it with the resulting rate bytes.
    fn encrypt_block(&mut self, block: &mut [u8]) {
        debug_assert!(block.len() <= self.params.rate);

        let mut lanes = self.load_rate();
        let rate = lanes.as_flattened_mut();
        for (s, b) in rate.iter_mut().zip(block.iter_mut()) {
            *s ^= *b;
            *b = *s;
        }
        if block.len() < self.params.rate {
            rate[block.len()] ^= PAD;
        }
        self.store_rate(&mut lanes);
    }

    /// Recovers plaintext in place and replaces the consumed rate bytes with
    /// the ciphertext. Rate bytes past a short final block keep their value
    /// before the pad byte is applied.
    fn decrypt_block(&mut self, block: &mut [u8]) {
        debug_assert!(block.len() <= self.params.rate);

        let mut lanes = self.load_rate();
        let rate = lanes.as_flattened_mut();
        for (s, b) in rate.iter_mut().zip(block.iter_mut()) {
            let c = *b;
            *b ^= *s;
            *s = c;
        }
        if block.len() < self.params.rate {
            rate[block.len()] ^= PAD;
        }
        self.store_rate(&mut lanes);
    }
}

impl Duplex<Initialized> {
    /// Loads `IV || K || N`, runs the full permutation and re-mixes the key
    /// into the last two words.
    pub(crate) fn initialize(params: &Parameters, key: &[u64; 2], nonce: &[u64; 2]) -> Self {
        let mut duplex = Duplex {
            state: [params.iv, key[0], key[1], nonce[0], nonce[1]],
            params: *params,
            _phase: PhantomData,
        };

        permute(&mut duplex.state, params.full_rounds);
        duplex.state[3] ^= key[0];
        duplex.state[4] ^= key[1];

        duplex
    }

    /// Absorbs associated data and applies the domain separator.
    ///
    /// Every AD block, the padded final one included, is followed by the
    /// data-phase permutation. Empty AD runs no permutation at all; the
    /// domain separator is applied either way.
    pub(crate) fn absorb_associated_data(mut self, aad: &[u8]) -> Duplex<Absorbed> {
        if !aad.is_empty() {
            let mut blocks = aad.chunks_exact(self.params.rate);
            for block in blocks.by_ref() {
                self.absorb_block(block);
                self.permute_data();
            }

            // Padding-only block when AD is a multiple of the rate
            self.absorb_block(blocks.remainder());
            self.permute_data();
        }

        self.state[4] ^= DOMAIN_SEPARATOR;
        self.into_phase()
    }
}

impl Duplex<Absorbed> {
    /// Encrypts `data` in place.
    ///
    /// No permutation follows the final padded block; finalization takes
    /// over from there.
    pub(crate) fn encrypt_in_place(mut self, data: &mut [u8]) -> Duplex<Processed> {
        let mut blocks = data.chunks_exact_mut(self.params.rate);
        for block in blocks.by_ref() {
            self.encrypt_block(block);
            self.permute_data();
        }

        self.encrypt_block(blocks.into_remainder());
        self.into_phase()
    }

    /// Decrypts `data` in place. The output is unauthenticated until the
    /// tag from [`Duplex::finalize`] has been verified.
    pub(crate) fn decrypt_in_place(mut self, data: &mut [u8]) -> Duplex<Processed> {
        let mut blocks = data.chunks_exact_mut(self.params.rate);
        for block in blocks.by_ref() {
            self.decrypt_block(block);
            self.permute_data();
        }

        self.decrypt_block(blocks.into_remainder());
        self.into_phase()
    }
}

impl Duplex<Processed> {
    /// Mixes the key into the capacity right after the rate, runs the full
    /// permutation and squeezes the tag from the last two words.
    pub(crate) fn finalize(mut self, key: &[u64; 2]) -> AsconTag {
        let offset = self.live_lanes();
        self.state[offset] ^= key[0];
        self.state[offset + 1] ^= key[1];

        permute(&mut self.state, self.params.full_rounds);
        self.state[3] ^= key[0];
        self.state[4] ^= key[1];

        let mut lanes = [[0u8; 8]; 2];
        let [mut t0, mut t1] = [self.state[3], self.state[4]];
        u64_to_be(&mut t0, &mut lanes[0]);
        u64_to_be(&mut t1, &mut lanes[1]);

        let mut tag = [0u8; TAG_SIZE];
        tag.copy_from_slice(lanes.as_flattened());
        lanes.zeroize();

        tag
    }
}

#[cfg(test)]
impl<P> Duplex<P> {
    pub(crate) fn state(&self) -> &AsconState {
        &self.state
    }
}
