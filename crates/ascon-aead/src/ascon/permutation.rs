// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Ascon permutation over a 320-bit state of five 64-bit words.
//!
//! Each round is constant addition, a bit-sliced 5-bit S-box and a linear
//! diffusion layer. The S-box is evaluated with word-wide boolean formulas so
//! that execution never depends on state contents.

use zeroize::Zeroize;

use crate::consts::{FULL_ROUNDS, STATE_WORDS};

/// Permutation state: five big-endian-interpreted 64-bit words.
pub type AsconState = [u64; STATE_WORDS];

/// Right-rotation amounts of the linear layer, two per word.
pub(crate) const ROTATIONS: [(u32, u32); STATE_WORDS] =
    [(19, 28), (61, 39), (1, 6), (10, 17), (7, 41)];

/// Round constant for round `i` of the 12-round schedule.
///
/// Yields `0xf0, 0xe1, 0xd2, ..., 0x4b` for `i = 0..12`.
#[inline(always)]
pub(crate) const fn round_constant(i: usize) -> u64 {
    (((0xf - i) << 4) | i) as u64
}

/// Applies the final `rounds` rounds of the 12-round schedule in place.
///
/// Reduced-round calls skip the leading constants: 6 rounds start at
/// `0x96`, 8 rounds at `0xb4`.
///
/// # Panics
/// Panics if `rounds` exceeds 12.
#[inline]
pub fn permute(state: &mut AsconState, rounds: usize) {
    assert!(
        rounds <= FULL_ROUNDS,
        "ascon: permutation supports at most {FULL_ROUNDS} rounds, got {rounds}"
    );

    for i in (FULL_ROUNDS - rounds)..FULL_ROUNDS {
        round(state, round_constant(i));
    }
}

/// Single Ascon round with the given round constant.
#[inline(always)]
pub(crate) fn round(state: &mut AsconState, constant: u64) {
    state[2] ^= constant;
    substitution(state);
    linear_diffusion(state);
}

/// Bit-sliced 5-bit S-box applied to all 64 columns at once.
///
/// Column `j` is the 5-bit value formed by bit `j` of each word, `x0`
/// being the most significant bit.
#[inline(always)]
pub(crate) fn substitution(state: &mut AsconState) {
    let [mut x0, mut x1, mut x2, mut x3, mut x4] = *state;

    x0 ^= x4;
    x4 ^= x3;
    x2 ^= x1;

    let mut t = [!x0 & x1, !x1 & x2, !x2 & x3, !x3 & x4, !x4 & x0];

    x0 ^= t[1];
    x1 ^= t[2];
    x2 ^= t[3];
    x3 ^= t[4];
    x4 ^= t[0];

    x1 ^= x0;
    x0 ^= x4;
    x3 ^= x2;
    x2 = !x2;

    *state = [x0, x1, x2, x3, x4];

    t.zeroize();
    x0.zeroize();
    x1.zeroize();
    x2.zeroize();
    x3.zeroize();
    x4.zeroize();
}

/// XORs every word with two rotations of itself.
#[inline(always)]
pub(crate) fn linear_diffusion(state: &mut AsconState) {
    for (word, &(r0, r1)) in state.iter_mut().zip(ROTATIONS.iter()) {
        *word ^= word.rotate_right(r0) ^ word.rotate_right(r1);
    }
}
