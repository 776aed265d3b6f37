// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Ascon-128 / Ascon-128a parameter sets.

use core::fmt;
use core::str::FromStr;

use crate::consts::{BLOCK_SIZE_128, BLOCK_SIZE_128A, FULL_ROUNDS};
use crate::error::AeadError;

/// Per-variant parameters driving the shared duplex construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameters {
    /// Initialization word: key size, rate and round counts packed as tag.
    pub iv: u64,
    /// Bytes absorbed or squeezed per block.
    pub rate: usize,
    /// Permutation rounds between data blocks.
    pub data_rounds: usize,
    /// Permutation rounds for initialization and finalization.
    pub full_rounds: usize,
}

const ASCON_128: Parameters = Parameters {
    iv: 0x8040_0c06_0000_0000,
    rate: BLOCK_SIZE_128,
    data_rounds: 6,
    full_rounds: FULL_ROUNDS,
};

const ASCON_128A: Parameters = Parameters {
    iv: 0x8080_0c08_0000_0000,
    rate: BLOCK_SIZE_128A,
    data_rounds: 8,
    full_rounds: FULL_ROUNDS,
};

/// Ascon AEAD variant.
///
/// Ascon-128 trades throughput for more robustness against partial or full
/// state recovery; Ascon-128a doubles the rate at the cost of that margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Ascon128,
    Ascon128a,
}

impl Variant {
    /// Both variants, in a stable order.
    pub const ALL: [Variant; 2] = [Variant::Ascon128, Variant::Ascon128a];

    #[inline]
    pub const fn parameters(self) -> &'static Parameters {
        match self {
            Variant::Ascon128 => &ASCON_128,
            Variant::Ascon128a => &ASCON_128A,
        }
    }

    #[inline]
    pub const fn iv(self) -> u64 {
        self.parameters().iv
    }

    #[inline]
    pub const fn rate(self) -> usize {
        self.parameters().rate
    }

    #[inline]
    pub const fn data_rounds(self) -> usize {
        self.parameters().data_rounds
    }

    #[inline]
    pub const fn full_rounds(self) -> usize {
        self.parameters().full_rounds
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Ascon128 => "Ascon-128",
            Variant::Ascon128a => "Ascon-128a",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = AeadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascon128" | "ascon-128" => Ok(Variant::Ascon128),
            "ascon128a" | "ascon-128a" => Ok(Variant::Ascon128a),
            _ => Err(AeadError::UnknownVariant),
        }
    }
}
