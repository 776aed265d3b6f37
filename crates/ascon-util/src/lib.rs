// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Buffer and comparison helpers shared by the Ascon AEAD.
//!
//! Word conversions zeroize their source after reading so that key and
//! nonce scratch bytes do not linger on the stack.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;

use subtle::ConstantTimeEq;

#[cfg(test)]
mod tests;

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise. Slices of
/// different length compare unequal immediately (lengths are public); for
/// equal lengths every byte is visited regardless of where a difference
/// occurs.
///
/// # Example
///
/// ```
/// use ascon_util::constant_time_eq;
///
/// let a = [1, 2, 3, 4];
/// let b = [1, 2, 3, 4];
/// let c = [1, 2, 3, 5];
///
/// assert!(constant_time_eq(&a, &b));
/// assert!(!constant_time_eq(&a, &c));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Grows `vec` by `n` zero bytes and returns the freshly appended region.
///
/// Existing content is preserved; the returned slice is exactly `n` bytes
/// long and starts at the old length.
///
/// # Example
///
/// ```
/// use ascon_util::slice_for_append;
///
/// let mut vec = vec![0xAAu8, 0xBB];
/// let tail = slice_for_append(&mut vec, 3);
/// tail.copy_from_slice(&[1, 2, 3]);
///
/// assert_eq!(vec, [0xAA, 0xBB, 1, 2, 3]);
/// ```
#[inline]
pub fn slice_for_append(vec: &mut Vec<u8>, n: usize) -> &mut [u8] {
    let start = vec.len();
    vec.resize(start + n, 0);
    &mut vec[start..]
}

/// Reports whether `x` and `y` share any memory.
///
/// Empty slices never overlap anything.
#[inline]
pub fn any_overlap(x: &[u8], y: &[u8]) -> bool {
    if x.is_empty() || y.is_empty() {
        return false;
    }

    let x_start = x.as_ptr() as usize;
    let y_start = y.as_ptr() as usize;
    let x_end = x_start + x.len() - 1;
    let y_end = y_start + y.len() - 1;

    x_start <= y_end && y_start <= x_end
}

/// Reports whether `x` and `y` share memory at non-corresponding offsets.
///
/// Two views that start at the same address are an exact overlap, which is
/// safe for byte-by-byte in-place processing. Any other overlap is inexact
/// and would let an output write clobber input that has not been read yet.
///
/// # Example
///
/// ```
/// use ascon_util::inexact_overlap;
///
/// let buf = [0u8; 16];
///
/// assert!(!inexact_overlap(&buf[..8], &buf[..8]));
/// assert!(inexact_overlap(&buf[..8], &buf[4..12]));
/// assert!(!inexact_overlap(&buf[..8], &buf[8..]));
/// ```
#[inline]
pub fn inexact_overlap(x: &[u8], y: &[u8]) -> bool {
    if x.is_empty() || y.is_empty() || x.as_ptr() == y.as_ptr() {
        return false;
    }

    any_overlap(x, y)
}

/// Converts 8 big-endian bytes to a `u64`, zeroizing the source bytes.
///
/// Builds the integer with shifts instead of going through an intermediate
/// array, then clears each source byte after reading it.
#[inline(always)]
pub fn u64_from_be(dst: &mut u64, bytes: &mut [u8; 8]) {
    *dst = 0;
    for byte in bytes.iter_mut() {
        *dst = (*dst << 8) | (*byte as u64);
        *byte = 0;
    }
}

/// Converts a `u64` to big-endian bytes, zeroizing the source.
#[inline(always)]
pub fn u64_to_be(src: &mut u64, bytes: &mut [u8; 8]) {
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = (*src >> (56 - 8 * i)) as u8;
    }
    *src = 0;
}

/// Loads a 16-byte big-endian value into two words.
///
/// The input belongs to the caller and is left untouched; only the internal
/// scratch copy is cleared.
#[inline]
pub fn u64_pair_from_be(dst: &mut [u64; 2], bytes: &[u8; 16]) {
    let mut scratch = [0u8; 8];

    for (word, chunk) in dst.iter_mut().zip(bytes.chunks_exact(8)) {
        scratch.copy_from_slice(chunk);
        u64_from_be(word, &mut scratch);
    }
}

/// Zeroizes the spare capacity of a `Vec<u8>`, leaving active bytes untouched.
///
/// Used after truncating a buffer that briefly held sensitive bytes past the
/// new length.
///
/// # Example
///
/// ```
/// use ascon_util::zeroize_spare_capacity;
///
/// let mut vec = vec![0xFFu8; 100];
/// vec.truncate(10);
///
/// zeroize_spare_capacity(&mut vec);
///
/// assert!(vec.iter().all(|&b| b == 0xFF));
/// ```
#[inline(always)]
pub fn zeroize_spare_capacity(vec: &mut Vec<u8>) {
    let spare = vec.capacity() - vec.len();
    if spare == 0 {
        return;
    }

    unsafe {
        let spare_ptr = vec.as_mut_ptr().add(vec.len());
        core::ptr::write_bytes(spare_ptr, 0, spare);
        // Volatile read keeps the optimizer from dropping the write
        core::ptr::read_volatile(spare_ptr);
    }
}

/// Checks that every byte in the slice is zero.
#[cfg(feature = "test-utils")]
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Checks that the spare capacity of a `Vec<u8>` (from `len` to `capacity`)
/// holds only zero bytes.
#[cfg(feature = "test-utils")]
#[inline(never)]
pub fn is_spare_capacity_zeroized(vec: &Vec<u8>) -> bool {
    let len = vec.len();
    let cap = vec.capacity();

    if cap == len {
        return true;
    }

    unsafe {
        core::slice::from_raw_parts(vec.as_ptr().add(len), cap - len)
            .iter()
            .all(|&b| b == 0)
    }
}

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use ascon_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("E355159F"), vec![0xe3, 0x55, 0x15, 0x9f]);
/// ```
#[cfg(feature = "test-utils")]
#[inline]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string must have even length");

    hex.as_bytes()
        .chunks_exact(2)
        .map(|pair| (hex_digit(pair[0]) << 4) | hex_digit(pair[1]))
        .collect()
}

#[cfg(feature = "test-utils")]
#[inline(always)]
fn hex_digit(c: u8) -> u8 {
    match (c as char).to_digit(16) {
        Some(d) => d as u8,
        None => panic!("invalid hex character: {:#04x}", c),
    }
}
