// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AEAD façade unit tests

use ascon_util::{hex_to_bytes, is_slice_zeroized, is_spare_capacity_zeroized};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{Aead, AeadError, Ascon, AsconKey, KEY_SIZE, NONCE_SIZE, TAG_SIZE, Variant};

const KEY: [u8; KEY_SIZE] = [0x42; KEY_SIZE];
const NONCE: [u8; NONCE_SIZE] = [0x24; NONCE_SIZE];

/// `check` resolves only when `T` is not [`Zeroize`]; otherwise the
/// inferred parameter is ambiguous and the test fails to compile.
trait NotZeroize<A> {
    fn check() {}
}

impl<T: ?Sized> NotZeroize<()> for T {}
impl<T: ?Sized + Zeroize> NotZeroize<u8> for T {}

fn assert_zeroize_on_drop<T: ZeroizeOnDrop>() {}

fn ascons() -> [Ascon; 2] {
    Variant::ALL.map(|variant| Ascon::new(variant, &KEY).expect("Failed to create Ascon"))
}

#[test]
fn test_sizes() {
    for aead in ascons() {
        assert_eq!(aead.nonce_size(), 16);
        assert_eq!(aead.overhead(), 16);
        assert_eq!(Ascon::KEY_SIZE, 16);
        assert_eq!(Ascon::NONCE_SIZE, 16);
        assert_eq!(Ascon::TAG_SIZE, 16);
    }
}

#[test]
fn test_names() {
    let [a, b] = ascons();

    assert_eq!(a.name(), "Ascon-128");
    assert_eq!(a.variant(), Variant::Ascon128);
    assert_eq!(b.name(), "Ascon-128a");
    assert_eq!(b.variant(), Variant::Ascon128a);
}

#[test]
fn test_constructors_agree() {
    let key: AsconKey = KEY;
    let nonce = NONCE;

    let via_new = Ascon::new_128(&KEY).expect("Failed to create Ascon-128");
    let via_key = Ascon::from_key(Variant::Ascon128, &key);
    assert_eq!(
        via_new.encrypt(&nonce, b"ad", b"msg"),
        via_key.encrypt(&nonce, b"ad", b"msg")
    );

    let via_new = Ascon::new_128a(&KEY).expect("Failed to create Ascon-128a");
    let via_key = Ascon::from_key(Variant::Ascon128a, &key);
    assert_eq!(
        via_new.encrypt(&nonce, b"ad", b"msg"),
        via_key.encrypt(&nonce, b"ad", b"msg")
    );
}

#[test]
fn test_invalid_key_size_rejected() {
    for len in [0, 1, 15, 17, 32] {
        let key = vec![0u8; len];
        for variant in Variant::ALL {
            let result = Ascon::new(variant, &key);
            assert!(matches!(result, Err(AeadError::InvalidKeySize)));
        }
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(AeadError::InvalidKeySize.to_string(), "ascon: bad key length");
    assert_eq!(
        AeadError::AuthenticationFailed.to_string(),
        "ascon: message authentication failed"
    );
}

#[test]
#[should_panic(expected = "incorrect nonce length")]
fn test_seal_short_nonce_panics() {
    let [aead, _] = ascons();
    let mut dst = Vec::new();
    aead.seal(&mut dst, &NONCE[..15], b"msg", b"");
}

#[test]
#[should_panic(expected = "incorrect nonce length")]
fn test_open_long_nonce_panics() {
    let [_, aead] = ascons();
    let mut dst = Vec::new();
    let _ = aead.open(&mut dst, &[0u8; 17], &[0u8; TAG_SIZE], b"");
}

#[test]
fn test_seal_open_roundtrip() {
    for aead in ascons() {
        let sealed = aead.encrypt(&NONCE, b"header", b"secret message");
        assert_eq!(sealed.len(), 14 + TAG_SIZE);

        let opened = aead
            .decrypt(&NONCE, b"header", &sealed)
            .expect("Failed to decrypt(..)");
        assert_eq!(opened, b"secret message");
    }
}

#[test]
fn test_empty_message_is_tag_only() {
    for aead in ascons() {
        let sealed = aead.encrypt(&NONCE, b"", b"");
        assert_eq!(sealed.len(), TAG_SIZE);

        let opened = aead.decrypt(&NONCE, b"", &sealed).expect("Failed to decrypt(..)");
        assert!(opened.is_empty());
    }
}

#[test]
fn test_seal_preserves_dst_prefix() {
    for aead in ascons() {
        let mut dst = vec![0xAA, 0xBB, 0xCC];
        aead.seal(&mut dst, &NONCE, b"payload", b"ad");

        assert_eq!(&dst[..3], &[0xAA, 0xBB, 0xCC]);
        assert_eq!(&dst[3..], &aead.encrypt(&NONCE, b"ad", b"payload")[..]);
    }
}

#[test]
fn test_open_preserves_dst_prefix() {
    for aead in ascons() {
        let sealed = aead.encrypt(&NONCE, b"ad", b"payload");

        let mut dst = b"prefix:".to_vec();
        aead.open(&mut dst, &NONCE, &sealed, b"ad")
            .expect("Failed to open(..)");

        assert_eq!(dst, b"prefix:payload");
    }
}

#[test]
fn test_short_ciphertext_rejected() {
    for aead in ascons() {
        for len in 0..TAG_SIZE {
            let mut dst = vec![1, 2, 3];
            let result = aead.open(&mut dst, &NONCE, &vec![0u8; len], b"");

            assert!(matches!(result, Err(AeadError::AuthenticationFailed)));
            assert_eq!(dst, [1, 2, 3]);
        }
    }
}

#[test]
fn test_modified_tag_rejected() {
    for aead in ascons() {
        let mut sealed = aead.encrypt(&NONCE, b"header", b"secret");
        let last = sealed.len() - 1;
        sealed[last] ^= 0x01;

        let result = aead.decrypt(&NONCE, b"header", &sealed);
        assert!(matches!(result, Err(AeadError::AuthenticationFailed)));
    }
}

#[test]
fn test_modified_ciphertext_rejected() {
    for aead in ascons() {
        let mut sealed = aead.encrypt(&NONCE, b"header", b"secret");
        sealed[0] ^= 0x01;

        let result = aead.decrypt(&NONCE, b"header", &sealed);
        assert!(matches!(result, Err(AeadError::AuthenticationFailed)));
    }
}

#[test]
fn test_modified_aad_rejected() {
    for aead in ascons() {
        let sealed = aead.encrypt(&NONCE, b"header", b"secret");

        let result = aead.decrypt(&NONCE, b"Header", &sealed);
        assert!(matches!(result, Err(AeadError::AuthenticationFailed)));
    }
}

#[test]
fn test_wrong_nonce_rejected() {
    for aead in ascons() {
        let sealed = aead.encrypt(&NONCE, b"header", b"secret");

        let mut nonce = NONCE;
        nonce[15] ^= 0x80;

        let result = aead.decrypt(&nonce, b"header", &sealed);
        assert!(matches!(result, Err(AeadError::AuthenticationFailed)));
    }
}

#[test]
fn test_wrong_key_rejected() {
    let sealed = Ascon::new_128(&KEY)
        .expect("Failed to create Ascon-128")
        .encrypt(&NONCE, b"", b"secret");

    let other = Ascon::new_128(&[0x43; KEY_SIZE]).expect("Failed to create Ascon-128");
    let result = other.decrypt(&NONCE, b"", &sealed);

    assert!(matches!(result, Err(AeadError::AuthenticationFailed)));
}

#[test]
fn test_wrong_variant_rejected() {
    let [a, b] = ascons();
    let sealed = a.encrypt(&NONCE, b"", b"secret");

    let result = b.decrypt(&NONCE, b"", &sealed);
    assert!(matches!(result, Err(AeadError::AuthenticationFailed)));
}

#[test]
fn test_open_failure_restores_dst_and_zeroizes_spare_capacity() {
    for aead in ascons() {
        let mut sealed = aead.encrypt(&NONCE, b"", &[0x5A; 64]);
        sealed[10] ^= 0xFF;

        let mut dst = Vec::with_capacity(128);
        dst.extend_from_slice(b"keep");

        let result = aead.open(&mut dst, &NONCE, &sealed, b"");

        assert!(matches!(result, Err(AeadError::AuthenticationFailed)));
        assert_eq!(dst, b"keep");
        assert!(is_spare_capacity_zeroized(&dst));
    }
}

#[test]
fn test_detached_roundtrip() {
    for aead in ascons() {
        let mut data = *b"detached payload";
        let tag = aead.encrypt_in_place_detached(&NONCE, b"ad", &mut data);

        let sealed = aead.encrypt(&NONCE, b"ad", b"detached payload");
        assert_eq!(&sealed[..16], &data);
        assert_eq!(&sealed[16..], &tag);

        aead.decrypt_in_place_detached(&NONCE, b"ad", &mut data, &tag)
            .expect("Failed to decrypt_in_place_detached(..)");
        assert_eq!(&data, b"detached payload");
    }
}

#[test]
fn test_detached_failure_zeroizes_data() {
    for aead in ascons() {
        let mut data = *b"secret";
        let mut tag = aead.encrypt_in_place_detached(&NONCE, b"header", &mut data);
        tag[0] ^= 0x01;

        let result = aead.decrypt_in_place_detached(&NONCE, b"header", &mut data, &tag);

        assert!(matches!(result, Err(AeadError::AuthenticationFailed)));
        assert!(is_slice_zeroized(&data));
    }
}

#[test]
fn test_dyn_aead_dispatch() {
    let aeads: Vec<Box<dyn Aead>> = ascons()
        .into_iter()
        .map(|aead| Box::new(aead) as Box<dyn Aead>)
        .collect();

    for aead in &aeads {
        assert_eq!(aead.nonce_size(), NONCE_SIZE);
        assert_eq!(aead.overhead(), TAG_SIZE);

        let mut sealed = Vec::new();
        aead.seal(&mut sealed, &NONCE, b"via trait", b"ad");

        let mut opened = Vec::new();
        aead.open(&mut opened, &NONCE, &sealed, b"ad")
            .expect("Failed to open(..)");
        assert_eq!(opened, b"via trait");
    }
}

#[test]
fn test_key_wiped_on_drop_only() {
    assert_zeroize_on_drop::<Ascon>();
    <Ascon as NotZeroize<_>>::check();
}

#[test]
fn test_key_fixed_for_instance_lifetime() {
    let zero_key = Ascon::new_128(&[0u8; KEY_SIZE]).expect("Failed to create Ascon-128");

    for aead in ascons() {
        let first = aead.encrypt(&NONCE, b"", b"secret");
        let _ = aead.decrypt(&NONCE, b"", &[0u8; TAG_SIZE]);
        let second = aead.encrypt(&NONCE, b"", b"secret");

        assert_eq!(first, second);
        assert_ne!(first, zero_key.encrypt(&NONCE, b"", b"secret"));
    }
}

#[test]
fn test_debug_hides_key() {
    let key = hex_to_bytes("DEADBEEFDEADBEEFDEADBEEFDEADBEEF");
    let aead = Ascon::new_128a(&key).expect("Failed to create Ascon-128a");

    let debug = format!("{aead:?}");

    assert!(debug.contains("Ascon-128a"));
    assert!(debug.contains("[protected]"));
    assert!(!debug.to_lowercase().contains("deadbeef"));
}
