use cipher_core::crypto::serpent::Serpent;
use cipher_core::{BlockCipher, CipherError};
use rand::RngCore;

#[test]
fn round_trips_every_accepted_key_size() {
    let mut rng = rand::rng();
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    for key_len in [16usize, 24, 32] {
        let mut key = vec![0u8; key_len];
        rng.fill_bytes(&mut key);

        let encrypted = Serpent.encrypt_block(&block, &key).unwrap();
        assert_ne!(encrypted, block);

        let decrypted = Serpent.decrypt_block(&encrypted, &key).unwrap();
        assert_eq!(decrypted, block);
    }
}

#[test]
fn random_block_key_involution() {
    let mut rng = rand::rng();
    let mut block = [0u8; 16];

    for i in 0..10_000usize {
        let key_len = [16, 24, 32][i % 3];
        let mut key = vec![0u8; key_len];
        rng.fill_bytes(&mut block);
        rng.fill_bytes(&mut key);

        let encrypted = Serpent.encrypt_block(&block, &key).unwrap();
        let decrypted = Serpent.decrypt_block(&encrypted, &key).unwrap();
        assert_eq!(decrypted, block);
    }
}

#[test]
fn encryption_is_deterministic_per_key() {
    let block = [0x42u8; 16];
    let key = [0x07u8; 32];

    let first = Serpent.encrypt_block(&block, &key).unwrap();
    let second = Serpent.encrypt_block(&block, &key).unwrap();
    assert_eq!(first, second);

    let other_key = [0x08u8; 32];
    let third = Serpent.encrypt_block(&block, &other_key).unwrap();
    assert_ne!(first, third);
}

#[test]
fn short_keys_are_not_equivalent_to_zero_extended_keys() {
    // A 16-byte key is extended with 0x01 then zeros, so plain zero
    // extension must produce a different schedule.
    let block = [0xA5u8; 16];
    let short_key = [0x11u8; 16];

    let mut zero_extended = [0u8; 32];
    zero_extended[..16].copy_from_slice(&short_key);

    let with_short = Serpent.encrypt_block(&block, &short_key).unwrap();
    let with_extended = Serpent.encrypt_block(&block, &zero_extended).unwrap();
    assert_ne!(with_short, with_extended);
}

#[test]
fn rejects_bad_block_and_key_lengths() {
    let err = Serpent.encrypt_block(&[0u8; 15], &[0u8; 32]).unwrap_err();
    assert!(matches!(err, CipherError::InvalidInput(_)));

    let err = Serpent.encrypt_block(&[0u8; 16], &[0u8; 20]).unwrap_err();
    assert!(matches!(err, CipherError::InvalidInput(_)));
}
