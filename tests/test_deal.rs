use cipher_core::crypto::deal::Deal;
use cipher_core::{BlockCipher, CipherError};
use rand::RngCore;

#[test]
fn round_trips_random_blocks() {
    let deal = Deal::new();
    let mut rng = rand::rng();

    let mut block = [0u8; 16];
    let mut key = [0u8; 16];
    for _ in 0..250 {
        rng.fill_bytes(&mut block);
        rng.fill_bytes(&mut key);

        let encrypted = deal.encrypt_block(&block, &key).unwrap();
        assert_ne!(encrypted, block);

        let decrypted = deal.decrypt_block(&encrypted, &key).unwrap();
        assert_eq!(decrypted, block);
    }
}

#[test]
fn encryption_is_deterministic_per_key() {
    let deal = Deal::new();
    let block = [0x3Cu8; 16];
    let key = [0x55u8; 16];

    let first = deal.encrypt_block(&block, &key).unwrap();
    let second = deal.encrypt_block(&block, &key).unwrap();
    assert_eq!(first, second);

    let mut other_key = key;
    other_key[15] ^= 1;
    let third = deal.encrypt_block(&block, &other_key).unwrap();
    assert_ne!(first, third);
}

#[test]
fn rejects_bad_block_and_key_lengths() {
    let deal = Deal::new();

    let err = deal.encrypt_block(&[0u8; 8], &[0u8; 16]).unwrap_err();
    assert!(matches!(err, CipherError::InvalidInput(_)));

    let err = deal.encrypt_block(&[0u8; 16], &[0u8; 24]).unwrap_err();
    assert!(matches!(err, CipherError::InvalidInput(_)));
}
