use cipher_core::crypto::des::Des;
use cipher_core::crypto::triple_des::TripleDes;
use cipher_core::{BlockCipher, CipherError};
use rand::RngCore;

#[test]
fn degenerates_to_single_des_with_repeated_key() {
    let triple = TripleDes::new();
    let des = Des::new();
    let mut rng = rand::rng();

    let mut block = [0u8; 8];
    let mut half = [0u8; 8];
    for _ in 0..100 {
        rng.fill_bytes(&mut block);
        rng.fill_bytes(&mut half);

        let mut key = [0u8; 24];
        key[..8].copy_from_slice(&half);
        key[8..16].copy_from_slice(&half);
        key[16..].copy_from_slice(&half);

        // E(k) . D(k) . E(k) collapses to a single DES encryption.
        assert_eq!(
            triple.encrypt_block(&block, &key).unwrap(),
            des.encrypt_block(&block, &half).unwrap()
        );
    }
}

#[test]
fn round_trips_random_blocks() {
    let triple = TripleDes::new();
    let mut rng = rand::rng();

    let mut block = [0u8; 8];
    let mut key = [0u8; 24];
    for _ in 0..500 {
        rng.fill_bytes(&mut block);
        rng.fill_bytes(&mut key);

        let encrypted = triple.encrypt_block(&block, &key).unwrap();
        let decrypted = triple.decrypt_block(&encrypted, &key).unwrap();
        assert_eq!(decrypted, block);
    }
}

#[test]
fn rejects_bad_block_and_key_lengths() {
    let triple = TripleDes::new();

    let err = triple.encrypt_block(&[0u8; 16], &[0u8; 24]).unwrap_err();
    assert!(matches!(err, CipherError::InvalidInput(_)));

    let err = triple.encrypt_block(&[0u8; 8], &[0u8; 8]).unwrap_err();
    assert!(matches!(err, CipherError::InvalidInput(_)));
}
