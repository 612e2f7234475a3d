use cipher_core::crypto::des::Des;
use cipher_core::{BlockCipher, CipherError};
use hex_literal::hex;
use rand::RngCore;

#[test]
fn published_test_vectors() {
    let des = Des::new();

    let cases: [([u8; 8], [u8; 8], [u8; 8]); 3] = [
        (
            hex!("13 34 57 79 9B BC DF F1"),
            hex!("01 23 45 67 89 AB CD EF"),
            hex!("85 E8 13 54 0F 0A B4 05"),
        ),
        (
            hex!("01 23 45 67 89 AB CD EF"),
            hex!("4E 6F 77 20 69 73 20 74"),
            hex!("3F A4 0E 8A 98 4D 48 15"),
        ),
        (
            hex!("00 00 00 00 00 00 00 00"),
            hex!("00 00 00 00 00 00 00 00"),
            hex!("8C A6 4D E9 C1 B1 23 A7"),
        ),
    ];

    for (key, plaintext, ciphertext) in cases {
        let encrypted = des.encrypt_block(&plaintext, &key).unwrap();
        assert_eq!(encrypted, ciphertext);

        let decrypted = des.decrypt_block(&encrypted, &key).unwrap();
        assert_eq!(decrypted, plaintext);
    }
}

#[test]
fn random_block_key_involution() {
    let des = Des::new();
    let mut rng = rand::rng();

    let mut block = [0u8; 8];
    let mut key = [0u8; 8];
    for _ in 0..2_500 {
        rng.fill_bytes(&mut block);
        rng.fill_bytes(&mut key);

        let encrypted = des.encrypt_block(&block, &key).unwrap();
        let decrypted = des.decrypt_block(&encrypted, &key).unwrap();
        assert_eq!(decrypted, block);
    }
}

#[test]
fn rejects_bad_block_and_key_lengths() {
    let des = Des::new();

    let err = des.encrypt_block(&[0u8; 7], &[0u8; 8]).unwrap_err();
    assert!(matches!(err, CipherError::InvalidInput(_)));

    let err = des.encrypt_block(&[0u8; 8], &[0u8; 16]).unwrap_err();
    assert!(matches!(err, CipherError::InvalidInput(_)));

    let err = des.decrypt_block(&[0u8; 8], &[]).unwrap_err();
    assert!(matches!(err, CipherError::InvalidInput(_)));
}
