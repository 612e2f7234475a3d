use crate::crypto::cipher_traits::{BlockCipher, CipherMode};
use crate::crypto::error::CipherError;
use crate::crypto::modes::{check_mode_args, require_iv};
use crate::crypto::utils::{xor_bytes, xor_in_place};

/// Propagating CBC: each block is whitened with the XOR of the previous
/// plaintext and ciphertext blocks, both seeded with the IV.
pub struct PcbcMode;

impl CipherMode for PcbcMode {
    fn encrypt(
        &self,
        data: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        cipher: &dyn BlockCipher,
    ) -> Result<Vec<u8>, CipherError> {
        check_mode_args(data, key, cipher)?;
        let block_size = cipher.block_size();
        let iv = require_iv(iv, block_size)?;

        let mut result = Vec::with_capacity(data.len());
        let mut previous_plain = iv.to_vec();
        let mut previous_cipher = iv.to_vec();

        for block in data.chunks(block_size) {
            let mut mixed = block.to_vec();
            xor_in_place(&mut mixed, &previous_plain);
            xor_in_place(&mut mixed, &previous_cipher);

            let encrypted = cipher.encrypt_block(&mixed, key)?;
            result.extend_from_slice(&encrypted);

            previous_plain = block.to_vec();
            previous_cipher = encrypted;
        }

        Ok(result)
    }

    fn decrypt(
        &self,
        data: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        cipher: &dyn BlockCipher,
    ) -> Result<Vec<u8>, CipherError> {
        check_mode_args(data, key, cipher)?;
        let block_size = cipher.block_size();
        let iv = require_iv(iv, block_size)?;

        let mut result = Vec::with_capacity(data.len());
        let mut previous_plain = iv.to_vec();
        let mut previous_cipher = iv.to_vec();

        for block in data.chunks(block_size) {
            let mut decrypted = cipher.decrypt_block(block, key)?;
            xor_in_place(&mut decrypted, &xor_bytes(&previous_plain, &previous_cipher));

            previous_plain = decrypted.clone();
            previous_cipher = block.to_vec();
            result.extend_from_slice(&decrypted);
        }

        Ok(result)
    }
}
