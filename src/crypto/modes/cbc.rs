use crate::crypto::cipher_traits::{BlockCipher, CipherMode};
use crate::crypto::error::CipherError;
use crate::crypto::modes::{check_mode_args, require_iv};
use crate::crypto::utils::{xor_bytes, xor_in_place};

pub struct CbcMode;

impl CipherMode for CbcMode {
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
        let mut previous = iv.to_vec();

        for block in data.chunks(block_size) {
            let mixed = xor_bytes(block, &previous);
            let encrypted = cipher.encrypt_block(&mixed, key)?;
            result.extend_from_slice(&encrypted);
            previous = encrypted;
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
        let mut previous = iv.to_vec();

        for block in data.chunks(block_size) {
            let mut decrypted = cipher.decrypt_block(block, key)?;
            xor_in_place(&mut decrypted, &previous);
            result.extend_from_slice(&decrypted);
            previous = block.to_vec();
        }

        Ok(result)
    }
}
