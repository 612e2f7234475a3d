use crate::crypto::cipher_traits::{BlockCipher, CipherMode};
use crate::crypto::error::CipherError;
use crate::crypto::modes::{check_mode_args, require_iv};
use crate::crypto::utils::xor_in_place;

/// Cipher feedback: the keystream for each block is the encryption of the
/// previous ciphertext block, so decryption also runs the cipher forward.
pub struct CfbMode;

impl CipherMode for CfbMode {
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
        let mut feedback = iv.to_vec();

        for block in data.chunks(block_size) {
            let mut keystream = cipher.encrypt_block(&feedback, key)?;
            xor_in_place(&mut keystream, block);
            feedback = keystream.clone();
            result.extend_from_slice(&keystream);
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
        let mut feedback = iv.to_vec();

        for block in data.chunks(block_size) {
            let mut keystream = cipher.encrypt_block(&feedback, key)?;
            xor_in_place(&mut keystream, block);
            feedback = block.to_vec();
            result.extend_from_slice(&keystream);
        }

        Ok(result)
    }
}
