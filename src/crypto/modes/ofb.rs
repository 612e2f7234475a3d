use crate::crypto::cipher_traits::{BlockCipher, CipherMode};
use crate::crypto::error::CipherError;
use crate::crypto::modes::{check_mode_args, require_iv};
use crate::crypto::utils::xor_bytes;

/// Output feedback: the keystream register is repeatedly encrypted,
/// independent of the data, so encrypt and decrypt are the same operation.
pub struct OfbMode;

impl OfbMode {
    fn transform(
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
            feedback = cipher.encrypt_block(&feedback, key)?;
            result.extend_from_slice(&xor_bytes(block, &feedback));
        }

        Ok(result)
    }
}

impl CipherMode for OfbMode {
    fn encrypt(
        &self,
        data: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        cipher: &dyn BlockCipher,
    ) -> Result<Vec<u8>, CipherError> {
        Self::transform(data, key, iv, cipher)
    }

    fn decrypt(
        &self,
        data: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        cipher: &dyn BlockCipher,
    ) -> Result<Vec<u8>, CipherError> {
        Self::transform(data, key, iv, cipher)
    }
}
