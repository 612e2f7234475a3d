use crate::crypto::cipher_traits::{BlockCipher, CipherMode};
use crate::crypto::error::CipherError;
use crate::crypto::modes::check_mode_args;

pub struct EcbMode;

impl CipherMode for EcbMode {
    fn requires_iv(&self) -> bool {
        false
    }

    fn encrypt(
        &self,
        data: &[u8],
        key: &[u8],
        _iv: Option<&[u8]>,
        cipher: &dyn BlockCipher,
    ) -> Result<Vec<u8>, CipherError> {
        check_mode_args(data, key, cipher)?;

        let block_size = cipher.block_size();
        let mut result = Vec::with_capacity(data.len());
        for block in data.chunks(block_size) {
            result.extend_from_slice(&cipher.encrypt_block(block, key)?);
        }
        Ok(result)
    }

    fn decrypt(
        &self,
        data: &[u8],
        key: &[u8],
        _iv: Option<&[u8]>,
        cipher: &dyn BlockCipher,
    ) -> Result<Vec<u8>, CipherError> {
        check_mode_args(data, key, cipher)?;

        let block_size = cipher.block_size();
        let mut result = Vec::with_capacity(data.len());
        for block in data.chunks(block_size) {
            result.extend_from_slice(&cipher.decrypt_block(block, key)?);
        }
        Ok(result)
    }
}
