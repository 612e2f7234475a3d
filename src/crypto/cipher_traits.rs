use crate::crypto::error::CipherError;

/// A keyed, invertible transform on fixed-size blocks.
///
/// Implementations are stateless: the round-key schedule is derived from
/// `key` inside each call and discarded, so one instance can be shared
/// across threads.
pub trait BlockCipher: Send + Sync {
    fn block_size(&self) -> usize;

    /// Canonical key length in bytes.
    fn key_size(&self) -> usize;

    fn is_valid_key_size(&self, key: &[u8]) -> bool {
        key.len() == self.key_size()
    }

    fn encrypt_block(&self, block: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError>;

    fn decrypt_block(&self, block: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError>;
}

/// Extends a block cipher to block-aligned data of any length.
///
/// Chaining state lives in locals of the call; strategy objects carry no
/// per-call state and may be reused concurrently.
pub trait CipherMode: Send + Sync {
    fn requires_iv(&self) -> bool {
        true
    }

    fn encrypt(
        &self,
        data: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        cipher: &dyn BlockCipher,
    ) -> Result<Vec<u8>, CipherError>;

    fn decrypt(
        &self,
        data: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        cipher: &dyn BlockCipher,
    ) -> Result<Vec<u8>, CipherError>;
}

/// Maps arbitrary-length data to and from a block-size multiple.
pub trait PaddingProvider: Send + Sync {
    fn add_padding(&self, data: &[u8], block_size: usize) -> Vec<u8>;

    fn remove_padding(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>, CipherError>;
}

pub(crate) fn check_block_len(block: &[u8], expected: usize) -> Result<(), CipherError> {
    if block.len() != expected {
        return Err(CipherError::InvalidInput(format!(
            "block must be {} bytes, got {}",
            expected,
            block.len()
        )));
    }
    Ok(())
}

pub(crate) fn check_key(cipher: &dyn BlockCipher, key: &[u8]) -> Result<(), CipherError> {
    if key.is_empty() {
        return Err(CipherError::InvalidInput("key must not be empty".into()));
    }
    if !cipher.is_valid_key_size(key) {
        return Err(CipherError::InvalidInput(format!(
            "unsupported key length {}",
            key.len()
        )));
    }
    Ok(())
}
