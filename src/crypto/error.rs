use thiserror::Error;

/// Errors produced by the cipher engine.
///
/// `InvalidInput` always means the caller broke a contract before any
/// cryptographic work started; `InvalidPadding` and `CorruptedCiphertext`
/// mean the key/IV/ciphertext combination did not decrypt to valid
/// plaintext.
#[derive(Debug, Error)]
pub enum CipherError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid padding: {0}")]
    InvalidPadding(String),

    /// Pipeline-level wrapper around a padding failure, carrying enough
    /// context to tell a bad key/IV apart from malformed caller input.
    #[error("corrupted ciphertext ({data_len} bytes decrypted, trailing bytes {trailing}): {source}")]
    CorruptedCiphertext {
        data_len: usize,
        trailing: String,
        #[source]
        source: Box<CipherError>,
    },

    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CipherError {
    pub fn is_invalid_padding(&self) -> bool {
        matches!(self, CipherError::InvalidPadding(_))
    }
}
