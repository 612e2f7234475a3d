pub mod crypto;

pub use crypto::cipher_factory::create_cipher;
pub use crypto::cipher_traits::{BlockCipher, CipherMode, PaddingProvider};
pub use crypto::cipher_types::{CipherKind, CipherModeKind, PaddingKind};
pub use crypto::error::CipherError;
pub use crypto::file_encryptor::FileEncryptor;
pub use crypto::modes::create_mode;
pub use crypto::padding::create_padding;
