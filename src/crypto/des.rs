use std::sync::Arc;

use crate::crypto::cipher_traits::{check_block_len, check_key, BlockCipher};
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::permute_bits;

const BLOCK_SIZE: usize = 8;
const KEY_SIZE: usize = 8;
const ROUNDS: usize = 16;

pub struct Des {
    feistel_network: FeistelNetwork,
    key_expansion: Arc<dyn KeyExpansion>,
}

impl Des {
    pub fn new() -> Self {
        Des::with_parts(Arc::new(DesKeyExpansion), Arc::new(DesTransformation))
    }

    pub fn with_parts(
        key_expansion: Arc<dyn KeyExpansion>,
        transformation: Arc<dyn EncryptionTransformation>,
    ) -> Self {
        Des {
            feistel_network: FeistelNetwork::new(ROUNDS, transformation),
            key_expansion,
        }
    }

    /// IP -> Feistel rounds -> FP with pre-expanded round keys. Callers
    /// guarantee an 8-byte block; used by the public API after validation
    /// and by DEAL's round function.
    pub(crate) fn encrypt_raw(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
        let permuted = permute_bits(block, &IP);
        let out = self
            .feistel_network
            .encrypt_with_round_keys(&permuted, round_keys);
        permute_bits(&out, &FP)
    }

    pub(crate) fn decrypt_raw(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
        let permuted = permute_bits(block, &IP);
        let out = self
            .feistel_network
            .decrypt_with_round_keys(&permuted, round_keys);
        permute_bits(&out, &FP)
    }

    pub(crate) fn expand_key(&self, key: &[u8]) -> Vec<Vec<u8>> {
        self.key_expansion.generate_round_keys(key)
    }
}

impl Default for Des {
    fn default() -> Self {
        Des::new()
    }
}

impl BlockCipher for Des {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn key_size(&self) -> usize {
        KEY_SIZE
    }

    fn encrypt_block(&self, block: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
        check_block_len(block, BLOCK_SIZE)?;
        check_key(self, key)?;
        let round_keys = self.expand_key(key);
        Ok(self.encrypt_raw(block, &round_keys))
    }

    fn decrypt_block(&self, block: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
        check_block_len(block, BLOCK_SIZE)?;
        check_key(self, key)?;
        let round_keys = self.expand_key(key);
        Ok(self.decrypt_raw(block, &round_keys))
    }
}
