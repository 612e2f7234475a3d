use std::sync::Arc;

use crate::crypto::cipher_traits::{check_block_len, check_key, BlockCipher};
use crate::crypto::deal_key_expansion::DealKeyExpansion;
use crate::crypto::des_adapter::DesAdapter;
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;

const BLOCK_SIZE: usize = 16;
const KEY_SIZE: usize = 16;
const ROUNDS: usize = 6;

/// DEAL: a six-round Feistel network whose round function is a full DES
/// encryption of the 64-bit right half under the round subkey.
pub struct Deal {
    feistel_network: FeistelNetwork,
    key_expansion: DealKeyExpansion,
}

impl Deal {
    pub fn new() -> Self {
        Deal {
            feistel_network: FeistelNetwork::new(ROUNDS, Arc::new(DesAdapter::new())),
            key_expansion: DealKeyExpansion::new(),
        }
    }
}

impl Default for Deal {
    fn default() -> Self {
        Deal::new()
    }
}

impl BlockCipher for Deal {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn key_size(&self) -> usize {
        KEY_SIZE
    }

    fn encrypt_block(&self, block: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
        check_block_len(block, BLOCK_SIZE)?;
        check_key(self, key)?;
        let round_keys = self.key_expansion.generate_round_keys(key);
        Ok(self
            .feistel_network
            .encrypt_with_round_keys(block, &round_keys))
    }

    fn decrypt_block(&self, block: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
        check_block_len(block, BLOCK_SIZE)?;
        check_key(self, key)?;
        let round_keys = self.key_expansion.generate_round_keys(key);
        Ok(self
            .feistel_network
            .decrypt_with_round_keys(block, &round_keys))
    }
}
