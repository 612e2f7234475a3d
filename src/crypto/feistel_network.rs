use std::sync::Arc;

use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::xor_bytes;

/// Generic Feistel runner. The final half-swap is omitted: after the last
/// round the halves leave in (R, L) order, so running the same network with
/// reversed round keys inverts it.
pub struct FeistelNetwork {
    num_rounds: usize,
    transformation: Arc<dyn EncryptionTransformation>,
}

impl FeistelNetwork {
    pub fn new(num_rounds: usize, transformation: Arc<dyn EncryptionTransformation>) -> Self {
        Self {
            num_rounds,
            transformation,
        }
    }

    pub fn encrypt_with_round_keys(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
        debug_assert_eq!(block.len() % 2, 0, "block must split into equal halves");
        let (l, r) = block.split_at(block.len() / 2);
        let mut left = l.to_vec();
        let mut right = r.to_vec();

        for round in 0..self.num_rounds {
            let f = self.transformation.transform(&right, &round_keys[round]);
            let new_right = xor_bytes(&left, &f);
            left = right;
            right = new_right;
        }

        [right, left].concat()
    }

    pub fn decrypt_with_round_keys(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
        debug_assert_eq!(block.len() % 2, 0, "block must split into equal halves");
        let (l, r) = block.split_at(block.len() / 2);
        let mut left = l.to_vec();
        let mut right = r.to_vec();

        for round in (0..self.num_rounds).rev() {
            let f = self.transformation.transform(&right, &round_keys[round]);
            let new_right = xor_bytes(&left, &f);
            left = right;
            right = new_right;
        }

        [right, left].concat()
    }
}
