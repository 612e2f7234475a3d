use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::crypto::cipher_traits::{BlockCipher, CipherMode};
use crate::crypto::error::CipherError;
use crate::crypto::modes::{check_mode_args, require_iv};
use crate::crypto::utils::{xor_bytes, xor_in_place};

/// Random-Delta: every block is whitened with an accumulated random delta
/// (`delta_0 = IV`, `delta_i = r_i XOR delta_{i-1}`) before encryption.
///
/// The delta stream must be reproducible from the IV alone for decryption
/// to work, so both directions draw from a ChaCha20 generator seeded with
/// the IV. ChaCha20's output is fully specified, which keeps ciphertexts
/// portable across implementations.
pub struct RandomDeltaMode;

fn delta_rng(iv: &[u8]) -> ChaCha20Rng {
    let mut seed = [0u8; 32];
    let len = iv.len().min(seed.len());
    seed[..len].copy_from_slice(&iv[..len]);
    ChaCha20Rng::from_seed(seed)
}

impl CipherMode for RandomDeltaMode {
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

        let mut rng = delta_rng(iv);
        let mut delta = iv.to_vec();
        let mut result = Vec::with_capacity(data.len());

        for block in data.chunks(block_size) {
            let mut fresh = vec![0u8; block_size];
            rng.fill_bytes(&mut fresh);
            xor_in_place(&mut fresh, &delta);
            delta = fresh;

            let mixed = xor_bytes(block, &delta);
            result.extend_from_slice(&cipher.encrypt_block(&mixed, key)?);
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

        let mut rng = delta_rng(iv);
        let mut delta = iv.to_vec();
        let mut result = Vec::with_capacity(data.len());

        for block in data.chunks(block_size) {
            let mut fresh = vec![0u8; block_size];
            rng.fill_bytes(&mut fresh);
            xor_in_place(&mut fresh, &delta);
            delta = fresh;

            let mut decrypted = cipher.decrypt_block(block, key)?;
            xor_in_place(&mut decrypted, &delta);
            result.extend_from_slice(&decrypted);
        }

        Ok(result)
    }
}
