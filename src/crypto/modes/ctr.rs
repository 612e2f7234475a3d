use crate::crypto::cipher_traits::{BlockCipher, CipherMode};
use crate::crypto::error::CipherError;
use crate::crypto::modes::{check_mode_args, require_iv};
use crate::crypto::utils::xor_bytes;

/// Counter mode: block `i` is XORed with the encryption of `IV + i`, the
/// sum taken as a big-endian byte counter with wraparound. The counter is
/// a pure function of the block index, so blocks have no data dependency.
pub struct CtrMode;

/// IV plus `offset`, big-endian with wraparound over the counter width.
/// Equivalent to `offset` single-step byte increments.
fn offset_counter(counter: &[u8], offset: u64) -> Vec<u8> {
    let mut out = counter.to_vec();
    let mut carry = offset as u128;
    for byte in out.iter_mut().rev() {
        if carry == 0 {
            break;
        }
        let sum = *byte as u128 + (carry & 0xFF);
        *byte = sum as u8;
        carry = (carry >> 8) + (sum >> 8);
    }
    out
}

impl CtrMode {
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
        for (i, block) in data.chunks(block_size).enumerate() {
            let counter = offset_counter(iv, i as u64);
            let keystream = cipher.encrypt_block(&counter, key)?;
            result.extend_from_slice(&xor_bytes(block, &keystream));
        }

        Ok(result)
    }
}

impl CipherMode for CtrMode {
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

#[cfg(test)]
mod tests {
    use super::offset_counter;

    #[test]
    fn offset_matches_repeated_increment() {
        fn increment(counter: &mut [u8]) {
            for byte in counter.iter_mut().rev() {
                *byte = byte.wrapping_add(1);
                if *byte != 0 {
                    break;
                }
            }
        }

        let start = [0x00, 0xFE, 0xFF, 0xFD];
        let mut stepped = start.to_vec();
        for i in 0..=1000u64 {
            assert_eq!(offset_counter(&start, i), stepped, "offset {}", i);
            increment(&mut stepped);
        }
    }

    #[test]
    fn offset_wraps_around() {
        assert_eq!(offset_counter(&[0xFF, 0xFF], 1), vec![0x00, 0x00]);
        assert_eq!(offset_counter(&[0xFF, 0xFF], 2), vec![0x00, 0x01]);
    }
}
