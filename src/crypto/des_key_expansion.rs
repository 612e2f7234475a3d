use bitvec::prelude::BitVec;

use crate::crypto::des_tables::{PC1, PC2, SHIFTS};
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{bits_to_bytes, bytes_to_bits, permute_bits};

pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Vec<Vec<u8>> {
        debug_assert_eq!(key.len(), 8, "DES key must be 8 bytes");

        // PC-1 drops the parity bits: 64 -> 56.
        let permuted = permute_bits(key, &PC1);
        let bits = bytes_to_bits(&permuted);

        let mut c: BitVec = bits[..28].to_bitvec();
        let mut d: BitVec = bits[28..56].to_bitvec();

        let mut round_keys = Vec::with_capacity(16);
        for &shift in SHIFTS.iter() {
            c.rotate_left(shift);
            d.rotate_left(shift);

            let mut cd = c.clone();
            cd.extend_from_bitslice(&d);

            round_keys.push(permute_bits(&bits_to_bytes(&cd), &PC2));
        }

        round_keys
    }
}
