use crate::crypto::des::Des;
use crate::crypto::key_expansion::KeyExpansion;

/// DEAL subkey schedule: the two key halves seed the first two rounds and
/// the remaining four subkeys are DES encryptions of earlier material.
pub struct DealKeyExpansion {
    des: Des,
}

impl DealKeyExpansion {
    pub fn new() -> Self {
        DealKeyExpansion { des: Des::new() }
    }

    fn des_encrypt(&self, block: &[u8], key: &[u8]) -> Vec<u8> {
        let round_keys = self.des.expand_key(key);
        self.des.encrypt_raw(block, &round_keys)
    }
}

impl KeyExpansion for DealKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Vec<Vec<u8>> {
        debug_assert_eq!(key.len(), 16, "DEAL key must be 16 bytes");

        let (left, right) = key.split_at(8);

        let k1 = left.to_vec();
        let k2 = right.to_vec();
        let k3 = self.des_encrypt(left, right);
        let k4 = self.des_encrypt(right, left);
        let k5 = self.des_encrypt(&k1, &k3);
        let k6 = self.des_encrypt(&k2, &k4);

        vec![k1, k2, k3, k4, k5, k6]
    }
}
