use crate::crypto::cipher_traits::{check_block_len, check_key, BlockCipher};
use crate::crypto::des::Des;
use crate::crypto::error::CipherError;

const BLOCK_SIZE: usize = 8;
const KEY_SIZE: usize = 24;

/// Triple-DES in EDE keying: encrypt under k1, decrypt under k2, encrypt
/// under k3. With k1 == k2 == k3 it degenerates to single DES.
pub struct TripleDes {
    des: Des,
}

impl TripleDes {
    pub fn new() -> Self {
        TripleDes { des: Des::new() }
    }
}

impl Default for TripleDes {
    fn default() -> Self {
        TripleDes::new()
    }
}

impl BlockCipher for TripleDes {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn key_size(&self) -> usize {
        KEY_SIZE
    }

    fn encrypt_block(&self, block: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
        check_block_len(block, BLOCK_SIZE)?;
        check_key(self, key)?;

        let (k1, rest) = key.split_at(8);
        let (k2, k3) = rest.split_at(8);

        let step = self.des.encrypt_raw(block, &self.des.expand_key(k1));
        let step = self.des.decrypt_raw(&step, &self.des.expand_key(k2));
        Ok(self.des.encrypt_raw(&step, &self.des.expand_key(k3)))
    }

    fn decrypt_block(&self, block: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
        check_block_len(block, BLOCK_SIZE)?;
        check_key(self, key)?;

        let (k1, rest) = key.split_at(8);
        let (k2, k3) = rest.split_at(8);

        let step = self.des.decrypt_raw(block, &self.des.expand_key(k3));
        let step = self.des.encrypt_raw(&step, &self.des.expand_key(k2));
        Ok(self.des.decrypt_raw(&step, &self.des.expand_key(k1)))
    }
}
