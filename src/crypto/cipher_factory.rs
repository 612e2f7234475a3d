use std::sync::Arc;

use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::cipher_types::CipherKind;
use crate::crypto::deal::Deal;
use crate::crypto::des::Des;
use crate::crypto::serpent::Serpent;
use crate::crypto::triple_des::TripleDes;

pub fn create_cipher(kind: CipherKind) -> Arc<dyn BlockCipher> {
    match kind {
        CipherKind::Des => Arc::new(Des::new()),
        CipherKind::TripleDes => Arc::new(TripleDes::new()),
        CipherKind::Deal => Arc::new(Deal::new()),
        CipherKind::Serpent => Arc::new(Serpent),
    }
}
