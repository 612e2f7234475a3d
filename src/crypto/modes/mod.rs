pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;
pub mod pcbc;
pub mod random_delta;

use crate::crypto::cipher_traits::{check_key, BlockCipher, CipherMode};
use crate::crypto::cipher_types::CipherModeKind;
use crate::crypto::error::CipherError;

pub use cbc::CbcMode;
pub use cfb::CfbMode;
pub use ctr::CtrMode;
pub use ecb::EcbMode;
pub use ofb::OfbMode;
pub use pcbc::PcbcMode;
pub use random_delta::RandomDeltaMode;

pub fn create_mode(kind: CipherModeKind) -> Box<dyn CipherMode> {
    match kind {
        CipherModeKind::Ecb => Box::new(EcbMode),
        CipherModeKind::Cbc => Box::new(CbcMode),
        CipherModeKind::Pcbc => Box::new(PcbcMode),
        CipherModeKind::Cfb => Box::new(CfbMode),
        CipherModeKind::Ofb => Box::new(OfbMode),
        CipherModeKind::Ctr => Box::new(CtrMode),
        CipherModeKind::RandomDelta => Box::new(RandomDeltaMode),
    }
}

/// Shared precondition checks; every mode runs these before touching a
/// single block so failures are never partially applied.
pub(crate) fn check_mode_args(
    data: &[u8],
    key: &[u8],
    cipher: &dyn BlockCipher,
) -> Result<(), CipherError> {
    check_key(cipher, key)?;

    let block_size = cipher.block_size();
    if data.is_empty() {
        return Err(CipherError::InvalidInput("data must not be empty".into()));
    }
    if data.len() % block_size != 0 {
        return Err(CipherError::InvalidInput(format!(
            "data length {} is not a multiple of the block size {}",
            data.len(),
            block_size
        )));
    }

    Ok(())
}

pub(crate) fn require_iv<'a>(
    iv: Option<&'a [u8]>,
    block_size: usize,
) -> Result<&'a [u8], CipherError> {
    match iv {
        Some(iv) if iv.len() == block_size => Ok(iv),
        Some(iv) => Err(CipherError::InvalidInput(format!(
            "IV must be {} bytes, got {}",
            block_size,
            iv.len()
        ))),
        None => Err(CipherError::InvalidInput(
            "this mode requires an IV".into(),
        )),
    }
}
