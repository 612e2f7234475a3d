use rand::RngCore;

use crate::crypto::cipher_traits::PaddingProvider;
use crate::crypto::cipher_types::PaddingKind;
use crate::crypto::error::CipherError;

pub struct ZerosPadding;
pub struct Pkcs7Padding;
pub struct AnsiX923Padding;
pub struct Iso10126Padding;

pub fn create_padding(kind: PaddingKind) -> Box<dyn PaddingProvider> {
    match kind {
        PaddingKind::Zeros => Box::new(ZerosPadding),
        PaddingKind::Pkcs7 => Box::new(Pkcs7Padding),
        PaddingKind::AnsiX923 => Box::new(AnsiX923Padding),
        PaddingKind::Iso10126 => Box::new(Iso10126Padding),
    }
}

/// Pad length for the length-byte schemes: always in [1, block_size], a
/// full extra block when the data is already aligned.
fn pad_len(data_len: usize, block_size: usize) -> usize {
    block_size - data_len % block_size
}

fn check_removable(data: &[u8], block_size: usize) -> Result<(), CipherError> {
    if data.len() % block_size != 0 {
        return Err(CipherError::InvalidInput(format!(
            "padded data length {} is not a multiple of the block size {}",
            data.len(),
            block_size
        )));
    }
    Ok(())
}

/// Reads and range-checks the trailing length byte.
fn trailing_pad_len(data: &[u8], block_size: usize) -> Result<usize, CipherError> {
    let last = *data
        .last()
        .ok_or_else(|| CipherError::InvalidPadding("padded data is empty".into()))?;
    let pad = last as usize;
    if pad == 0 || pad > block_size {
        return Err(CipherError::InvalidPadding(format!(
            "length byte {} out of range [1, {}]",
            pad, block_size
        )));
    }
    Ok(pad)
}

impl PaddingProvider for ZerosPadding {
    fn add_padding(&self, data: &[u8], block_size: usize) -> Vec<u8> {
        let fill = (block_size - data.len() % block_size) % block_size;
        let mut padded = data.to_vec();
        padded.resize(data.len() + fill, 0);
        padded
    }

    // Lossy when the plaintext itself ends in zero bytes.
    fn remove_padding(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>, CipherError> {
        check_removable(data, block_size)?;
        let mut result = data.to_vec();
        while result.last() == Some(&0) {
            result.pop();
        }
        Ok(result)
    }
}

impl PaddingProvider for Pkcs7Padding {
    fn add_padding(&self, data: &[u8], block_size: usize) -> Vec<u8> {
        let pad = pad_len(data.len(), block_size);
        let mut padded = data.to_vec();
        padded.resize(data.len() + pad, pad as u8);
        padded
    }

    fn remove_padding(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>, CipherError> {
        check_removable(data, block_size)?;
        let pad = trailing_pad_len(data, block_size)?;

        let fill = &data[data.len() - pad..];
        if fill.iter().any(|&b| b as usize != pad) {
            return Err(CipherError::InvalidPadding(
                "pad bytes do not all equal the length byte".into(),
            ));
        }

        Ok(data[..data.len() - pad].to_vec())
    }
}

impl PaddingProvider for AnsiX923Padding {
    fn add_padding(&self, data: &[u8], block_size: usize) -> Vec<u8> {
        let pad = pad_len(data.len(), block_size);
        let mut padded = data.to_vec();
        padded.resize(data.len() + pad - 1, 0);
        padded.push(pad as u8);
        padded
    }

    fn remove_padding(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>, CipherError> {
        check_removable(data, block_size)?;
        let pad = trailing_pad_len(data, block_size)?;

        let fill = &data[data.len() - pad..data.len() - 1];
        if fill.iter().any(|&b| b != 0) {
            return Err(CipherError::InvalidPadding(
                "fill bytes before the length byte must be zero".into(),
            ));
        }

        Ok(data[..data.len() - pad].to_vec())
    }
}

impl PaddingProvider for Iso10126Padding {
    fn add_padding(&self, data: &[u8], block_size: usize) -> Vec<u8> {
        let pad = pad_len(data.len(), block_size);
        let mut fill = vec![0u8; pad - 1];
        rand::rng().fill_bytes(&mut fill);

        let mut padded = data.to_vec();
        padded.extend_from_slice(&fill);
        padded.push(pad as u8);
        padded
    }

    // Only the length byte is validated; the fill is random by design.
    fn remove_padding(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>, CipherError> {
        check_removable(data, block_size)?;
        let pad = trailing_pad_len(data, block_size)?;
        Ok(data[..data.len() - pad].to_vec())
    }
}
