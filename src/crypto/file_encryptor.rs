use std::path::Path;
use std::sync::Arc;
use std::thread::available_parallelism;

use rayon::prelude::*;

use crate::crypto::cipher_traits::{check_key, BlockCipher};
use crate::crypto::cipher_types::{CipherModeKind, PaddingKind};
use crate::crypto::error::CipherError;
use crate::crypto::modes::{check_mode_args, create_mode, require_iv};
use crate::crypto::padding::create_padding;

/// Whole-file encryption pipeline: read -> pad -> mode transform -> write.
///
/// The persisted artifact is ciphertext only; the IV travels out-of-band
/// with the caller. ECB work is scattered across a bounded worker pool
/// since its blocks are independent; every other mode runs sequentially.
#[derive(Clone)]
pub struct FileEncryptor {
    cipher: Arc<dyn BlockCipher>,
    mode: CipherModeKind,
    padding: PaddingKind,
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl FileEncryptor {
    /// ECB parallelism defaults to the available hardware parallelism
    /// (rayon's global pool).
    pub fn new(cipher: Arc<dyn BlockCipher>, mode: CipherModeKind, padding: PaddingKind) -> Self {
        FileEncryptor {
            cipher,
            mode,
            padding,
            pool: None,
        }
    }

    /// Bounds the ECB fan-out to `max_parallelism` workers.
    pub fn with_max_parallelism(mut self, max_parallelism: usize) -> Result<Self, CipherError> {
        if max_parallelism == 0 {
            return Err(CipherError::InvalidInput(
                "max_parallelism must be nonzero".into(),
            ));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(max_parallelism)
            .build()
            .map_err(|e| {
                CipherError::UnsupportedConfiguration(format!("worker pool: {}", e))
            })?;
        self.pool = Some(Arc::new(pool));
        Ok(self)
    }

    pub fn max_parallelism(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => available_parallelism().map(|n| n.get()).unwrap_or(1),
        }
    }

    fn check_iv(&self, iv: Option<&[u8]>) -> Result<(), CipherError> {
        if create_mode(self.mode).requires_iv() {
            require_iv(iv, self.cipher.block_size())?;
        }
        Ok(())
    }

    /// Scatter transform over disjoint output chunks; no merge step is
    /// needed because output ranges never overlap.
    fn run_ecb(&self, data: &[u8], key: &[u8], encrypt: bool) -> Result<Vec<u8>, CipherError> {
        check_mode_args(data, key, &*self.cipher)?;

        let block_size = self.cipher.block_size();
        let cipher = &*self.cipher;
        let mut out = vec![0u8; data.len()];

        let mut scatter = || -> Result<(), CipherError> {
            out.par_chunks_mut(block_size)
                .zip(data.par_chunks(block_size))
                .try_for_each(|(dst, src)| {
                    let block = if encrypt {
                        cipher.encrypt_block(src, key)?
                    } else {
                        cipher.decrypt_block(src, key)?
                    };
                    dst.copy_from_slice(&block);
                    Ok(())
                })
        };

        match &self.pool {
            Some(pool) => pool.install(scatter),
            None => scatter(),
        }?;

        Ok(out)
    }

    fn transform(&self, data: &[u8], key: &[u8], iv: Option<&[u8]>, encrypt: bool) -> Result<Vec<u8>, CipherError> {
        if self.mode == CipherModeKind::Ecb {
            self.run_ecb(data, key, encrypt)
        } else {
            let mode = create_mode(self.mode);
            if encrypt {
                mode.encrypt(data, key, iv, &*self.cipher)
            } else {
                mode.decrypt(data, key, iv, &*self.cipher)
            }
        }
    }

    /// Synchronous in-memory core of the encrypt path.
    pub fn encrypt_data(
        &self,
        data: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
    ) -> Result<Vec<u8>, CipherError> {
        check_key(&*self.cipher, key)?;
        self.check_iv(iv)?;

        let block_size = self.cipher.block_size();
        let padded = create_padding(self.padding).add_padding(data, block_size);
        if padded.is_empty() {
            // Zeros padding of an empty input: nothing to transform.
            return Ok(Vec::new());
        }

        self.transform(&padded, key, iv, true)
    }

    /// Synchronous in-memory core of the decrypt path. Padding-removal
    /// failures are re-signaled as `CorruptedCiphertext` so callers can
    /// tell a wrong key/IV from malformed arguments.
    pub fn decrypt_data(
        &self,
        data: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
    ) -> Result<Vec<u8>, CipherError> {
        check_key(&*self.cipher, key)?;
        self.check_iv(iv)?;

        let block_size = self.cipher.block_size();
        if data.len() % block_size != 0 {
            return Err(CipherError::InvalidInput(format!(
                "ciphertext length {} is not a multiple of the block size {}",
                data.len(),
                block_size
            )));
        }

        let plain = if data.is_empty() {
            Vec::new()
        } else {
            self.transform(data, key, iv, false)?
        };

        match create_padding(self.padding).remove_padding(&plain, block_size) {
            Ok(unpadded) => Ok(unpadded),
            Err(err) if err.is_invalid_padding() => {
                let tail_start = plain.len().saturating_sub(block_size);
                let trailing = hex::encode(&plain[tail_start..]);
                log::warn!(
                    "padding removal failed after decrypting {} bytes (trailing bytes {}): {}",
                    plain.len(),
                    trailing,
                    err
                );
                Err(CipherError::CorruptedCiphertext {
                    data_len: plain.len(),
                    trailing,
                    source: Box::new(err),
                })
            }
            Err(err) => Err(err),
        }
    }

    pub async fn encrypt_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        key: &[u8],
        iv: Option<&[u8]>,
    ) -> Result<(), CipherError> {
        // Contract checks run before the filesystem is touched.
        check_key(&*self.cipher, key)?;
        self.check_iv(iv)?;

        let data = tokio::fs::read(input.as_ref()).await?;
        log::info!(
            "encrypting {} ({} bytes, mode {}, padding {})",
            input.as_ref().display(),
            data.len(),
            self.mode,
            self.padding
        );

        let this = self.clone();
        let key = key.to_vec();
        let iv = iv.map(<[u8]>::to_vec);
        let encrypted = tokio::task::spawn_blocking(move || {
            this.encrypt_data(&data, &key, iv.as_deref())
        })
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))??;

        // Written only after the full transform succeeded, so a failure
        // never leaves a truncated output file behind.
        tokio::fs::write(output.as_ref(), &encrypted).await?;
        Ok(())
    }

    pub async fn decrypt_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        key: &[u8],
        iv: Option<&[u8]>,
    ) -> Result<(), CipherError> {
        check_key(&*self.cipher, key)?;
        self.check_iv(iv)?;

        let data = tokio::fs::read(input.as_ref()).await?;
        log::info!(
            "decrypting {} ({} bytes, mode {}, padding {})",
            input.as_ref().display(),
            data.len(),
            self.mode,
            self.padding
        );

        let this = self.clone();
        let key = key.to_vec();
        let iv = iv.map(<[u8]>::to_vec);
        let decrypted = tokio::task::spawn_blocking(move || {
            this.decrypt_data(&data, &key, iv.as_deref())
        })
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))??;

        tokio::fs::write(output.as_ref(), &decrypted).await?;
        Ok(())
    }
}
