use std::error::Error;

use cipher_core::{create_cipher, CipherKind, CipherModeKind, FileEncryptor, PaddingKind};
use rand::RngCore;

const MODES: [CipherModeKind; 7] = [
    CipherModeKind::Ecb,
    CipherModeKind::Cbc,
    CipherModeKind::Pcbc,
    CipherModeKind::Cfb,
    CipherModeKind::Ofb,
    CipherModeKind::Ctr,
    CipherModeKind::RandomDelta,
];

const PADDINGS: [PaddingKind; 4] = [
    PaddingKind::Zeros,
    PaddingKind::AnsiX923,
    PaddingKind::Pkcs7,
    PaddingKind::Iso10126,
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cipher_kind: CipherKind = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "serpent".into())
        .parse()?;
    let cipher = create_cipher(cipher_kind);

    let mut rng = rand::rng();
    let mut key = vec![0u8; cipher.key_size()];
    rng.fill_bytes(&mut key);
    let mut iv = vec![0u8; cipher.block_size()];
    rng.fill_bytes(&mut iv);

    let dir = tempfile::tempdir()?;
    let input = dir.path().join("sample.bin");
    let mut data = vec![0u8; 4096];
    rng.fill_bytes(&mut data);
    data[4095] |= 1; // keep the tail nonzero so Zeros padding round-trips
    tokio::fs::write(&input, &data).await?;

    println!("--- {} over {} bytes ---", cipher_kind, data.len());

    for mode in MODES {
        for padding in PADDINGS {
            let encryptor = FileEncryptor::new(cipher.clone(), mode, padding);

            let encrypted = dir.path().join(format!("sample.{}.{}.enc", mode, padding));
            let restored = dir.path().join(format!("sample.{}.{}.dec", mode, padding));

            encryptor
                .encrypt_file(&input, &encrypted, &key, Some(&iv))
                .await?;
            encryptor
                .decrypt_file(&encrypted, &restored, &key, Some(&iv))
                .await?;

            let ciphertext_len = tokio::fs::metadata(&encrypted).await?.len();
            let round_trip = tokio::fs::read(&restored).await? == data;
            println!(
                "{:>12} / {:<9} {:>5} byte ciphertext  round-trip {}",
                mode.to_string(),
                padding.to_string(),
                ciphertext_len,
                if round_trip { "ok" } else { "MISMATCH" }
            );
        }
    }

    Ok(())
}
