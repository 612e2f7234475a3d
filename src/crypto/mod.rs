pub mod cipher_factory;
pub mod cipher_traits;
pub mod cipher_types;
pub mod deal;
pub mod deal_key_expansion;
pub mod des;
mod des_adapter;
pub mod des_key_expansion;
pub mod des_tables;
pub mod des_transformation;
pub mod encryption_transformation;
pub mod error;
pub mod feistel_network;
pub mod file_encryptor;
pub mod key_expansion;
pub mod modes;
pub mod padding;
pub mod serpent;
pub mod triple_des;
pub mod utils;
