pub trait EncryptionTransformation: Send + Sync {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Vec<u8>;
}
