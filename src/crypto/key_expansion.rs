pub trait KeyExpansion: Send + Sync {
    fn generate_round_keys(&self, key: &[u8]) -> Vec<Vec<u8>>;
}
