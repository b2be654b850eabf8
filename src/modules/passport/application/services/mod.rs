pub mod mobile;
pub mod token_hasher;
