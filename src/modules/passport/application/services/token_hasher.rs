use sha2::{Digest, Sha256};

/// Hash a session token for blacklist storage. Raw tokens never reach Redis.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
