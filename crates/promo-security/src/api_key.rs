//! API key generation

use promo_shared::constants::{API_KEY_BYTES, API_KEY_PREFIX, KEY_FINGERPRINT_LEN};
use rand::Rng;
use sha2::{Digest, Sha256};

/// Generates a new bearer key: 256 bits from the thread-local CSPRNG, hex encoded.
pub fn generate_api_key() -> String {
    let mut bytes = [0u8; API_KEY_BYTES];
    rand::rng().fill(&mut bytes);
    format!("{}{}", API_KEY_PREFIX, hex::encode(bytes))
}

/// Short SHA-256 prefix of a key, safe to write to logs.
pub fn fingerprint(api_key: &str) -> String {
    let digest = Sha256::digest(api_key.as_bytes());
    let mut encoded = hex::encode(digest);
    encoded.truncate(KEY_FINGERPRINT_LEN);
    encoded
}
