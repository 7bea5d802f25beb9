//! Keccak-256 hashing with Ethereum personal message framing.
use sha3::{Digest, Keccak256};

/// Leading text of the personal message prefix.
pub const PERSONAL_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// Compute the Keccak-256 hash of a buffer.
///
/// Uses the Keccak padding adopted by Ethereum which
/// differs from NIST SHA3-256.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&Keccak256::digest(data));
    hash
}

/// Prefix framing a message of `len` bytes.
pub fn personal_message_prefix(len: usize) -> Vec<u8> {
    let prefix = format!("{}{}", PERSONAL_MESSAGE_PREFIX, len);
    debug_assert!(prefix.is_ascii());
    prefix.into_bytes()
}

/// Hasher state primed with the framed message.
///
/// Curve engines consume the digest rather than the finalized
/// bytes so the hash is only computed once.
pub fn personal_message_digest(data: &[u8]) -> Keccak256 {
    Keccak256::new()
        .chain_update(personal_message_prefix(data.len()))
        .chain_update(data)
}

/// Hash a message the way wallets do for personal signatures.
pub fn hash_personal_message(data: &[u8]) -> [u8; 32] {
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&personal_message_digest(data).finalize());
    hash
}
