//! SHA-256 hashing and the R-Block chaining rule (spec §4.1, glossary
//! `chained_hash`). Grounded on `vm_io::hasher::sha256_hex` for the digest
//! wrapper and on the original `epgs.core.crypto.chained_hash` for the
//! chaining formula.

#![cfg(feature = "hash")]

use digest::Digest;
use sha2::Sha256;

/// Lowercase hex SHA-256 digest of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// `chained_hash = sha256_hex(canonical_json(payload) ++ previous_hash)`.
///
/// `previous_hash` is appended as its raw ASCII hex bytes, not as a JSON
/// string — the chain formula operates on the concatenated byte stream, not
/// on a JSON document that embeds the previous hash as a field.
pub fn chained_hash(canonical_payload: &[u8], previous_hash: &str) -> String {
    let mut buf = Vec::with_capacity(canonical_payload.len() + previous_hash.len());
    buf.extend_from_slice(canonical_payload);
    buf.extend_from_slice(previous_hash.as_bytes());
    sha256_hex(&buf)
}
