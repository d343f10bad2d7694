//! Identifiers are computed as
//! `prefix + "-" + hex(sha256(domain_separator || prefix || 0 || field || 0 ...)[..4])`.

use sha2::{Digest, Sha256};

/// Domain separator for identifier hashing: `b"ibmflex:problem-id:v1\0"`.
const PROBLEM_ID_DOMAIN_SEPARATOR: &[u8] = b"ibmflex:problem-id:v1\0";

/// Bytes of the digest kept in the identifier.
const ID_HASH_BYTES: usize = 4;

/// Hashes `fields` under `prefix` into a short identifier such as `terraform-1a2b3c4d`.
///
/// Fields are NUL-terminated before hashing, so `["ab", "c"]` and `["a", "bc"]`
/// give different identifiers.
pub fn create_id_hash(prefix: &str, fields: &[&str]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(PROBLEM_ID_DOMAIN_SEPARATOR);
    hasher.update(prefix.as_bytes());
    hasher.update([0u8]);
    for field in fields {
        hasher.update(field.as_bytes());
        hasher.update([0u8]);
    }
    let digest = hasher.finalize();
    format!("{}-{}", prefix, hex::encode(&digest[..ID_HASH_BYTES]))
}
