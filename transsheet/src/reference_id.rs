//! Short, shareable reference IDs derived from string keys.
//!
//! The key (with `-` removed) is checksummed with CRC-32 and the checksum is
//! encoded with the hashids scheme over a fixed alphabet that leaves out the
//! look-alike characters `l`, `o`, `0`, `1` and `I`. IDs are deterministic but
//! not guaranteed unique: distinct keys may share a checksum.

use harsh::Harsh;
use lazy_static::lazy_static;
use uuid::Uuid;

pub const SALT: &str = "PFK";
pub const ALPHABET: &str = "abcdefghijkmnpqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ23456789";

lazy_static! {
    static ref ENCODER: Harsh = Harsh::builder()
        .salt(SALT)
        .alphabet(ALPHABET)
        .build()
        .unwrap();
}

/// Computes the reference ID of a key.
pub fn compute(key: &str) -> String {
    let stripped = key.replace('-', "");
    let crc = crc32fast::hash(stripped.as_bytes());
    let number = i64::from(crc).unsigned_abs();
    ENCODER.encode(&[number])
}

/// Computes the reference ID of a UUID key in its lowercase hyphenated form.
pub fn for_key(key: &Uuid) -> String {
    compute(&key.hyphenated().to_string())
}
