//! Core value types shared by the string and translation catalogs.

use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    path::Path,
};

use uuid::Uuid;

use crate::{error::Error, traits::Keyed};

/// Name of a bucket: the base name of the source file, extension stripped.
///
/// Equality, hashing and ordering ignore ASCII case, while the original
/// spelling is kept for display and for output file names.
#[derive(Debug, Clone, Eq)]
pub struct BucketId(String);

impl BucketId {
    pub fn new(id: impl Into<String>) -> Self {
        BucketId(id.into())
    }

    /// Derives the bucket id from a file path (`EN/enGB.json` → `enGB`).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        path.as_ref()
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .map(BucketId::new)
            .ok_or_else(|| {
                Error::validation_error(format!(
                    "cannot derive a bucket name from {}",
                    path.as_ref().display()
                ))
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for BucketId {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Hash for BucketId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

impl Display for BucketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BucketId {
    fn from(value: &str) -> Self {
        BucketId::new(value)
    }
}

/// One source-language string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEntry {
    pub key: Uuid,
    pub text: String,
}

impl StringEntry {
    pub fn new(key: Uuid, text: impl Into<String>) -> Self {
        StringEntry {
            key,
            text: text.into(),
        }
    }
}

impl Keyed for StringEntry {
    fn key(&self) -> Uuid {
        self.key
    }
}

/// True when the text is empty or whitespace only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// True when the text contains kana or CJK ideographs.
pub fn contains_japanese(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c,
            '\u{3040}'..='\u{309F}'   // hiragana
            | '\u{30A0}'..='\u{30FF}' // katakana
            | '\u{31F0}'..='\u{31FF}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{FF66}'..='\u{FF9F}' // halfwidth katakana
        )
    })
}
