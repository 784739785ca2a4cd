//! Support for the game's JSON string file.
//!
//! ```json
//! {
//!   "$id": "1",
//!   "strings": [
//!     { "Key": "5f0c3c55-3c1e-4e0f-9d54-8a9e6f0f1a01", "Value": "Hello" }
//!   ]
//! }
//! ```
//!
//! Top-level fields other than `$id` and `strings` are kept as-is so a
//! translated file differs from its source only in the `Value`s.

use std::{io::BufRead, path::Path};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    catalog::StringBucket,
    error::Error,
    traits::Parser,
    types::{BucketId, StringEntry},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageFile {
    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default)]
    pub strings: Vec<StringPair>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringPair {
    #[serde(rename = "Key")]
    pub key: Uuid,
    #[serde(rename = "Value", default, deserialize_with = "null_as_empty")]
    pub value: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Parser for LanguageFile {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }

    fn to_writer<W: std::io::Write>(&self, writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(writer, self).map_err(Error::Parse)
    }
}

impl LanguageFile {
    /// Builds a bucket from the file's strings, in file order.
    pub fn to_bucket(&self, id: impl Into<BucketId>) -> Result<StringBucket, Error> {
        let mut bucket = StringBucket::new(id);
        for pair in &self.strings {
            bucket.add_entry(StringEntry::new(pair.key, pair.value.clone()))?;
        }
        Ok(bucket)
    }
}

/// Reads a JSON string file into a bucket named after the file stem.
pub fn read_bucket<P: AsRef<Path>>(path: P) -> Result<StringBucket, Error> {
    let path = path.as_ref();
    let id = BucketId::from_path(path)?;
    let file = LanguageFile::read_from(path)?;
    let bucket = file.to_bucket(id)?;
    tracing::debug!(
        path = %path.display(),
        bucket = %bucket.id(),
        entries = bucket.len(),
        "loaded string file"
    );
    Ok(bucket)
}
