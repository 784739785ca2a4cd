//! Keyed buckets and catalogs.
//!
//! A [`Bucket`] holds the entries read from one logical source file, keyed by
//! UUID and kept in insertion order. A [`Catalog`] groups buckets by their
//! case-insensitive [`BucketId`]. Both the source strings and the translation
//! sheet rows use the same containers.

use indexmap::IndexMap;
use uuid::Uuid;

use crate::{
    error::Error,
    sheet::TranslationEntry,
    traits::Keyed,
    types::{BucketId, StringEntry, is_blank},
};

pub type StringBucket = Bucket<StringEntry>;
pub type StringCatalog = Catalog<StringEntry>;
pub type TranslationBucket = Bucket<TranslationEntry>;
pub type TranslationCatalog = Catalog<TranslationEntry>;

/// Entries of one bucket, unique by key.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket<E> {
    id: BucketId,
    entries: IndexMap<Uuid, E>,
}

impl<E: Keyed> Bucket<E> {
    pub fn new(id: impl Into<BucketId>) -> Self {
        Bucket {
            id: id.into(),
            entries: IndexMap::new(),
        }
    }

    pub fn id(&self) -> &BucketId {
        &self.id
    }

    /// Adds one entry. Fails without modifying the bucket if the key is
    /// already present.
    pub fn add_entry(&mut self, entry: E) -> Result<(), Error> {
        let key = entry.key();
        if self.entries.contains_key(&key) {
            return Err(Error::duplicate_key(self.id.as_str(), key));
        }
        self.entries.insert(key, entry);
        Ok(())
    }

    pub fn get(&self, key: &Uuid) -> Option<&E> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &Uuid) -> bool {
        self.entries.contains_key(key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves every entry of `incoming` into this bucket.
    ///
    /// All keys are checked first, so a conflicting merge leaves this bucket
    /// untouched.
    pub fn merge(&mut self, incoming: Bucket<E>) -> Result<(), Error> {
        if let Some(key) = incoming.entries.keys().find(|k| self.entries.contains_key(*k)) {
            return Err(Error::duplicate_key(self.id.as_str(), *key));
        }
        for entry in incoming.entries.into_values() {
            self.add_entry(entry)?;
        }
        Ok(())
    }
}

/// Buckets grouped by case-insensitive bucket id.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<E> {
    buckets: IndexMap<BucketId, Bucket<E>>,
}

impl<E: Keyed> Default for Catalog<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Keyed> Catalog<E> {
    pub fn new() -> Self {
        Catalog {
            buckets: IndexMap::new(),
        }
    }

    /// Adds a bucket, merging entry by entry into an existing bucket with the
    /// same id. Duplicate keys are rejected at entry granularity.
    pub fn add_bucket(&mut self, incoming: Bucket<E>) -> Result<(), Error> {
        match self.buckets.get_mut(incoming.id()) {
            Some(existing) => existing.merge(incoming),
            None => {
                self.buckets.insert(incoming.id().clone(), incoming);
                Ok(())
            }
        }
    }

    pub fn bucket(&self, id: &BucketId) -> Option<&Bucket<E>> {
        self.buckets.get(id)
    }

    pub fn buckets(&self) -> impl Iterator<Item = &Bucket<E>> {
        self.buckets.values()
    }

    /// Finds an entry by key in any bucket, first bucket wins.
    pub fn find_entry(&self, key: &Uuid) -> Option<&E> {
        self.buckets.values().find_map(|bucket| bucket.get(key))
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of entries across all buckets.
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Bucket::len).sum()
    }
}

impl Catalog<StringEntry> {
    /// Number of entries whose text is not blank; these are the rows a sheet gets.
    pub fn non_blank_count(&self) -> usize {
        self.buckets
            .values()
            .flat_map(Bucket::iter)
            .filter(|entry| !is_blank(&entry.text))
            .count()
    }
}
