//! Machine translation input.
//!
//! Machine translations are imported from a previously published MOD CSV
//! (`Key,Value,No`) and fill the machine column of new sheets.

use std::path::Path;

use indexmap::IndexMap;
use uuid::Uuid;

use crate::{error::Error, formats::ModRecord, traits::Parser};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineEntry {
    pub key: Uuid,
    pub value: String,
    pub no: String,
}

impl From<ModRecord> for MachineEntry {
    fn from(record: ModRecord) -> Self {
        MachineEntry {
            key: record.key,
            value: record.value,
            no: record.no,
        }
    }
}

/// Machine translations keyed by string key.
#[derive(Debug, Clone, Default)]
pub struct MachineCatalog {
    entries: IndexMap<Uuid, MachineEntry>,
}

impl MachineCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, entry: MachineEntry) -> Result<(), Error> {
        if self.entries.contains_key(&entry.key) {
            return Err(Error::duplicate_key("machine translation", entry.key));
        }
        self.entries.insert(entry.key, entry);
        Ok(())
    }

    pub fn from_records(records: impl IntoIterator<Item = ModRecord>) -> Result<Self, Error> {
        let mut catalog = MachineCatalog::new();
        for record in records {
            catalog.add_entry(record.into())?;
        }
        Ok(catalog)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let records = Vec::<ModRecord>::read_from(path)?;
        let catalog = MachineCatalog::from_records(records)?;
        tracing::debug!(
            path = %path.display(),
            entries = catalog.len(),
            "loaded machine translations"
        );
        Ok(catalog)
    }

    pub fn get(&self, key: &Uuid) -> Option<&MachineEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: u128, value: &str) -> ModRecord {
        ModRecord {
            key: Uuid::from_u128(n),
            value: value.to_string(),
            no: String::new(),
        }
    }

    #[test]
    fn test_from_records() {
        let catalog = MachineCatalog::from_records(vec![record(1, "一"), record(2, "二")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&Uuid::from_u128(2)).unwrap().value, "二");
        assert!(catalog.get(&Uuid::from_u128(3)).is_none());
    }

    #[test]
    fn test_duplicate_key_is_an_error() {
        let result = MachineCatalog::from_records(vec![record(1, "一"), record(1, "壱")]);
        assert!(matches!(result, Err(Error::DuplicateKey { .. })));
    }

    #[test]
    fn test_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("umm.csv");
        std::fs::write(
            &path,
            "\u{FEFF}Key,Value,No\n00000000-0000-0000-0000-000000000001,機械翻訳,vy\n",
        )
        .unwrap();
        let catalog = MachineCatalog::load(&path).unwrap();
        let entry = catalog.get(&Uuid::from_u128(1)).unwrap();
        assert_eq!(entry.value, "機械翻訳");
        assert_eq!(entry.no, "vy");
    }
}
