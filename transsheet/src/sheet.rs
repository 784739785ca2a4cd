//! Translation sheet entries and loading.
//!
//! Every sheet file given for one source file is loaded into the bucket of
//! that source file, so a sheet split across several CSV files merges back
//! into one bucket. Keys repeated across the files are rejected.

use std::path::Path;

use uuid::Uuid;

use crate::{
    catalog::{TranslationBucket, TranslationCatalog},
    error::Error,
    formats::SheetRecord,
    reference_id,
    resolver::{MachinePolicy, resolve_with},
    tag::decode_cell,
    traits::{Keyed, Parser},
    types::{BucketId, is_blank},
};

/// One translation sheet row, with cell tags already decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationEntry {
    pub bucket_id: BucketId,
    pub key: Uuid,
    pub original: String,
    pub human: String,
    pub machine: String,
    pub reference_id: String,
    pub sequence: u32,
}

impl Keyed for TranslationEntry {
    fn key(&self) -> Uuid {
        self.key
    }
}

impl TranslationEntry {
    /// Converts a sheet row. `<TAB>` is always decoded; CR/LF tags only when
    /// `tag_controls` is set. A row without a sequence number takes `sequence`.
    pub fn from_record(
        bucket_id: BucketId,
        record: SheetRecord,
        sequence: u32,
        tag_controls: bool,
    ) -> Self {
        TranslationEntry {
            bucket_id,
            key: record.key,
            original: decode_cell(&record.english, tag_controls),
            human: decode_cell(&record.japanese, tag_controls),
            machine: decode_cell(&record.machine_translation, tag_controls),
            reference_id: record.reference_id,
            sequence: record.sequence.unwrap_or(sequence),
        }
    }

    /// Picks the final text for `original` from this row.
    pub fn translate(&self, original: &str, policy: &MachinePolicy) -> String {
        resolve_with(original, &self.human, &self.machine, policy)
    }

    /// The row's reference ID, computed from the key when the cell is blank.
    pub fn reference_id(&self) -> String {
        if is_blank(&self.reference_id) {
            reference_id::for_key(&self.key)
        } else {
            self.reference_id.clone()
        }
    }
}

/// Reads one sheet CSV into a bucket named `bucket_id`.
///
/// Rows without a `[[Sequence]]` cell are numbered from `first_sequence` in
/// row order.
pub fn read_sheet_bucket<P: AsRef<Path>>(
    path: P,
    bucket_id: &BucketId,
    tag_controls: bool,
    first_sequence: u32,
) -> Result<TranslationBucket, Error> {
    let path = path.as_ref();
    let records = Vec::<SheetRecord>::read_from(path)?;
    let mut bucket = TranslationBucket::new(bucket_id.clone());
    for (index, record) in records.into_iter().enumerate() {
        let sequence = u32::try_from(index)
            .ok()
            .and_then(|index| first_sequence.checked_add(index))
            .unwrap_or(u32::MAX);
        bucket.add_entry(TranslationEntry::from_record(
            bucket_id.clone(),
            record,
            sequence,
            tag_controls,
        ))?;
    }
    tracing::debug!(
        path = %path.display(),
        bucket = %bucket_id,
        entries = bucket.len(),
        "loaded translation sheet"
    );
    Ok(bucket)
}

/// Loads every sheet file into `catalog` under `bucket_id`.
///
/// Fallback sequence numbers continue from the rows already in the bucket,
/// so they follow creation order across all files.
pub fn load_sheet_files<P: AsRef<Path>>(
    catalog: &mut TranslationCatalog,
    paths: &[P],
    bucket_id: &BucketId,
    tag_controls: bool,
) -> Result<(), Error> {
    for path in paths {
        let loaded = catalog.bucket(bucket_id).map_or(0, |bucket| bucket.len());
        let first_sequence = u32::try_from(loaded + 1).unwrap_or(u32::MAX);
        let bucket = read_sheet_bucket(path, bucket_id, tag_controls, first_sequence)?;
        catalog.add_bucket(bucket)?;
    }
    Ok(())
}
