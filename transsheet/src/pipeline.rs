//! End-to-end steps: building translation sheets from source strings, and
//! building translated output from source strings plus sheets.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::{
    catalog::{StringBucket, StringCatalog, TranslationBucket, TranslationCatalog},
    error::Error,
    formats::{CompareRecord, LanguageFile, ModRecord, SheetRecord},
    glossary::{ConversionType, Glossary},
    machine::MachineCatalog,
    reference_id,
    resolver::MachinePolicy,
    tag::{encode_cell, escape_tab},
    traits::Parser,
    types::{BucketId, contains_japanese, is_blank},
};

/// Smallest split size accepted; 0 disables splitting.
pub const MIN_ROWS_PER_SHEET: usize = 5000;

#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    pub machine: MachinePolicy,
    /// Prefix non-blank output with `#<reference id>:`.
    pub reference_id: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedString {
    pub key: Uuid,
    pub text: String,
    pub reference_id: String,
}

/// Outcome of translating one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslateReport {
    pub entries: Vec<TranslatedString>,
    /// Non-blank source strings the sheet has no row for.
    pub missing_rows: usize,
    /// Glossary variables left untranslated, counted per string.
    pub unresolved_tokens: usize,
}

/// Translates every string of `strings` using the rows of `sheet`.
///
/// Strings without a row keep their source text. When the glossary is not
/// empty its variables are substituted in noun-translate mode, after the
/// reference ID prefix is added.
pub fn translate_bucket(
    strings: &StringBucket,
    sheet: &TranslationBucket,
    glossary: &Glossary,
    options: &TranslateOptions,
) -> Result<TranslateReport, Error> {
    let mut report = TranslateReport::default();

    for entry in strings.iter() {
        let row = sheet.get(&entry.key);
        if row.is_none() && !is_blank(&entry.text) {
            tracing::warn!(key = %entry.key, bucket = %strings.id(), "no sheet row, keeping source text");
            report.missing_rows += 1;
        }

        let mut text = match row {
            Some(row) => row.translate(&entry.text, &options.machine),
            None => entry.text.clone(),
        };
        let reference_id = match row {
            Some(row) => row.reference_id(),
            None => reference_id::for_key(&entry.key),
        };

        if options.reference_id && !is_blank(&text) {
            text = format!("#{}:{}", reference_id, text);
        }

        if !glossary.is_empty() {
            let substitution = glossary.substitute(&text, ConversionType::NounTranslate, "")?;
            for token in &substitution.unresolved {
                tracing::warn!(key = %entry.key, token = %token, "undefined glossary variable");
            }
            report.unresolved_tokens += substitution.unresolved.len();
            text = substitution.text;
        }

        report.entries.push(TranslatedString {
            key: entry.key,
            text,
            reference_id,
        });
    }

    Ok(report)
}

/// Reads a source JSON file and translates it with the sheet bucket named
/// after the file.
///
/// Returns the source file with its values replaced, ready to be written.
pub fn translate_language_file<P: AsRef<Path>>(
    path: P,
    sheets: &TranslationCatalog,
    glossary: &Glossary,
    options: &TranslateOptions,
) -> Result<(LanguageFile, TranslateReport), Error> {
    let path = path.as_ref();
    let id = BucketId::from_path(path)?;
    let sheet = sheets.bucket(&id).ok_or_else(|| Error::MissingBucket {
        bucket: id.to_string(),
        path: path.display().to_string(),
    })?;

    let mut file = LanguageFile::read_from(path)?;
    let strings = file.to_bucket(id)?;
    let report = translate_bucket(&strings, sheet, glossary, options)?;

    for (pair, translated) in file.strings.iter_mut().zip(&report.entries) {
        pair.value = translated.text.clone();
    }

    tracing::info!(
        path = %path.display(),
        strings = report.entries.len(),
        missing_rows = report.missing_rows,
        unresolved_tokens = report.unresolved_tokens,
        "translated"
    );
    Ok((file, report))
}

/// MOD CSV rows for a translation report; `No` holds the reference ID.
pub fn build_mod_records(report: &TranslateReport) -> Vec<ModRecord> {
    report
        .entries
        .iter()
        .map(|entry| ModRecord {
            key: entry.key,
            value: entry.text.clone(),
            no: entry.reference_id.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetLayout {
    /// Key, English, Japanese, MachineTranslation, ReferenceID, Sequence.
    #[default]
    Full,
    /// Key and English only.
    Compare,
}

#[derive(Debug, Clone, Default)]
pub struct SheetOptions {
    /// Tag CR/LF in cells as well as TAB.
    pub tag_controls: bool,
    /// Rows per output file; 0 writes a single file.
    pub rows_per_sheet: usize,
    pub layout: SheetLayout,
}

impl SheetOptions {
    pub fn validate(&self) -> Result<(), Error> {
        if self.rows_per_sheet != 0 && self.rows_per_sheet < MIN_ROWS_PER_SHEET {
            return Err(Error::validation_error(format!(
                "rows per sheet must be 0 or at least {}, got {}",
                MIN_ROWS_PER_SHEET, self.rows_per_sheet
            )));
        }
        Ok(())
    }
}

/// Builds sheet rows for every non-blank source string.
///
/// `fan` fills the Japanese column when its text for the same key contains
/// Japanese; `machine` fills the machine column. Sequence numbers restart at
/// 1 for every bucket.
pub fn build_sheet_records(
    strings: &StringCatalog,
    fan: Option<&StringCatalog>,
    machine: Option<&MachineCatalog>,
    tag_controls: bool,
) -> Vec<SheetRecord> {
    let mut records = Vec::with_capacity(strings.non_blank_count());

    for bucket in strings.buckets() {
        let mut sequence = 1;
        for entry in bucket.iter().filter(|entry| !is_blank(&entry.text)) {
            let japanese = fan
                .and_then(|fan| fan.find_entry(&entry.key))
                .map(|fan_entry| fan_entry.text.as_str())
                .filter(|text| contains_japanese(text))
                .unwrap_or_default();
            let machine_translation = machine
                .and_then(|machine| machine.get(&entry.key))
                .map(|m| escape_tab(&m.value))
                .unwrap_or_default();

            records.push(SheetRecord {
                key: entry.key,
                english: encode_cell(&entry.text, tag_controls),
                japanese: encode_cell(japanese, tag_controls),
                machine_translation,
                reference_id: reference_id::for_key(&entry.key),
                sequence: Some(sequence),
            });
            sequence += 1;
        }
    }

    records
}

/// Output paths for a sheet of `total` rows.
///
/// Without splitting this is `path` itself. With splitting the files are
/// `<stem>_1.csv` .. `<stem>_<n>.csv` next to `path`, with
/// `n = total / rows_per_sheet + 1`, so the last file can be empty.
pub fn sheet_paths(path: &Path, total: usize, rows_per_sheet: usize) -> Vec<PathBuf> {
    if rows_per_sheet == 0 {
        return vec![path.to_path_buf()];
    }
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let count = total / rows_per_sheet + 1;
    (1..=count)
        .map(|i| dir.join(format!("{}_{}.csv", stem, i)))
        .collect()
}

/// Splits rows into the chunks written by [`write_sheet`].
pub fn split_records<T: Clone>(records: &[T], rows_per_sheet: usize) -> Vec<Vec<T>> {
    if rows_per_sheet == 0 {
        return vec![records.to_vec()];
    }
    let count = records.len() / rows_per_sheet + 1;
    (0..count)
        .map(|i| {
            let from = (i * rows_per_sheet).min(records.len());
            let to = ((i + 1) * rows_per_sheet).min(records.len());
            records[from..to].to_vec()
        })
        .collect()
}

/// Writes sheet rows to `path`, split and laid out per `options`.
///
/// Returns the paths written.
pub fn write_sheet(
    records: &[SheetRecord],
    path: &Path,
    options: &SheetOptions,
) -> Result<Vec<PathBuf>, Error> {
    options.validate()?;
    let paths = sheet_paths(path, records.len(), options.rows_per_sheet);
    let chunks = split_records(records, options.rows_per_sheet);

    for (chunk, path) in chunks.into_iter().zip(&paths) {
        match options.layout {
            SheetLayout::Full => chunk.write_to(path)?,
            SheetLayout::Compare => chunk
                .into_iter()
                .map(CompareRecord::from)
                .collect::<Vec<_>>()
                .write_to(path)?,
        }
        tracing::debug!(path = %path.display(), "wrote sheet");
    }

    Ok(paths)
}
