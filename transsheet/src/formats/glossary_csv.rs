//! Support for glossary CSV files.
//!
//! Columns: `[[変換区分]]` (conversion type sentinel), `[[接頭辞]]` (prefix),
//! `[[英語]]` (original text) and `[[日本語]]` (translated text).

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    glossary::{ConversionType, GlossaryEntry},
    traits::Parser,
};

pub const GLOSSARY_HEADERS: [&str; 4] = ["[[変換区分]]", "[[接頭辞]]", "[[英語]]", "[[日本語]]"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryRecord {
    #[serde(rename = "[[変換区分]]", default)]
    pub conversion_type: String,
    #[serde(rename = "[[接頭辞]]", default)]
    pub prefix: String,
    #[serde(rename = "[[英語]]", default)]
    pub original: String,
    #[serde(rename = "[[日本語]]", default)]
    pub translated: String,
}

impl TryFrom<GlossaryRecord> for GlossaryEntry {
    type Error = Error;

    fn try_from(record: GlossaryRecord) -> Result<Self, Self::Error> {
        Ok(GlossaryEntry {
            conversion_type: ConversionType::from_sentinel(&record.conversion_type)?,
            prefix: record.prefix,
            original: record.original,
            translated: record.translated,
        })
    }
}

impl From<&GlossaryEntry> for GlossaryRecord {
    fn from(entry: &GlossaryEntry) -> Self {
        GlossaryRecord {
            conversion_type: entry.conversion_type.sentinel().to_string(),
            prefix: entry.prefix.clone(),
            original: entry.original.clone(),
            translated: entry.translated.clone(),
        }
    }
}

impl Parser for Vec<GlossaryRecord> {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        let mut records = Vec::new();
        for result in rdr.deserialize() {
            records.push(result?);
        }
        Ok(records)
    }

    fn to_writer<W: std::io::Write>(&self, writer: W) -> Result<(), Error> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        wtr.write_record(GLOSSARY_HEADERS)?;
        for record in self {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
