//! Support for translation sheet CSV files.
//!
//! Header names are wrapped in `[[...]]` so they never collide with text
//! a translator types into the sheet. Two layouts are written:
//!
//! - full: `[[Key]],[[English]],[[Japanese]],[[MachineTranslation]],[[ReferenceID]],[[Sequence]]`
//! - compare: `[[Key]],[[English]]`
//!
//! Reading matches columns by name, so a sheet that only carries
//! `[[Key]]`, `[[Japanese]]`, `[[ReferenceID]]` and `[[MachineTranslation]]`
//! loads as well; missing columns read as empty and extra columns are ignored.

use std::{
    fs::File,
    io::{BufRead, BufWriter},
    path::Path,
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::Error, formats::write_bom, traits::Parser};

pub const SHEET_HEADERS: [&str; 6] = [
    "[[Key]]",
    "[[English]]",
    "[[Japanese]]",
    "[[MachineTranslation]]",
    "[[ReferenceID]]",
    "[[Sequence]]",
];

pub const COMPARE_HEADERS: [&str; 2] = ["[[Key]]", "[[English]]"];

/// One row of a translation sheet, with cell text still tagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRecord {
    #[serde(rename = "[[Key]]")]
    pub key: Uuid,
    #[serde(rename = "[[English]]", default)]
    pub english: String,
    #[serde(rename = "[[Japanese]]", default)]
    pub japanese: String,
    #[serde(rename = "[[MachineTranslation]]", default)]
    pub machine_translation: String,
    #[serde(rename = "[[ReferenceID]]", default)]
    pub reference_id: String,
    #[serde(rename = "[[Sequence]]", default)]
    pub sequence: Option<u32>,
}

/// One row of a comparison sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareRecord {
    #[serde(rename = "[[Key]]")]
    pub key: Uuid,
    #[serde(rename = "[[English]]", default)]
    pub english: String,
}

impl From<SheetRecord> for CompareRecord {
    fn from(record: SheetRecord) -> Self {
        CompareRecord {
            key: record.key,
            english: record.english,
        }
    }
}

fn read_records<R, T>(reader: R) -> Result<Vec<T>, Error>
where
    R: BufRead,
    T: for<'de> Deserialize<'de>,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

/// Writes the header row explicitly so an empty sheet still has one.
fn write_records<W, T>(writer: W, headers: &[&str], records: &[T]) -> Result<(), Error>
where
    W: std::io::Write,
    T: Serialize,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(headers)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_with_bom<P, F>(path: P, write: F) -> Result<(), Error>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<(), Error>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_bom(&mut writer)?;
    write(&mut writer)
}

impl Parser for Vec<SheetRecord> {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        read_records(reader)
    }

    fn to_writer<W: std::io::Write>(&self, writer: W) -> Result<(), Error> {
        write_records(writer, &SHEET_HEADERS, self)
    }

    /// Sheets are written with a UTF-8 BOM so spreadsheet tools pick the right encoding.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        write_with_bom(path, |writer| self.to_writer(writer))
    }
}

impl Parser for Vec<CompareRecord> {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        read_records(reader)
    }

    fn to_writer<W: std::io::Write>(&self, writer: W) -> Result<(), Error> {
        write_records(writer, &COMPARE_HEADERS, self)
    }

    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        write_with_bom(path, |writer| self.to_writer(writer))
    }
}
