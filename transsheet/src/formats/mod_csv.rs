//! Support for the `Key,Value,No` CSV read by mod loaders.
//!
//! `No` carries the reference ID of the row. The same file is read back as
//! machine translation input when building new sheets.

use std::{
    fs::File,
    io::{BufRead, BufWriter},
    path::Path,
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::Error, formats::write_bom, traits::Parser};

pub const MOD_HEADERS: [&str; 3] = ["Key", "Value", "No"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModRecord {
    #[serde(rename = "Key")]
    pub key: Uuid,
    #[serde(rename = "Value", default)]
    pub value: String,
    #[serde(rename = "No", default)]
    pub no: String,
}

impl Parser for Vec<ModRecord> {
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
        wtr.write_record(MOD_HEADERS)?;
        for record in self {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        write_bom(&mut writer)?;
        self.to_writer(writer)
    }
}
