//! File formats read and written by transsheet.
//!
//! - [`language`]: the game's JSON string file (`{"$id", "strings": [{Key, Value}]}`).
//! - [`sheet_csv`]: translation sheet rows and their column layouts.
//! - [`glossary_csv`]: glossary rows.
//! - [`mod_csv`]: the `Key,Value,No` CSV consumed by mod loaders, also reused as
//!   machine translation input.
//!
//! [`FormatType`] identifies the physical encoding from a file extension.

pub mod glossary_csv;
pub mod language;
pub mod mod_csv;
pub mod sheet_csv;

use std::{
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

pub use glossary_csv::GlossaryRecord;
pub use language::{LanguageFile, StringPair};
pub use mod_csv::ModRecord;
pub use sheet_csv::{CompareRecord, SheetRecord};

use crate::Error;

/// Physical file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// JSON string file.
    Json,
    /// Comma-separated values.
    Csv,
}

impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Json => write!(f, "json"),
            FormatType::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for FormatType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(FormatType::Json),
            "csv" => Ok(FormatType::Csv),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl FormatType {
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Json => "json",
            FormatType::Csv => "csv",
        }
    }
}

/// Infers the format from the file extension, ignoring case.
pub fn infer_format_from_extension<P: AsRef<Path>>(path: P) -> Option<FormatType> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| ext.parse().ok())
}

/// Writes a UTF-8 byte-order mark, which spreadsheet applications need to
/// detect UTF-8 in CSV files.
pub(crate) fn write_bom<W: std::io::Write>(writer: &mut W) -> Result<(), Error> {
    writer.write_all("\u{FEFF}".as_bytes())?;
    Ok(())
}
