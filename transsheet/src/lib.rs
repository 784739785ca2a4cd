#![forbid(unsafe_code)]
//! Translation sheet toolkit for game string files.
//!
//! Reconciles a game's source string catalog with human and machine
//! translations kept in spreadsheet-friendly CSV sheets, rewrites glossary
//! variables, and produces translated output.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use transsheet::{
//!     BucketId, Glossary, TranslateOptions, TranslationCatalog, load_sheet_files,
//!     translate_language_file, traits::Parser,
//! };
//!
//! let mut sheets = TranslationCatalog::new();
//! load_sheet_files(&mut sheets, &["sheets/enGB.csv"], &BucketId::new("enGB"), true)?;
//!
//! let glossary = Glossary::load("glossary.csv")?;
//! let (translated, report) =
//!     translate_language_file("EN/enGB.json", &sheets, &glossary, &TranslateOptions::default())?;
//! translated.write_to("JP/enGB.json")?;
//! println!("{} strings without a sheet row", report.missing_rows);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Pieces
//!
//! - [`tag`]: reversible `<CRLF>`/`<CR>`/`<LF>`/`<TAB>` tagging for sheet cells
//! - [`reference_id`]: short IDs derived from string keys
//! - [`catalog`]: buckets of entries keyed by UUID, grouped by file name
//! - [`resolver`]: picks human, machine or original text for one string
//! - [`glossary`]: glossary catalog and variable substitution
//! - [`pipeline`]: sheet building and translated output

pub mod catalog;
pub mod error;
pub mod formats;
pub mod glossary;
pub mod machine;
pub mod pipeline;
pub mod reference_id;
pub mod resolver;
pub mod sheet;
pub mod tag;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    catalog::{
        Bucket, Catalog, StringBucket, StringCatalog, TranslationBucket, TranslationCatalog,
    },
    error::Error,
    formats::{FormatType, infer_format_from_extension},
    glossary::{ConversionType, Glossary, GlossaryEntry, GlossaryKey, Substitution},
    machine::{MachineCatalog, MachineEntry},
    pipeline::{
        SheetLayout, SheetOptions, TranslateOptions, TranslateReport, build_mod_records,
        build_sheet_records, translate_bucket, translate_language_file, write_sheet,
    },
    resolver::{MachinePolicy, RiskPolicy, resolve, resolve_with},
    sheet::{TranslationEntry, load_sheet_files, read_sheet_bucket},
    types::{BucketId, StringEntry},
};
