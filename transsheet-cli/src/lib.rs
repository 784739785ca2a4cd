//! CLI library for testing purposes

pub mod make_mod;
pub mod make_sheet;
pub mod validation;
pub mod walk;

pub use make_mod::{ModArgs, run_mod_command};
pub use make_sheet::{SheetArgs, run_sheet_command};
