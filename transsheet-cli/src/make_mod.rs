use std::path::{Path, PathBuf};

use transsheet::{
    BucketId, FormatType, Glossary, MachinePolicy, TranslateOptions, TranslationCatalog,
    build_mod_records, load_sheet_files, traits::Parser, translate_language_file,
};

use crate::{
    validation::{
        SheetSource, ensure_output_dir, validate_extension, validate_file_path,
        validate_output_path, validate_overwrite, validate_sheet_source,
    },
    walk::collect_csv_files,
};

/// Options of the `mod` command.
#[derive(Debug, Clone, Default)]
pub struct ModArgs {
    pub input: String,
    pub output: String,
    pub sheet: String,
    pub glossary: Option<String>,
    pub mark: String,
    pub reference_id: bool,
    pub mod_csv: bool,
    pub machine: bool,
    pub force_machine: bool,
    pub overwrite: bool,
}

/// Run the mod command: write the translated string file (or MOD CSV).
pub fn run_mod_command(args: &ModArgs) -> Result<(), String> {
    validate_file_path(&args.input).map_err(|e| format!("Input (-i): {}", e))?;
    validate_extension(&args.input, &[FormatType::Json.extension()])
        .map_err(|e| format!("Input (-i): {}", e))?;
    let source = validate_sheet_source(&args.sheet).map_err(|e| format!("Sheet (-s): {}", e))?;
    if let Some(glossary) = &args.glossary {
        validate_file_path(glossary).map_err(|e| format!("Glossary (-g): {}", e))?;
    }
    let output_format = if args.mod_csv {
        FormatType::Csv
    } else {
        FormatType::Json
    };
    validate_extension(&args.output, &[output_format.extension()])
        .map_err(|e| format!("Output (-o): {}", e))?;
    validate_overwrite(&args.output, args.overwrite)?;
    validate_output_path(&args.output)?;

    let glossary = match &args.glossary {
        Some(path) => Glossary::load(path).map_err(|e| format!("Glossary (-g): {}", e))?,
        None => Glossary::new(),
    };

    let sheet_files: Vec<PathBuf> = match source {
        SheetSource::File(path) => vec![PathBuf::from(path)],
        SheetSource::Directory(dir) => collect_csv_files(Path::new(&dir))?,
    };
    if sheet_files.is_empty() {
        tracing::warn!(sheet = %args.sheet, "no sheet files found");
    }

    // Every sheet file belongs to the source file being translated.
    let bucket_id = BucketId::from_path(&args.input).map_err(|e| e.to_string())?;
    let mut sheets = TranslationCatalog::new();
    load_sheet_files(&mut sheets, &sheet_files, &bucket_id, true)
        .map_err(|e| format!("Sheet (-s): {}", e))?;

    let options = TranslateOptions {
        machine: MachinePolicy::new(args.machine, args.mark.as_str(), args.force_machine),
        reference_id: args.reference_id,
    };
    let (translated, report) = translate_language_file(&args.input, &sheets, &glossary, &options)
        .map_err(|e| e.to_string())?;

    ensure_output_dir(&args.output)?;
    let written = match output_format {
        FormatType::Csv => build_mod_records(&report).write_to(&args.output),
        FormatType::Json => translated.write_to(&args.output),
    };
    written.map_err(|e| format!("Error writing {}: {}", args.output, e))?;

    if report.missing_rows > 0 {
        eprintln!(
            "Warning: {} string(s) had no sheet row and kept the source text",
            report.missing_rows
        );
    }
    if report.unresolved_tokens > 0 {
        eprintln!(
            "Warning: {} glossary variable(s) were left untranslated",
            report.unresolved_tokens
        );
    }
    println!(
        "✅ Wrote {} strings to {}",
        report.entries.len(),
        args.output
    );
    Ok(())
}
