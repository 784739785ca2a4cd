use std::path::Path;

use transsheet::{
    FormatType, MachineCatalog, SheetLayout, SheetOptions, StringCatalog, build_sheet_records,
    formats::language::read_bucket,
    pipeline::sheet_paths,
};

use crate::validation::{
    ensure_output_dir, validate_extension, validate_file_path, validate_output_path,
    validate_overwrite, validate_rows_per_sheet,
};

/// Options of the `sheet` command.
#[derive(Debug, Clone, Default)]
pub struct SheetArgs {
    pub input: String,
    pub sheet: String,
    pub fan: Option<String>,
    pub umm: Option<String>,
    pub rows_per_sheet: usize,
    pub tag_controls: bool,
    pub compare: bool,
    pub overwrite: bool,
}

/// Run the sheet command: build a translation sheet from a source string file.
pub fn run_sheet_command(args: &SheetArgs) -> Result<(), String> {
    validate_file_path(&args.input).map_err(|e| format!("Input (-i): {}", e))?;
    validate_extension(&args.input, &[FormatType::Json.extension()])
        .map_err(|e| format!("Input (-i): {}", e))?;
    if let Some(fan) = &args.fan {
        validate_file_path(fan).map_err(|e| format!("Fan translation (-f): {}", e))?;
    }
    if let Some(umm) = &args.umm {
        validate_file_path(umm).map_err(|e| format!("Machine translation (-u): {}", e))?;
    }
    validate_extension(&args.sheet, &[FormatType::Csv.extension()])
        .map_err(|e| format!("Sheet (-s): {}", e))?;
    validate_rows_per_sheet(args.rows_per_sheet)?;

    let mut strings = StringCatalog::new();
    strings
        .add_bucket(read_bucket(&args.input).map_err(|e| e.to_string())?)
        .map_err(|e| e.to_string())?;

    let fan = match &args.fan {
        Some(path) => {
            let mut catalog = StringCatalog::new();
            catalog
                .add_bucket(read_bucket(path).map_err(|e| e.to_string())?)
                .map_err(|e| e.to_string())?;
            Some(catalog)
        }
        None => None,
    };

    let machine = match &args.umm {
        Some(path) => Some(MachineCatalog::load(path).map_err(|e| e.to_string())?),
        None => None,
    };

    let records = build_sheet_records(
        &strings,
        fan.as_ref(),
        machine.as_ref(),
        args.tag_controls,
    );

    let sheet_path = Path::new(&args.sheet);
    for path in sheet_paths(sheet_path, records.len(), args.rows_per_sheet) {
        let path = path.to_string_lossy();
        validate_overwrite(&path, args.overwrite)?;
        validate_output_path(&path)?;
    }

    let options = SheetOptions {
        tag_controls: args.tag_controls,
        rows_per_sheet: args.rows_per_sheet,
        layout: if args.compare {
            SheetLayout::Compare
        } else {
            SheetLayout::Full
        },
    };
    ensure_output_dir(&args.sheet)?;
    let written = transsheet::write_sheet(&records, sheet_path, &options)
        .map_err(|e| format!("Error writing sheet: {}", e))?;

    for path in &written {
        tracing::info!(path = %path.display(), "sheet written");
    }
    println!(
        "✅ Wrote {} rows to {} file(s)",
        records.len(),
        written.len()
    );
    Ok(())
}
