use std::path::Path;

use transsheet::pipeline::MIN_ROWS_PER_SHEET;

/// Where translation sheets are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSource {
    File(String),
    Directory(String),
}

/// Validate file path exists and is readable
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    if !path_obj.metadata().map(|m| m.is_file()).unwrap_or(false) {
        return Err(format!("Cannot read file: {}", path));
    }

    Ok(())
}

/// Validate a sheet path, which may be a single CSV file or a directory of them
pub fn validate_sheet_source(path: &str) -> Result<SheetSource, String> {
    let path_obj = Path::new(path);

    if path_obj.is_file() {
        Ok(SheetSource::File(path.to_string()))
    } else if path_obj.is_dir() {
        Ok(SheetSource::Directory(path.to_string()))
    } else {
        Err(format!("Sheet file or directory does not exist: {}", path))
    }
}

/// Validate the output directory is a directory if it already exists
pub fn validate_output_path(path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(path).parent() {
        if parent.exists() && !parent.is_dir() {
            return Err(format!(
                "Output directory is not a directory: {}",
                parent.display()
            ));
        }
    }

    Ok(())
}

/// Create the output directory right before writing
pub fn ensure_output_dir(path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Cannot create output directory: {}", e))?;
        }
    }

    Ok(())
}

/// Refuse to replace an existing file unless overwriting was requested
pub fn validate_overwrite(path: &str, overwrite: bool) -> Result<(), String> {
    if !overwrite && Path::new(path).exists() {
        return Err(format!(
            "Output file already exists: {} (use -r to overwrite)",
            path
        ));
    }
    Ok(())
}

/// Validate the file extension against the accepted ones, ignoring case
pub fn validate_extension(path: &str, accepted: &[&str]) -> Result<(), String> {
    let ext = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    if accepted.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(format!(
            "Unsupported file extension: {}. Expected: {}",
            path,
            accepted.join(", ")
        ))
    }
}

/// Validate the split size: 0 disables splitting, otherwise at least the minimum
pub fn validate_rows_per_sheet(rows: usize) -> Result<(), String> {
    if rows != 0 && rows < MIN_ROWS_PER_SHEET {
        return Err(format!(
            "Rows per sheet must be 0 or at least {}, got {}",
            MIN_ROWS_PER_SHEET, rows
        ));
    }
    Ok(())
}
