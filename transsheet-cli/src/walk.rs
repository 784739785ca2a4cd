use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Collect every `.csv` file under `root`, recursively, in sorted order.
///
/// Hidden and ignored files are included: a sheet folder is a plain data
/// directory, not a source tree.
pub fn collect_csv_files(root: &Path) -> Result<Vec<PathBuf>, String> {
    let walker = WalkBuilder::new(root).standard_filters(false).build();

    let mut out = Vec::new();
    for dent in walker {
        let dent = dent.map_err(|e| format!("Cannot read {}: {}", root.display(), e))?;
        let is_file = dent.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        let is_csv = dent
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            out.push(dent.into_path());
        }
    }

    out.sort();
    Ok(out)
}
