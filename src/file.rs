// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::{to_export_string, to_text};
use crate::data::ScheduleDay;

/// Render days in the format named by `export` (csv/tsv rows or text listing).
pub fn render(export: &ExportOptions, days: &[ScheduleDay]) -> String {
    match export.format.delim() {
        Some(sep) => to_export_string(days, export.include_headers, sep),
        None => to_text(days),
    }
}

/// Write a single export file based on ExportOptions.
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    days: &[ScheduleDay],
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, render(export, days))?;
    logf!("Export: {} days → {}", days.len(), path.display());
    Ok(path)
}

/// Read a saved schedule page from disk.
pub fn read_page(path: &Path) -> Result<Vec<u8>, Box<dyn Error>> {
    fs::read(path).map_err(|e| format!("{}: {}", path.display(), e).into())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
