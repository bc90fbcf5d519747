use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::flatten::{cell_to_string, Table};

#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    NothingToExport,
}

/// Writes `table` as CSV to `path`, replacing any existing file.
/// An empty table writes nothing.
pub fn export_csv(table: &Table, path: &Path) -> Result<ExportOutcome> {
    if table.is_empty() {
        info!("Nothing to export to {}", path.display());
        return Ok(ExportOutcome::NothingToExport);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    wtr.write_record(&table.columns)?;
    for row in &table.rows {
        wtr.write_record(row.iter().map(cell_to_string))?;
    }
    wtr.flush()?;

    debug!("Wrote {} rows to {}", table.len(), path.display());
    Ok(ExportOutcome::Written {
        path: path.to_path_buf(),
        rows: table.len(),
    })
}

// ============================================================================
// Tests
// ============================================================================
