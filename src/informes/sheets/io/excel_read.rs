use std::path::Path;

use calamine::{Reader, Xlsx, open_workbook};
use tracing::{debug, warn};

use crate::informes::sheets::error::{Result, ToolError};
use crate::informes::sheets::matrix::SheetSet;

/// Reads the worksheet names of the workbook stored at `path`.
///
/// Only the workbook metadata is parsed; no worksheet cells are loaded. The
/// workbook handle is closed before the names are returned.
pub fn read_sheet_names(path: &Path) -> Result<SheetSet> {
    if !path.exists() {
        return Err(ToolError::MissingInput(path.to_path_buf()));
    }

    let workbook: Xlsx<_> = open_workbook(path).map_err(|source| ToolError::WorkbookRead {
        path: path.to_path_buf(),
        source,
    })?;
    let names: SheetSet = workbook
        .sheet_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    drop(workbook);

    Ok(names)
}

/// Reads the worksheet names at `path`, treating any failure as an empty
/// workbook. Missing files are silent; unreadable ones emit a warning.
pub fn sheets_or_empty(path: &Path) -> SheetSet {
    match read_sheet_names(path) {
        Ok(names) => {
            debug!(path = %path.display(), sheet_count = names.len(), "read worksheet names");
            names
        }
        Err(ToolError::MissingInput(_)) => {
            debug!(path = %path.display(), "report not found, assuming no sheets");
            SheetSet::new()
        }
        Err(error) => {
            warn!(path = %path.display(), "{error}");
            SheetSet::new()
        }
    }
}
