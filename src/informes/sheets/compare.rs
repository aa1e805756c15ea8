use tracing::{info, instrument};

use crate::informes::sheets::config::ComparisonConfig;
use crate::informes::sheets::io::excel_read;
use crate::informes::sheets::matrix::{PresenceMatrix, SheetSet};

/// Extracts the worksheet names of every group, sequentially and in
/// definition order. Unreadable or missing reports yield an empty set.
#[instrument(level = "debug", skip_all, fields(group_count = config.groups.len()))]
pub fn collect_sheet_sets(config: &ComparisonConfig) -> Vec<(String, SheetSet)> {
    config
        .groups
        .iter()
        .map(|group| {
            let sheets = excel_read::sheets_or_empty(&group.path);
            (group.label.clone(), sheets)
        })
        .collect()
}

/// Builds the presence matrix for the configured groups.
#[instrument(level = "info", skip_all, fields(group_count = config.groups.len()))]
pub fn compare(config: &ComparisonConfig) -> PresenceMatrix {
    let sheet_sets = collect_sheet_sets(config);
    let matrix = PresenceMatrix::build(&sheet_sets);
    info!(sheet_count = matrix.row_count(), "presence matrix built");
    matrix
}
