use std::collections::BTreeSet;

use serde::Serialize;

/// Worksheet names contained in a single workbook. Iteration yields names in
/// ascending, case-sensitive order.
pub type SheetSet = BTreeSet<String>;

/// One worksheet name and its presence flag for every group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceRow {
    pub sheet: String,
    /// Parallel to [`PresenceMatrix::groups`].
    pub present: Vec<bool>,
}

/// Presence of every worksheet name seen in any group, per group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceMatrix {
    pub groups: Vec<String>,
    pub rows: Vec<PresenceRow>,
}

impl PresenceMatrix {
    /// Builds the matrix from `(label, sheets)` pairs given in column order.
    pub fn build(sheet_sets: &[(String, SheetSet)]) -> Self {
        let all_sheets: SheetSet = sheet_sets
            .iter()
            .flat_map(|(_, sheets)| sheets.iter().cloned())
            .collect();

        let rows = all_sheets
            .into_iter()
            .map(|sheet| {
                let present = sheet_sets
                    .iter()
                    .map(|(_, sheets)| sheets.contains(&sheet))
                    .collect();
                PresenceRow { sheet, present }
            })
            .collect();

        Self {
            groups: sheet_sets.iter().map(|(label, _)| label.clone()).collect(),
            rows,
        }
    }

    /// Number of data rows, one per distinct worksheet name.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of table columns including the leading sheet-name column.
    pub fn column_count(&self) -> usize {
        1 + self.groups.len()
    }
}
