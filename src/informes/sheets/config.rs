use std::path::{Path, PathBuf};

/// Directory holding the generated NIIF reports.
pub const REPORTS_ROOT: &str = "/home/ubuntu/informes_niif";

/// A named report file taking part in the comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub label: String,
    pub path: PathBuf,
}

impl Group {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Ordered list of groups compared in a single run. The order of `groups`
/// determines the column order of the rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonConfig {
    pub groups: Vec<Group>,
}

impl ComparisonConfig {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }
}

impl Default for ComparisonConfig {
    /// The four 2024-12-31 reports for entity ID20037.
    fn default() -> Self {
        let root = Path::new(REPORTS_ROOT);
        Self::new(vec![
            Group::new(
                "Grupo 1",
                root.join("Grupo 1/Grupo1_Individual_Directo_ID20037_2024-12-31.xlsx"),
            ),
            Group::new(
                "Grupo 2",
                root.join("Grupo 2/Grupo2_Individual_Indirecto_ID20037_2024-12-31.xlsx"),
            ),
            Group::new("Grupo 3", root.join("Grupo 3/Grupo3_ID20037_2024-12-31.xlsx")),
            Group::new("R414", root.join("R414/R414Ind_ID20037_2024-12-31.xlsx")),
        ])
    }
}
