use std::io::Write;

use crate::informes::sheets::error::Result;
use crate::informes::sheets::matrix::PresenceMatrix;

/// Header of the leading column.
pub const SHEET_NAME_HEADER: &str = "Sheet Name";
pub const PRESENT_MARKER: &str = "✅";
pub const ABSENT_MARKER: &str = "❌";

/// Writes the matrix as a pipe-delimited Markdown table, one line at a time.
pub fn write_markdown<W: Write>(writer: &mut W, matrix: &PresenceMatrix) -> Result<()> {
    let mut header = Vec::with_capacity(matrix.column_count());
    header.push(SHEET_NAME_HEADER);
    header.extend(matrix.groups.iter().map(String::as_str));
    writeln!(writer, "{}", table_line(&header))?;
    writeln!(writer, "|{}", "---|".repeat(header.len()))?;

    for row in &matrix.rows {
        let mut cells = Vec::with_capacity(matrix.column_count());
        cells.push(row.sheet.as_str());
        cells.extend(row.present.iter().map(|&present| {
            if present {
                PRESENT_MARKER
            } else {
                ABSENT_MARKER
            }
        }));
        writeln!(writer, "{}", table_line(&cells))?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the matrix as pretty-printed JSON.
pub fn write_json<W: Write>(writer: &mut W, matrix: &PresenceMatrix) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, matrix)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn table_line(cells: &[&str]) -> String {
    format!("| {} |", cells.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::informes::sheets::matrix::SheetSet;

    fn sheets(names: &[&str]) -> SheetSet {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn render(matrix: &PresenceMatrix) -> String {
        let mut buffer = Vec::new();
        write_markdown(&mut buffer, matrix).expect("table rendered");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn renders_header_separator_and_rows() {
        let matrix = PresenceMatrix::build(&[
            ("Grupo 1".to_string(), sheets(&["A", "B"])),
            ("Grupo 2".to_string(), sheets(&["B"])),
        ]);

        let output = render(&matrix);

        assert_eq!(
            output,
            "| Sheet Name | Grupo 1 | Grupo 2 |\n\
             |---|---|---|\n\
             | A | ✅ | ❌ |\n\
             | B | ✅ | ✅ |\n"
        );
    }

    #[test]
    fn empty_matrix_renders_only_header_and_separator() {
        let matrix = PresenceMatrix::build(&[("R414".to_string(), SheetSet::new())]);

        let output = render(&matrix);

        assert_eq!(output, "| Sheet Name | R414 |\n|---|---|\n");
    }

    #[test]
    fn json_lists_groups_and_flags() {
        let matrix = PresenceMatrix::build(&[("Grupo 3".to_string(), sheets(&["ESF"]))]);
        let mut buffer = Vec::new();
        write_json(&mut buffer, &matrix).expect("json rendered");

        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");
        assert_eq!(
            value,
            serde_json::json!({
                "groups": ["Grupo 3"],
                "rows": [{"sheet": "ESF", "present": [true]}]
            })
        );
    }
}
