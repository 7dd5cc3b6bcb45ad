//! Help table rendering.

use fair_moves_core::OutcomeMatrix;

/// Top-left cell: rows are the computer's move, columns the player's
pub const CORNER_LABEL: &str = "v PC/User >";

/// Bordered table of the player's outcome for every pairing
pub fn render_help(matrix: &OutcomeMatrix) -> String {
    let size = matrix.size();
    let mut rows: Vec<Vec<&str>> = Vec::with_capacity(size + 1);

    let mut header = vec![CORNER_LABEL];
    header.extend(matrix.labels().iter().map(String::as_str));
    rows.push(header);

    for (pc, label) in matrix.labels().iter().enumerate() {
        let mut row = vec![label.as_str()];
        row.extend((0..size).map(|user| matrix.outcome(user, pc).as_str()));
        rows.push(row);
    }

    let widths: Vec<usize> = (0..=size)
        .map(|col| rows.iter().map(|r| r[col].chars().count()).max().unwrap_or(0))
        .collect();
    let border = border_line(&widths);

    let mut out = String::new();
    out.push_str(&border);
    for row in &rows {
        out.push('\n');
        out.push_str(&format_row(row, &widths));
        out.push('\n');
        out.push_str(&border);
    }
    out.push('\n');
    out
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn format_row(cells: &[&str], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!(" {:<width$} |", cell, width = *width));
    }
    line
}
