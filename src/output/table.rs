// src/output/table.rs
use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

/// Terminal columns taken by `cell`; wide glyphs count as two.
fn width(cell: &str) -> usize {
    UnicodeWidthStr::width(cell)
}

fn rule(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            line.push(mid);
        }
        line.push_str(&"─".repeat(w + 2));
    }
    line.push(right);
    line
}

fn row_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let mut line = String::from("│");
    for (cell, w) in cells.iter().zip(widths) {
        let cell = cell.as_ref();
        let _ = write!(line, " {}{} │", cell, " ".repeat(w - width(cell)));
    }
    line
}

/// Renders a box-drawn table. Column widths fit the widest cell.
pub fn render_table<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| width(h)).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(width(cell.as_ref()));
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(rule(&widths, '┌', '┬', '┐'));
    lines.push(row_line(headers, &widths));
    lines.push(rule(&widths, '├', '┼', '┤'));
    for row in rows {
        lines.push(row_line(row, &widths));
    }
    lines.push(rule(&widths, '└', '┴', '┘'));
    lines.join("\n")
}
