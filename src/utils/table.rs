//! Table rendering for CLI output. Columns size themselves to their widest
//! cell (display width, so emoji and accented labels line up).

use crate::models::row_set::{RowSet, value_to_string};
use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn from_row_set(rows: &RowSet) -> Self {
        let mut table = Self::new(rows.columns().to_vec());
        for row in rows.rows() {
            table.add_row(row.values().iter().map(value_to_string).collect());
        }
        table
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        push_line(&mut out, &self.headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }

        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{}{}", cell, " ".repeat(w.saturating_sub(cell.width()))))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}
