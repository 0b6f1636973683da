//! Table rendering utilities for CLI outputs.

use crate::utils::colors::{BOLD, RESET, paint};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
    /// Wrap long values onto continuation lines instead of overflowing.
    pub wrap: bool,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            wrap: false,
        }
    }

    pub fn wrapped(header: &str, width: usize) -> Self {
        Self {
            wrap: true,
            ..Self::new(header, width)
        }
    }
}

/// A cell value plus the ANSI color used when coloring is on.
pub struct Cell {
    pub text: String,
    pub color: &'static str,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: RESET,
        }
    }

    pub fn colored(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn render(&self, color: bool) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| pad(&c.header, c.width))
            .collect();
        let header = header.join(" ");
        if color {
            out.push_str(&format!("{BOLD}{}{RESET}", header.trim_end()));
        } else {
            out.push_str(header.trim_end());
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<Vec<String>> = self
                .columns
                .iter()
                .zip(row)
                .map(|(col, cell)| cell_lines(col, &cell.text))
                .collect();
            let height = cells.iter().map(Vec::len).max().unwrap_or(1);

            for line in 0..height {
                let mut parts = Vec::with_capacity(self.columns.len());
                for ((col, cell), lines) in self.columns.iter().zip(row).zip(&cells) {
                    let text = lines.get(line).map(String::as_str).unwrap_or("");
                    parts.push(paint(&pad(text, col.width), cell.color, color));
                }
                out.push_str(parts.join(" ").trim_end());
                out.push('\n');
            }
        }

        out
    }
}

fn cell_lines(col: &Column, text: &str) -> Vec<String> {
    if col.wrap && text.width() > col.width {
        textwrap::wrap(text, col.width)
            .into_iter()
            .map(|l| l.into_owned())
            .collect()
    } else {
        vec![text.to_string()]
    }
}

/// Left-align `s` in `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}
