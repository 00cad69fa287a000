//! Plain-text table rendering.

use crate::error::ConfigError;
use std::fmt::Write as _;
use std::str::FromStr;

/// Layout used when rendering a [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// Boxed with `+`/`-`/`|` borders, cells centred.
    #[default]
    Pretty,
    /// Pipe-delimited rows under a dashed separator, cells left-aligned.
    Github,
}

impl FromStr for TableStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "github" => Ok(Self::Github),
            _ => Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_TABLE_STYLE".to_string(),
                reason: format!("Must be one of: pretty, github, got: {}", s),
            }),
        }
    }
}

/// A header row plus data rows.
///
/// Rows shorter than the header are padded with empty cells; extra cells are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = row.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table. The result has no trailing newline.
    pub fn render(&self, style: TableStyle) -> String {
        let widths = self.column_widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        match style {
            TableStyle::Pretty => {
                let border = border_line(&widths);
                lines.push(border.clone());
                lines.push(row_line(&self.headers, &widths, center));
                lines.push(border.clone());
                if !self.rows.is_empty() {
                    for row in &self.rows {
                        lines.push(row_line(row, &widths, center));
                    }
                    lines.push(border);
                }
            }
            TableStyle::Github => {
                lines.push(row_line(&self.headers, &widths, left));
                let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
                lines.push(format!("|{}|", dashes.join("|")));
                for row in &self.rows {
                    lines.push(row_line(row, &widths, left));
                }
            }
        }

        lines.join("\n")
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| display_width(&row[i]))
                    .chain(std::iter::once(display_width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn display_width(cell: &str) -> usize {
    cell.chars().count()
}

fn border_line(widths: &[usize]) -> String {
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", dashes.join("+"))
}

fn row_line(cells: &[String], widths: &[usize], align: fn(&str, usize) -> String) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        // Writing to a String cannot fail
        let _ = write!(line, " {} |", align(cell, *width));
    }
    line
}

fn left(cell: &str, width: usize) -> String {
    let pad = width - display_width(cell);
    format!("{}{}", cell, " ".repeat(pad))
}

// Odd padding goes to the right
fn center(cell: &str, width: usize) -> String {
    let pad = width - display_width(cell);
    let before = pad / 2;
    format!("{}{}{}", " ".repeat(before), cell, " ".repeat(pad - before))
}
