//! Tables.
//!
//! The UI does not lay tables out itself. It hands a [`Table`] and the locked
//! normal-output sink to a [`TableRender`] and lets it write. [`PlainTable`] is
//! the default: space-separated, left-aligned columns with no borders.

use std::fmt::Debug;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Headers plus row data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    /// Column headers. May be empty.
    pub headers: Vec<String>,
    /// Row cells. Rows may be shorter or longer than the header list.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given headers and no rows.
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

    /// Appends a row.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }
}

/// Writes a [`Table`] to a sink.
pub trait TableRender: Send + Sync + Debug {
    /// Renders `table` into `w`.
    fn render(&self, w: &mut dyn Write, table: &Table) -> io::Result<()>;
}

/// Borderless, left-aligned table layout.
///
/// ```text
/// NAME  STATUS   COUNT
/// web   running  3
/// db    pending  1
/// ```
#[derive(Clone, Debug)]
pub struct PlainTable {
    separator: String,
}

impl Default for PlainTable {
    fn default() -> Self {
        Self {
            separator: "  ".to_string(),
        }
    }
}

impl PlainTable {
    /// Creates the default layout (two-space column gap).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text placed between columns.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    fn column_widths(table: &Table) -> Vec<usize> {
        let columns = table
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(table.headers.len()))
            .max()
            .unwrap_or(0);

        let mut widths = vec![0; columns];
        for row in std::iter::once(&table.headers).chain(&table.rows) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }
        widths
    }

    fn format_row(&self, cells: &[String], widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push_str(&self.separator);
            }
            line.push_str(cell);
            let pad = widths[i].saturating_sub(cell.width());
            line.extend(std::iter::repeat(' ').take(pad));
        }
        line.trim_end().to_string()
    }
}

impl TableRender for PlainTable {
    fn render(&self, w: &mut dyn Write, table: &Table) -> io::Result<()> {
        let widths = Self::column_widths(table);
        if !table.headers.is_empty() {
            writeln!(w, "{}", self.format_row(&table.headers, &widths))?;
        }
        for row in &table.rows {
            writeln!(w, "{}", self.format_row(row, &widths))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &Table) -> String {
        let mut buf = Vec::new();
        PlainTable::new().render(&mut buf, table).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_columns_aligned() {
        let table = Table::new(["NAME", "STATUS", "COUNT"])
            .row(["web", "running", "3"])
            .row(["db", "pending", "1"]);
        assert_eq!(
            render(&table),
            "NAME  STATUS   COUNT\nweb   running  3\ndb    pending  1\n"
        );
    }

    #[test]
    fn test_no_headers() {
        let table = Table::default().row(["a", "bb"]).row(["ccc", "d"]);
        assert_eq!(render(&table), "a    bb\nccc  d\n");
    }

    #[test]
    fn test_ragged_rows() {
        let table = Table::new(["A"]).row(["x", "extra"]);
        assert_eq!(render(&table), "A\nx  extra\n");
    }

    #[test]
    fn test_custom_separator() {
        let table = Table::new(["a", "b"]);
        let mut buf = Vec::new();
        PlainTable::new()
            .separator(" | ")
            .render(&mut buf, &table)
            .unwrap();
        assert_eq!(buf, b"a | b\n");
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        assert_eq!(render(&Table::default()), "");
    }
}
