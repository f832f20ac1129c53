//! Rendered Output
//!
//! What a view produces for a given fetch state, plus its HTML and plain
//! text serializations. HTML comes from the askama templates under
//! `templates/`, which escape every cell.

use askama::Template;

/// A titled table of string cells
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(title: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            title: title.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }
        widths
    }

    fn text_line(cells: &[String], widths: &[usize]) -> String {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ");
        line.trim_end().to_string()
    }

    /// Plain text table with a dashed separator under the header
    pub fn to_text(&self) -> String {
        let widths = self.column_widths();
        let total = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);

        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&Self::text_line(&self.headers, &widths));
        out.push('\n');
        out.push_str(&"-".repeat(total));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&Self::text_line(row, &widths));
            out.push('\n');
        }
        out
    }

    pub fn to_html(&self) -> String {
        TableTemplate { table: self }.render().unwrap_or_default()
    }
}

#[derive(Template)]
#[template(path = "table.html")]
struct TableTemplate<'a> {
    table: &'a Table,
}

#[derive(Template)]
#[template(path = "message.html")]
struct MessageTemplate<'a> {
    message: &'a str,
}

/// Output of a view for one fetch state
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Placeholder while idle or loading
    Loading,
    /// Failure message, shown as plain text
    Error(String),
    Table(Table),
}

pub const LOADING_TEXT: &str = "Loading...";

impl Rendered {
    pub fn table(&self) -> Option<&Table> {
        match self {
            Rendered::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            Rendered::Loading => format!("{}\n", LOADING_TEXT),
            Rendered::Error(msg) => format!("{}\n", msg),
            Rendered::Table(table) => table.to_text(),
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            Rendered::Loading => MessageTemplate {
                message: LOADING_TEXT,
            }
            .render()
            .unwrap_or_default(),
            Rendered::Error(msg) => MessageTemplate { message: msg }.render().unwrap_or_default(),
            Rendered::Table(table) => table.to_html(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new("Prices", &["Name", "Price"]);
        table.push_row(vec!["Riverside".to_string(), "250000".to_string()]);
        table.push_row(vec!["Elm".to_string(), "9".to_string()]);
        table
    }

    #[test]
    fn test_text_layout() {
        let text = sample().to_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Prices");
        assert_eq!(lines[1], "Name      | Price");
        assert_eq!(lines[2], "-".repeat(18));
        assert_eq!(lines[3], "Riverside | 250000");
        assert_eq!(lines[4], "Elm       | 9");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_html_escapes_cells() {
        let mut table = Table::new("A & B", &["<col>"]);
        table.push_row(vec!["\"quoted\"".to_string()]);
        let html = table.to_html();

        assert!(html.contains("<h2>A &amp; B</h2>"));
        assert!(html.contains("<th>&lt;col&gt;</th>"));
        assert!(html.contains("<td>&quot;quoted&quot;</td>"));
    }

    #[test]
    fn test_html_rows_in_order() {
        let html = sample().to_html();

        let riverside = html.find("<tr><td>Riverside</td><td>250000</td></tr>").unwrap();
        let elm = html.find("<tr><td>Elm</td><td>9</td></tr>").unwrap();
        assert!(riverside < elm);
        assert!(html.contains("<tr><th>Name</th><th>Price</th></tr>"));
    }

    #[test]
    fn test_loading_placeholder_html() {
        let html = Rendered::Loading.to_html();
        assert!(html.starts_with("<p>Loading...</p>"));
    }

    #[test]
    fn test_error_has_no_table() {
        let rendered = Rendered::Error("<down>".to_string());
        assert!(rendered.table().is_none());
        assert!(rendered.to_html().starts_with("<p>&lt;down&gt;</p>"));
        assert_eq!(rendered.to_text(), "<down>\n");
    }
}
