//! Built-in renderers for the flattened type table.
//!
//! A [`TypeTable`](crate::TypeTable) already carries all layout decisions
//! (row order, spans, indent levels), so rendering is pure string assembly.
//! Two targets are provided:
//!
//! - [`to_html`]: an HTML `<table>` with the Key/Type/Description header,
//!   indent cells, and colspans. The markup is self-contained and pastes
//!   cleanly into WYSIWYG editors.
//! - [`to_text`]: a column-aligned plain-text table for terminals and logs.
//!
//! ## Examples
//!
//! ```rust
//! use typetable::{table_from_str, to_text};
//!
//! let table = table_from_str(r#"{"user": {"id": 1}}"#).unwrap();
//! let text = to_text(&table);
//! assert!(text.contains("Object"));
//! assert!(text.contains("number"));
//! ```

use crate::{DisplayRow, RenderOptions, TypeTable};

/// Renders the table as compact HTML markup.
///
/// The header row has three logical columns: "Key" (spanning the table's
/// full key width), "Type", and "Description" (empty, reserved for future
/// annotation). Each data row carries its indent cells and colspan, plus a
/// `data-key` attribute holding the row's stable key.
///
/// # Examples
///
/// ```rust
/// use typetable::{table_from_str, to_html};
///
/// let table = table_from_str(r#"{"a": 1}"#).unwrap();
/// let html = to_html(&table);
/// assert!(html.starts_with("<table>"));
/// assert!(html.contains("<th>Key</th>"));
/// ```
#[must_use]
pub fn to_html(table: &TypeTable) -> String {
    to_html_with_options(table, &RenderOptions::new())
}

/// Renders the table as HTML markup with custom options.
#[must_use]
pub fn to_html_with_options(table: &TypeTable, options: &RenderOptions) -> String {
    let mut w = MarkupWriter::new(options);

    w.open("<table>");
    w.open("<thead>");
    w.open("<tr>");
    w.line(&format!("{}Key</th>", th_open(table.width())));
    w.line("<th>Type</th>");
    w.line("<th>Description</th>");
    w.close("</tr>");
    w.close("</thead>");
    w.open("<tbody>");
    for row in table.rows() {
        write_row(&mut w, row);
    }
    w.close("</tbody>");
    w.close("</table>");
    w.finish()
}

/// Renders the table as column-aligned plain text.
///
/// Nested rows are indented by `level * indent` spaces under the Key column,
/// and the Type column starts at the same offset for every row. The empty
/// Description column is omitted in text output.
#[must_use]
pub fn to_text(table: &TypeTable) -> String {
    to_text_with_options(table, &RenderOptions::new())
}

/// Renders the table as plain text with custom options.
#[must_use]
pub fn to_text_with_options(table: &TypeTable, options: &RenderOptions) -> String {
    let indent = options.indent;
    let key_width = table
        .rows()
        .iter()
        .map(|row| row.level * indent + row.name.chars().count())
        .chain(std::iter::once("Key".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:<width$}  Type\n", "Key", width = key_width));
    for row in table.rows() {
        let padding = " ".repeat(row.level * indent);
        out.push_str(&format!(
            "{:<width$}  {}\n",
            format!("{}{}", padding, row.name),
            row.value_type,
            width = key_width
        ));
    }
    out
}

fn write_row(w: &mut MarkupWriter, row: &DisplayRow) {
    w.open("<tr>");
    for _ in 0..row.level {
        w.line("<td></td>");
    }
    let colspan = if row.span > 1 {
        format!(r#" colspan="{}""#, row.span)
    } else {
        String::new()
    };
    w.line(&format!(
        r#"<td{} data-key="{}">{}</td>"#,
        colspan,
        escape(&row.key()),
        escape(&row.name)
    ));
    w.line(&format!("<td>{}</td>", escape(&row.value_type)));
    w.line("<td></td>");
    w.close("</tr>");
}

fn th_open(width: usize) -> String {
    if width > 1 {
        format!(r#"<th colspan="{}">"#, width)
    } else {
        "<th>".to_string()
    }
}

/// Escapes text for safe embedding in HTML element content and attributes.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Accumulates markup either on one line or indented, per options.
struct MarkupWriter {
    out: String,
    pretty: bool,
    indent: usize,
    depth: usize,
}

impl MarkupWriter {
    fn new(options: &RenderOptions) -> Self {
        MarkupWriter {
            out: String::new(),
            pretty: options.pretty,
            indent: options.indent,
            depth: 0,
        }
    }

    fn line(&mut self, s: &str) {
        if self.pretty {
            self.out.push_str(&" ".repeat(self.depth * self.indent));
            self.out.push_str(s);
            self.out.push('\n');
        } else {
            self.out.push_str(s);
        }
    }

    fn open(&mut self, tag: &str) {
        self.line(tag);
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(tag);
    }

    fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{infer, sample};

    fn table_of(value: &crate::JsonValue) -> TypeTable {
        infer(value).unwrap().flatten()
    }

    #[test]
    fn test_html_header_spans_key_width() {
        let table = table_of(&sample!({"a": {"b": 1}}));
        let html = to_html(&table);
        assert!(html.contains(r#"<th colspan="2">Key</th>"#));
        assert!(html.contains("<th>Type</th>"));
        assert!(html.contains("<th>Description</th>"));
    }

    #[test]
    fn test_html_flat_table_omits_colspan() {
        let table = table_of(&sample!({"a": 1}));
        let html = to_html(&table);
        assert!(html.contains("<th>Key</th>"));
        assert!(!html.contains("colspan"));
    }

    #[test]
    fn test_html_nested_row_has_indent_cell_and_colspan() {
        let table = table_of(&sample!({"a": {"b": 2}}));
        let html = to_html(&table);
        assert!(html.contains(r#"<td colspan="2" data-key="row-a">a</td>"#));
        assert!(html.contains(r#"<td></td><td data-key="row-a-b-1">b</td>"#));
    }

    #[test]
    fn test_html_escapes_names() {
        let table = table_of(&sample!({"<script>": 1}));
        let html = to_html(&table);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_pretty_html_is_indented() {
        let table = table_of(&sample!({"a": 1}));
        let pretty = to_html_with_options(&table, &RenderOptions::pretty());
        assert!(pretty.contains("\n  <thead>"));

        let compact = to_html(&table);
        assert!(!compact.contains('\n'));
    }

    #[test]
    fn test_empty_table_renders_header_only() {
        let table = table_of(&sample!({}));
        let html = to_html(&table);
        assert!(html.contains("<tbody></tbody>"));

        let text = to_text(&table);
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_text_alignment() {
        let table = table_of(&sample!({"a": {"longer_name": 1}, "b": true}));
        let text = to_text(&table);
        let lines: Vec<_> = text.lines().collect();

        // Type column starts at the same offset on every line.
        let offsets: Vec<_> = lines
            .iter()
            .map(|l| l.trim_end().rfind("  ").unwrap())
            .collect();
        assert!(offsets.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_text_indents_nested_rows() {
        let table = table_of(&sample!({"a": {"b": 1}}));
        let text = to_text_with_options(&table, &RenderOptions::new().with_indent(4));
        assert!(text.lines().any(|l| l.starts_with("    b")));
    }
}
