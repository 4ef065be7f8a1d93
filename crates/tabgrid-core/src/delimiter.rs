//! Delimiter Strategies
//!
//! Pure text <-> grid codecs for the two on-disk formats:
//!
//! - **Tsv**: tab-separated, no quoting. Cells simply must not contain tabs or
//!   newlines.
//! - **Csv**: RFC-4180-style double-quote quoting. `""` escapes an embedded
//!   quote; a field is quoted on output when it contains the delimiter, a
//!   quote, or a newline.
//!
//! Both accept CRLF and LF on parse; output uses LF. The format is chosen by
//! file extension: `.csv` parses as Csv, anything else as Tsv.

use crate::document::Document;
use std::path::Path;

/// On-disk format of a grid document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Tab-separated values, no quoting.
    Tsv,
    /// Comma-separated values with double-quote quoting.
    Csv,
}

impl Delimiter {
    /// Choose the delimiter for a file path: `.csv` (case-insensitive) maps to
    /// [`Delimiter::Csv`], everything else to [`Delimiter::Tsv`].
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Tsv,
        }
    }

    /// The field separator character.
    pub fn separator(self) -> char {
        match self {
            Self::Tsv => '\t',
            Self::Csv => ',',
        }
    }

    /// Parse `text` into row-major cell values.
    ///
    /// CRLF is normalized to LF first (the same load-time policy a text editor
    /// applies before indexing lines). A trailing final newline does not
    /// produce a phantom empty record.
    pub fn parse(self, text: &str) -> Vec<Vec<String>> {
        let text = text.replace("\r\n", "\n");
        match self {
            Self::Tsv => parse_tsv(&text),
            Self::Csv => parse_csv(&text),
        }
    }

    /// Format the document back to text, LF-terminated lines without a
    /// trailing newline after the last row.
    pub fn format(self, doc: &Document) -> String {
        let mut out = String::new();
        for (i, row) in doc.rows().iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for (c, cell) in row.cells.iter().enumerate() {
                if c > 0 {
                    out.push(self.separator());
                }
                match self {
                    Self::Tsv => out.push_str(&cell.value),
                    Self::Csv => format_csv_field(&mut out, &cell.value),
                }
            }
        }
        out
    }
}

fn parse_tsv(text: &str) -> Vec<Vec<String>> {
    if text.is_empty() {
        return Vec::new();
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n')
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}

fn parse_csv(text: &str) -> Vec<Vec<String>> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(ch),
            }
            continue;
        }
        match ch {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\n' => {
                record.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut record));
            }
            _ => field.push(ch),
        }
    }

    // Final record without a trailing newline.
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        rows.push(record);
    }
    rows
}

fn format_csv_field(out: &mut String, value: &str) {
    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if !needs_quotes {
        out.push_str(value);
        return;
    }
    out.push('"');
    for ch in value.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_path_by_extension() {
        assert_eq!(Delimiter::for_path(Path::new("data.csv")), Delimiter::Csv);
        assert_eq!(Delimiter::for_path(Path::new("data.CSV")), Delimiter::Csv);
        assert_eq!(Delimiter::for_path(Path::new("data.tsv")), Delimiter::Tsv);
        assert_eq!(Delimiter::for_path(Path::new("data.txt")), Delimiter::Tsv);
        assert_eq!(Delimiter::for_path(Path::new("data")), Delimiter::Tsv);
    }

    #[test]
    fn tsv_roundtrip() {
        let rows = Delimiter::Tsv.parse("a\tb\nc\td\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
        let doc = Document::from_rows(rows);
        assert_eq!(Delimiter::Tsv.format(&doc), "a\tb\nc\td");
    }

    #[test]
    fn csv_quoted_fields() {
        let rows = Delimiter::Csv.parse("\"a,b\",\"he said \"\"hi\"\"\"\nplain,x");
        assert_eq!(
            rows,
            vec![vec!["a,b", "he said \"hi\""], vec!["plain", "x"]]
        );
    }

    #[test]
    fn csv_crlf_accepted() {
        let rows = Delimiter::Csv.parse("a,b\r\nc,d\r\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn csv_embedded_newline_in_quotes() {
        let rows = Delimiter::Csv.parse("\"line1\nline2\",x");
        assert_eq!(rows, vec![vec!["line1\nline2", "x"]]);
    }

    #[test]
    fn csv_format_quotes_when_needed() {
        let doc = Document::from_rows(vec![vec!["a,b".into(), "q\"t".into(), "plain".into()]]);
        assert_eq!(Delimiter::Csv.format(&doc), "\"a,b\",\"q\"\"t\",plain");
    }
}
