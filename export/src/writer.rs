//! CSV output.
//!
//! Every field is trimmed. Non-empty fields, header included, are wrapped in
//! double quotes with inner quotes doubled; empty fields are written as
//! nothing. Fields are joined by the configured delimiter, which may be any
//! non-empty string. Rows end in CRLF.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::ExportError;
use crate::record::CsvRecord;

const TERMINATOR: &str = "\r\n";

/// Trim, then quote unless empty.
pub fn quote_field(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    format!("\"{}\"", trimmed.replace('"', "\"\""))
}

fn write_row<W, I, S>(out: &mut W, fields: I, delimiter: &str) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.write_all(delimiter.as_bytes())?;
        }
        out.write_all(quote_field(field.as_ref()).as_bytes())?;
    }
    out.write_all(TERMINATOR.as_bytes())
}

/// Write the header and one row per record to `out`.
pub fn write_records<W: Write, R: CsvRecord>(
    mut out: W,
    records: &[R],
    delimiter: &str,
) -> io::Result<()> {
    write_row(&mut out, R::HEADER, delimiter)?;
    for record in records {
        write_row(&mut out, record.fields(), delimiter)?;
    }
    out.flush()
}

/// Create or truncate `path` and write `records` into it. The file is
/// closed on return, also after a failed row.
///
/// No lock is taken: a concurrent writer or reader of the same path sees a
/// partly written file.
pub fn write_file<R: CsvRecord>(
    path: &Path,
    records: &[R],
    delimiter: &str,
) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    write_records(BufWriter::new(file), records, delimiter).map_err(|e| ExportError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, &'static str);

    impl CsvRecord for Row {
        const HEADER: &'static [&'static str] = &["Code", "Label"];

        fn fields(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    fn render(records: &[Row], delimiter: &str) -> String {
        let mut out = Vec::new();
        write_records(&mut out, records, delimiter).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_field_is_neither_quoted_nor_replaced() {
        assert_eq!(quote_field(""), "");
        assert_eq!(quote_field("   "), "");
    }

    #[test]
    fn non_empty_field_is_trimmed_and_quoted() {
        assert_eq!(quote_field("  Kerkstraat 1 "), "\"Kerkstraat 1\"");
    }

    #[test]
    fn inner_quotes_are_doubled() {
        assert_eq!(quote_field("Jef \"de smid\""), "\"Jef \"\"de smid\"\"\"");
    }

    #[test]
    fn field_containing_delimiter_stays_one_field() {
        let text = render(&[Row("A;B", "")], ";");
        assert_eq!(text, "\"Code\";\"Label\"\r\n\"A;B\";\r\n");
    }

    #[test]
    fn header_only_when_no_records() {
        assert_eq!(render(&[], ","), "\"Code\",\"Label\"\r\n");
    }

    #[test]
    fn configured_delimiter_is_used() {
        let text = render(&[Row("1", "x")], "\t");
        assert_eq!(text, "\"Code\"\t\"Label\"\r\n\"1\"\t\"x\"\r\n");
    }

    #[test]
    fn multi_character_delimiter_is_written_verbatim() {
        let text = render(&[Row("1", "a||b")], "||");
        assert_eq!(text, "\"Code\"||\"Label\"\r\n\"1\"||\"a||b\"\r\n");
        let text = render(&[Row("", "x")], "; ");
        assert_eq!(text, "\"Code\"; \"Label\"\r\n; \"x\"\r\n");
    }

    #[test]
    fn write_file_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale content that is longer than the new file").unwrap();
        write_file(&path, &[Row("1", "x")], ";").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "\"Code\";\"Label\"\r\n\"1\";\"x\"\r\n"
        );
    }

    #[test]
    fn write_file_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let err = write_file(&path, &[Row("1", "x")], ";").unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
