use std::fs;
use std::path::Path;

use tracing::debug;

use crate::catalog::entry::PoEntry;
use crate::error::Result;

/// Serialize a header block and entries to a catalog file.
///
/// Entries are separated by one synthetic blank line. Because the parser
/// leaves the blank line preceding each record at the tail of the previous
/// entry's raw buffer, writing back a freshly parsed catalog reproduces
/// the input byte for byte.
pub fn write_po_file(path: &Path, header_lines: &[String], entries: &[PoEntry]) -> Result<()> {
    let mut output = String::new();

    for line in header_lines {
        output.push_str(line);
        output.push('\n');
    }

    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        let text = entry.to_string();
        output.push_str(&text);
        if !text.ends_with('\n') {
            output.push('\n');
        }
    }

    fs::write(path, &output)?;
    debug!("wrote {} entries to {}", entries.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn entry(lines: &[&str]) -> PoEntry {
        PoEntry {
            raw_lines: lines.iter().map(|l| l.to_string()).collect(),
            ..PoEntry::default()
        }
    }

    #[test]
    fn test_writes_header_then_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.po");
        let header = vec!["# comment".to_string()];
        let entries = vec![
            entry(&["msgid \"a\"", "msgstr \"A\""]),
            entry(&["msgid \"b\"", "msgstr \"B\""]),
        ];

        write_po_file(&path, &header, &entries).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "# comment\nmsgid \"a\"\nmsgstr \"A\"\n\nmsgid \"b\"\nmsgstr \"B\"\n"
        );
    }

    #[test]
    fn test_no_double_newline_when_entry_ends_blank() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.po");
        let entries = vec![
            entry(&["msgid \"a\"", "msgstr \"A\"", ""]),
            entry(&["msgid \"b\"", "msgstr \"B\""]),
        ];

        write_po_file(&path, &[], &entries).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "msgid \"a\"\nmsgstr \"A\"\n\nmsgid \"b\"\nmsgstr \"B\"\n");
    }

    #[test]
    fn test_header_only_catalog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.po");
        let header = vec!["# only a header".to_string()];

        write_po_file(&path, &header, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# only a header\n");
    }

    #[test]
    fn test_unwritable_target_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.po");

        let err = write_po_file(&path, &[], &[]).unwrap_err();
        assert!(matches!(err, crate::SplitpoError::Io(_)));
    }
}
