use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::catalog::entry::PoEntry;
use crate::error::{Result, SplitpoError};

const MSGID: &str = "msgid ";
const MSGSTR: &str = "msgstr ";
const MSGCTXT: &str = "msgctxt ";

/// Scanner position: before the first record, or inside one.
enum ScanState {
    Header,
    InEntry,
}

/// Parse a catalog file into its header lines and ordered entries.
///
/// The scan is a single forward pass over the file's lines. Everything up
/// to the first `msgid` line is header; from there on, each `msgid` line
/// finalizes the open entry and starts the next one, and every line in
/// between (field lines, continuations, comments, blanks) is appended to
/// the open entry's raw buffer unmodified. No line is ever dropped or
/// duplicated, so re-serializing the result reproduces the input.
pub fn parse_po_file(path: &Path) -> Result<(Vec<String>, Vec<PoEntry>)> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SplitpoError::FileNotFound(path.to_path_buf()),
        _ => SplitpoError::Io(e),
    })?;
    let content = String::from_utf8(bytes).map_err(|source| SplitpoError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let mut header_lines = Vec::new();
    let mut entries: Vec<PoEntry> = Vec::new();
    let mut current: Option<PoEntry> = None;
    let mut state = ScanState::Header;

    for line in content.split('\n') {
        let trimmed = line.trim();

        if let ScanState::Header = state {
            if !trimmed.starts_with(MSGID) {
                header_lines.push(line.to_string());
                continue;
            }
            state = ScanState::InEntry;
        }

        if trimmed.starts_with(MSGID) {
            if let Some(entry) = current.take() {
                entries.push(entry);
            }
            current = Some(PoEntry::default());
        }

        if let Some(entry) = current.as_mut() {
            entry.raw_lines.push(line.to_string());

            if let Some(rest) = trimmed.strip_prefix(MSGID) {
                entry.msgid = strip_quotes(rest).to_string();
            } else if let Some(rest) = trimmed.strip_prefix(MSGSTR) {
                entry.msgstr = strip_quotes(rest).to_string();
            } else if let Some(rest) = trimmed.strip_prefix(MSGCTXT) {
                entry.msgctxt = strip_quotes(rest).to_string();
            }
        }
    }

    if let Some(entry) = current.take() {
        entries.push(entry);
    }

    debug!(
        "parsed {}: {} header lines, {} entries",
        path.display(),
        header_lines.len(),
        entries.len()
    );

    Ok((header_lines, entries))
}

/// Strip exactly one pair of surrounding quote characters, without
/// unescaping. Values missing either quote are returned untouched.
fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
