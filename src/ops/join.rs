use std::path::PathBuf;

use tracing::{debug, info};

use crate::catalog::{parse_po_file, write_po_file, PoEntry};
use crate::error::{Result, SplitpoError};

/// Options for reassembling chunk files into one catalog.
#[derive(Debug, Clone)]
pub struct JoinOptions {
    /// Path of the combined catalog file.
    pub output: PathBuf,
}

/// Join catalog files, in the order given, into a single catalog.
///
/// The header block is taken from the first input only. Placeholder
/// entries are dropped from every input, so the metadata records that
/// split copied into each chunk do not pile up in the output.
pub fn join(inputs: &[PathBuf], options: &JoinOptions) -> Result<()> {
    if inputs.is_empty() {
        return Err(SplitpoError::Argument(
            "at least one input file is required".to_string(),
        ));
    }

    let mut header_lines: Vec<String> = Vec::new();
    let mut combined: Vec<PoEntry> = Vec::new();

    for (index, input) in inputs.iter().enumerate() {
        let (header, entries) = parse_po_file(input)?;
        if index == 0 {
            header_lines = header;
        }
        let before = combined.len();
        combined.extend(entries.into_iter().filter(|entry| !entry.is_empty()));
        debug!(
            "{}: {} valid entries",
            input.display(),
            combined.len() - before
        );
    }

    write_po_file(&options.output, &header_lines, &combined)?;

    info!(
        "joined {} file(s) into {} ({} entries)",
        inputs.len(),
        options.output.display(),
        combined.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_input_list_is_argument_error() {
        let dir = tempdir().unwrap();
        let options = JoinOptions {
            output: dir.path().join("out.po"),
        };

        let err = join(&[], &options).unwrap_err();
        assert!(matches!(err, SplitpoError::Argument(_)));
    }

    #[test]
    fn test_missing_input_surfaces_parser_error() {
        let dir = tempdir().unwrap();
        let options = JoinOptions {
            output: dir.path().join("out.po"),
        };

        let err = join(&[PathBuf::from("nope.po")], &options).unwrap_err();
        assert!(matches!(err, SplitpoError::FileNotFound(_)));
    }
}
