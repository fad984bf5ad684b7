use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::{parse_po_file, write_po_file, PoEntry};
use crate::error::{Result, SplitpoError};

/// Options for partitioning one catalog into chunk files.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Directory the chunk files are written to, created if absent.
    pub output_dir: PathBuf,
    /// Number of valid entries per chunk; the last chunk may be smaller.
    pub entries_per_chunk: usize,
}

/// Split a catalog into chunk files of `entries_per_chunk` entries each.
///
/// Placeholder entries (empty msgid and msgctxt) are excluded from the
/// partition; the first one, the catalog's metadata record, is carried
/// into every chunk after the header so each chunk stands alone as a
/// catalog. A catalog with zero valid entries still produces one chunk.
///
/// Returns the written paths in chunk-index order. A failed chunk write
/// surfaces immediately and does not roll back chunks already written.
pub fn split(input: &Path, options: &SplitOptions) -> Result<Vec<PathBuf>> {
    if options.entries_per_chunk == 0 {
        return Err(SplitpoError::Argument(
            "entries per chunk must be a positive integer".to_string(),
        ));
    }

    let (header_lines, entries) = parse_po_file(input)?;
    let (placeholders, valid): (Vec<PoEntry>, Vec<PoEntry>) =
        entries.into_iter().partition(|entry| entry.is_empty());
    let metadata = placeholders.into_iter().next();

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| {
            SplitpoError::Argument(format!("cannot derive a chunk name from {}", input.display()))
        })?;

    fs::create_dir_all(&options.output_dir)?;

    let groups: Vec<&[PoEntry]> = if valid.is_empty() {
        vec![&valid[..]]
    } else {
        valid.chunks(options.entries_per_chunk).collect()
    };

    let mut written = Vec::with_capacity(groups.len());
    for (index, group) in groups.iter().enumerate() {
        let chunk_path = options
            .output_dir
            .join(format!("{}_part_{:03}.po", stem, index));

        let mut chunk_entries = Vec::with_capacity(group.len() + 1);
        if let Some(meta) = &metadata {
            chunk_entries.push(meta.clone());
        }
        chunk_entries.extend(group.iter().cloned());

        write_po_file(&chunk_path, &header_lines, &chunk_entries)?;
        debug!("chunk {:03}: {} entries", index, group.len());
        written.push(chunk_path);
    }

    info!(
        "split {} ({} valid entries) into {} chunk(s)",
        input.display(),
        valid.len(),
        written.len()
    );

    Ok(written)
}
