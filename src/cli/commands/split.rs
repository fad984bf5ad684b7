use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use super::CommandHandler;
use crate::ops::{split, SplitOptions};

/// Handler for the `split` command
pub struct SplitCommand {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub entries: usize,
}

impl CommandHandler for SplitCommand {
    fn execute(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("{} does not exist", self.input.display());
        }

        let options = SplitOptions {
            output_dir: self.output_dir.clone(),
            entries_per_chunk: self.entries,
        };
        let written = split(&self.input, &options)
            .with_context(|| format!("could not split {}", self.input.display()))?;

        for path in &written {
            println!("{}", path.display());
        }
        println!(
            "Wrote {} chunk(s) to {}",
            written.len(),
            self.output_dir.display()
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "split"
    }
}

impl SplitCommand {
    /// Create new split command
    pub fn new(input: PathBuf, output_dir: PathBuf, entries: usize) -> Self {
        Self {
            input,
            output_dir,
            entries,
        }
    }
}
