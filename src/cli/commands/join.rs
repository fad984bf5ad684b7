use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use super::CommandHandler;
use crate::ops::{join, JoinOptions};

/// Handler for the `join` command
pub struct JoinCommand {
    pub input_files: Vec<PathBuf>,
    pub output: PathBuf,
}

impl CommandHandler for JoinCommand {
    fn execute(&self) -> Result<()> {
        for input in &self.input_files {
            if !input.exists() {
                bail!("{} does not exist", input.display());
            }
        }

        let options = JoinOptions {
            output: self.output.clone(),
        };
        join(&self.input_files, &options)
            .with_context(|| format!("could not join into {}", self.output.display()))?;

        println!(
            "Joined {} file(s) into {}",
            self.input_files.len(),
            self.output.display()
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "join"
    }
}

impl JoinCommand {
    /// Create new join command
    pub fn new(input_files: Vec<PathBuf>, output: PathBuf) -> Self {
        Self {
            input_files,
            output,
        }
    }
}
