use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Splitpo: split gettext .po catalogs into chunks and join them back
#[derive(Debug, Parser)]
#[command(name = "splitpo")]
#[command(version = "0.1.0")]
#[command(about = "Split gettext .po catalogs into chunks and join them back")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split a .po file into chunks
    Split {
        /// Input .po file
        input: PathBuf,

        /// Directory the chunk files are written to
        #[arg(short, long, default_value = "./splitted")]
        output_dir: PathBuf,

        /// Number of entries per chunk
        #[arg(short, long, default_value_t = 100)]
        entries: usize,
    },

    /// Join split .po files back into one catalog
    Join {
        /// Input .po files, concatenated in the order given
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Output .po file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
