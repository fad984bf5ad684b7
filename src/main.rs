use clap::Parser;
use splitpo::cli::{
    commands::{join::JoinCommand, split::SplitCommand, CommandHandler},
    Cli, Commands, LogLevel,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    let handler: Box<dyn CommandHandler> = match cli.command {
        Commands::Split {
            input,
            output_dir,
            entries,
        } => Box::new(SplitCommand::new(input, output_dir, entries)),
        Commands::Join {
            input_files,
            output,
        } => Box::new(JoinCommand::new(input_files, output)),
    };

    debug!("executing {} command", handler.name());
    if let Err(err) = handler.execute() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

/// Initialize tracing from --log-level, overridable via RUST_LOG.
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // logs to stderr, not stdout
        .init();
}
