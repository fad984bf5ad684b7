pub mod join;
pub mod split;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> anyhow::Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}
