//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use std::io::Write;

use crate::output::OutputFormat;

pub mod detect;
pub mod list;
pub mod models;
pub mod resolve;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect the language and preferred model of dataset names
    Detect(detect::DetectArgs),

    /// Show registered models and whether each is available
    Models(models::ModelsArgs),

    /// Resolve a usable model for a dataset, falling back when needed
    Resolve(resolve::ResolveArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List registered languages and their models
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the command, writing results to `out`
    pub fn execute(&self, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
        match self {
            Commands::Detect(args) => args.execute(format, out),
            Commands::Models(args) => args.execute(format, out),
            Commands::Resolve(args) => args.execute(format, out),
            Commands::Validate(args) => args.execute(out),
            Commands::List { subcommand } => list::execute(*subcommand, format, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let detect_cmd = Commands::Detect(detect::DetectArgs {
            names: vec!["demo".to_string()],
        });
        let debug_str = format!("{:?}", detect_cmd);
        assert!(debug_str.contains("Detect"));
        assert!(debug_str.contains("demo"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Languages,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Languages"));
    }

    #[test]
    fn test_execute_dispatches_to_detect() {
        let cmd = Commands::Detect(detect::DetectArgs {
            names: vec!["anony_chs".to_string()],
        });
        let mut out = Vec::new();
        cmd.execute(OutputFormat::Text, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("zh_core_web_lg"));
    }
}
