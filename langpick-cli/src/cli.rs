//! Top-level argument parsing

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

use crate::commands::Commands;
use crate::output::OutputFormat;

/// Pick an NLP model for a dataset from its name
#[derive(Debug, Parser)]
#[command(name = "langpick", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }

    /// Run the selected command against stdout
    pub fn execute(&self) -> Result<()> {
        log::debug!("Arguments: {:?}", self);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.command.execute(self.format, &mut out)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ListCommands;

    #[test]
    fn test_parse_detect() {
        let cli = Cli::try_parse_from(["langpick", "detect", "demo", "anony_chs"]).unwrap();
        match cli.command {
            Commands::Detect(args) => assert_eq!(args.names, vec!["demo", "anony_chs"]),
            other => panic!("Expected Detect, got {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["langpick", "list", "languages", "-f", "json", "-vv"])
            .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Commands::List {
                subcommand: ListCommands::Languages
            }
        ));
    }

    #[test]
    fn test_parse_resolve_options() {
        let cli = Cli::try_parse_from([
            "langpick",
            "resolve",
            "novel",
            "--available",
            "en_core_web_lg",
            "--model-path",
            "/opt/models",
            "--probe-timeout-ms",
            "250",
        ])
        .unwrap();
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.name, "novel");
                assert_eq!(args.resolver.available, vec!["en_core_web_lg"]);
                assert_eq!(args.resolver.model_paths.len(), 1);
                assert_eq!(args.resolver.probe_timeout_ms, Some(250));
            }
            other => panic!("Expected Resolve, got {other:?}"),
        }
    }

    #[test]
    fn test_detect_requires_name() {
        assert!(Cli::try_parse_from(["langpick", "detect"]).is_err());
    }

    #[test]
    fn test_validate_requires_config() {
        assert!(Cli::try_parse_from(["langpick", "validate"]).is_err());
    }
}
