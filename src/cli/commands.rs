//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - act: dispatch one task and print the outcome
//! - calc: evaluate an arithmetic expression directly
//! - tools: list the registered tools
//! - repl: interactive task loop (also the default)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gofer - a keyword-routed errand agent
#[derive(Parser, Debug)]
#[command(name = "gofer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dispatch a single task and print the outcome
    Act {
        /// Free-text task description
        task: String,

        /// Print the outcome as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Evaluate an arithmetic expression directly
    Calc {
        /// Expression over numbers, + - * / and parentheses
        expression: String,
    },

    /// List the registered tools
    Tools,

    /// Interactive loop reading tasks from stdin
    Repl,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse_act() {
        let cli = Cli::parse_from(["gofer", "act", "2 + 2"]);
        match cli.command {
            Some(Commands::Act { task, json }) => {
                assert_eq!(task, "2 + 2");
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_act_json() {
        let cli = Cli::parse_from(["gofer", "act", "--json", "weather"]);
        assert!(matches!(cli.command, Some(Commands::Act { json: true, .. })));
    }

    #[test]
    fn test_cli_parse_no_subcommand() {
        let cli = Cli::parse_from(["gofer"]);
        assert!(cli.command.is_none());
        assert!(!cli.is_verbose());
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::parse_from(["gofer", "-v", "tools"]);
        assert!(cli.is_verbose());
        assert!(matches!(cli.command, Some(Commands::Tools)));
    }
}
