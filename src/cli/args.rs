//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. The install arguments are
//! closed enumerations ([`Tool`], [`InstallMethod`]); clap rejects anything
//! outside them before a command ever runs.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::stack::{InstallMethod, Tool};

/// Bottle - Cloud Atlas AI core stack bootstrapper.
#[derive(Debug, Parser)]
#[command(name = "bottle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize the stack in the project and write AGENTS.md
    Init,

    /// Install a stack binary via a package manager
    Install(InstallArgs),

    /// Show binary, subsystem, and package-manager status
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InstallArgs {
    /// Binary to install
    #[arg(value_enum)]
    pub binary: Tool,

    /// Package manager to install with
    #[arg(short, long, value_enum)]
    pub method: InstallMethod,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn install_parses_valid_pair() {
        let cli = Cli::try_parse_from(["bottle", "install", "ba", "--method", "homebrew"]).unwrap();
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.binary, Tool::Ba);
                assert_eq!(args.method, InstallMethod::Homebrew);
                assert!(!args.yes);
            }
            other => panic!("expected install, got {:?}", other),
        }
    }

    #[test]
    fn install_rejects_unknown_binary() {
        let result = Cli::try_parse_from(["bottle", "install", "vim", "--method", "homebrew"]);
        assert!(result.is_err());
    }

    #[test]
    fn install_rejects_unknown_method() {
        let result = Cli::try_parse_from(["bottle", "install", "ba", "--method", "apt"]);
        assert!(result.is_err());
    }

    #[test]
    fn install_requires_method() {
        let result = Cli::try_parse_from(["bottle", "install", "ba"]);
        assert!(result.is_err());
    }

    #[test]
    fn sg_is_the_third_binary_value() {
        let cli = Cli::try_parse_from(["bottle", "install", "sg", "--method", "cargo", "--yes"])
            .unwrap();
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.binary, Tool::Sg);
                assert!(args.yes);
            }
            other => panic!("expected install, got {:?}", other),
        }
    }

    #[test]
    fn status_accepts_json_flag() {
        let cli = Cli::try_parse_from(["bottle", "status", "--json"]).unwrap();
        match cli.command {
            Commands::Status(args) => assert!(args.json),
            other => panic!("expected status, got {:?}", other),
        }
    }

    #[test]
    fn global_project_flag_parses() {
        let cli = Cli::try_parse_from(["bottle", "--project", "/tmp/app", "init"]).unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/app")));
        assert!(matches!(cli.command, Commands::Init));
    }
}
