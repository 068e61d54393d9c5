//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Headstamp - Insert and refresh fixed-layout file headers.
#[derive(Debug, Parser)]
#[command(name = "headstamp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Login to record as creator/editor
    #[arg(long, global = true, env = "HEADSTAMP_USER")]
    pub user: Option<String>,

    /// Contact address for the author field
    #[arg(long, global = true, env = "HEADSTAMP_EMAIL")]
    pub email: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (paths only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Insert a header, or refresh the existing one
    Insert(StampArgs),

    /// Refresh headers of files that already have one (save hook)
    Update(StampArgs),

    /// Show the header fields of a file
    Show(ShowArgs),

    /// Print a fresh header without touching any file
    Render(RenderArgs),

    /// List supported languages
    Languages,

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the insert and update commands.
#[derive(Debug, Parser)]
pub struct StampArgs {
    /// Files to process
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Language id, instead of detecting it from each file name
    #[arg(short, long)]
    pub language: Option<String>,

    /// Print the result instead of writing it back
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// File to inspect
    pub path: PathBuf,
}

/// Arguments for the render command.
#[derive(Debug, Parser)]
pub struct RenderArgs {
    /// Language id
    #[arg(short, long)]
    pub language: String,

    /// File name to record
    #[arg(short = 'n', long)]
    pub filename: String,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_command() {
        let cli = Cli::parse_from(["headstamp", "insert", "a.c", "b.c", "--dry-run"]);
        match cli.command {
            Command::Insert(args) => {
                assert_eq!(args.paths.len(), 2);
                assert!(args.dry_run);
                assert!(args.language.is_none());
            }
            _ => panic!("Expected Insert command"),
        }
    }

    #[test]
    fn test_insert_requires_paths() {
        assert!(Cli::try_parse_from(["headstamp", "insert"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "headstamp", "update", "x.rs", "--user", "alice", "-vv", "--format", "json",
        ]);
        assert_eq!(cli.user.as_deref(), Some("alice"));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }

    #[test]
    fn test_render_command() {
        let cli = Cli::parse_from(["headstamp", "render", "-l", "c", "-n", "foo.c"]);
        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.language, "c");
                assert_eq!(args.filename, "foo.c");
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_config_init() {
        let cli = Cli::parse_from(["headstamp", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs { action: ConfigAction::Init { force: true } })
        ));
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, crate::config::OutputFormat::Quiet);
    }
}
