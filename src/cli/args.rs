//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Docsite configuration toolkit CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docsite.toml)
    #[arg(short = 'C', long, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    // No short flag: -V belongs to the auto version flag
    #[arg(long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new site from template
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template to stdout without writing files
        #[arg(short, long)]
        dry: bool,
    },

    /// Check sidebars, navbar/footer routes, and markdown links
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Dump resolved configuration as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Check sidebar entries against the docs tree
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sidebar: Option<bool>,

    /// Check navbar and footer routes
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub routes: Option<bool>,

    /// Check internal links inside markdown documents
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub markdown: Option<bool>,

    /// Treat broken links as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

impl CheckArgs {
    pub fn check_sidebar(&self) -> bool {
        self.sidebar.unwrap_or(true)
    }

    pub fn check_routes(&self) -> bool {
        self.routes.unwrap_or(true)
    }

    pub fn check_markdown(&self) -> bool {
        self.markdown.unwrap_or(true)
    }
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Filter output to specific top-level sections (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Filter out null/empty values from output
    #[arg(short = 'E', long)]
    pub filter_empty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
    pub const fn is_query(&self) -> bool {
        matches!(self.command, Commands::Query { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_flags_default_on() {
        let cli = Cli::parse_from(["docsite", "check"]);
        let Commands::Check { args } = &cli.command else {
            panic!("expected check");
        };
        assert!(args.check_sidebar());
        assert!(args.check_routes());
        assert!(args.check_markdown());
        assert!(!args.warn_only);
    }

    #[test]
    fn test_check_flag_disable() {
        let cli = Cli::parse_from(["docsite", "check", "--markdown", "false", "-w"]);
        let Commands::Check { args } = &cli.command else {
            panic!("expected check");
        };
        assert!(!args.check_markdown());
        assert!(args.warn_only);
    }

    #[test]
    fn test_version_flag_coexists_with_verbose() {
        // -V must reach the auto version flag, not --verbose
        let err = Cli::try_parse_from(["docsite", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);

        let cli = Cli::parse_from(["docsite", "--verbose", "query"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_query_fields_comma_separated() {
        let cli = Cli::parse_from(["docsite", "query", "--fields", "site,sidebars"]);
        let Commands::Query { args } = &cli.command else {
            panic!("expected query");
        };
        assert_eq!(
            args.fields.as_deref(),
            Some(["site".to_string(), "sidebars".to_string()].as_slice())
        );
    }
}
