//! CLI argument definitions using clap derive API

use clap::error::ErrorKind;
use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;
use sq_core::CONFIG_FILE_NAME;
use std::ffi::OsString;
use std::path::PathBuf;

/// sqlinity - generate C# migration classes from paired SQL files
///
/// Without a subcommand, parses the SQL folder and regenerates the output.
/// Options go before the subcommand.
#[derive(Parser, Debug)]
#[command(name = "sqlinity")]
#[command(author, version, about, long_about = None)]
#[command(allow_external_subcommands = true, disable_help_subcommand = true)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute (defaults to generate)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Path to the JSON config file
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Default for GlobalArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(CONFIG_FILE_NAME),
            verbose: 0,
            quiet: false,
        }
    }
}

impl GlobalArgs {
    /// Log level selected by -v / -q
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold an empty up/down migration pair with the next free ID
    #[command(disable_help_flag = true)]
    Create(CreateArgs),

    /// Parse the SQL folder and write migration classes and the registry
    Generate,

    /// Anything else falls back to generate
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

impl Cli {
    /// Parse arguments, running generate for anything clap rejects.
    ///
    /// Only `create` and explicit `--help` / `--version` requests report
    /// clap errors. Any other unparseable command line becomes
    /// [`Commands::External`] with default options.
    pub fn parse_lenient<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let err = match Self::try_parse_from(&args) {
            Ok(cli) => return Ok(cli),
            Err(err) => err,
        };

        let is_create = args.get(1).is_some_and(|first| first == "create");
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Err(err),
            _ if is_create => Err(err),
            _ => Ok(Self {
                global: GlobalArgs::default(),
                command: Some(Commands::External(args.into_iter().skip(1).collect())),
            }),
        }
    }
}

/// Arguments for the create command
#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Migration name; all words are joined with spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub name: Vec<String>,
}

impl CreateArgs {
    /// The raw migration name as typed
    pub fn raw_name(&self) -> String {
        self.name.join(" ")
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
