use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::linter::LintMode;
use crate::output::OutputFormat;
use crate::validators::ValidationLevel;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "fqlint")]
#[command(author, version, about = "FASTQ lint - validate sequencing reads before they enter a pipeline")]
#[command(long_about = "A tool to validate reads in FASTQ files, single-end or paired-end.\n\n\
    Exit codes:\n  \
    0 - All reads passed validation\n  \
    1 - Validation failures found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate reads in one or two FASTQ files
    Lint(LintArgs),

    /// List the built-in validators and their levels
    Validators(ValidatorsArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct LintArgs {
    /// FASTQ file to validate (gzip-compressed if the name ends in .gz)
    pub read_one: PathBuf,

    /// Mate FASTQ file; enables paired-end validation
    pub read_two: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Level for single-read validators (overrides config)
    #[arg(long)]
    pub single_level: Option<ValidationLevel>,

    /// Level for paired-read validators (overrides config)
    #[arg(long)]
    pub paired_level: Option<ValidationLevel>,

    /// Stop at the first violation (error) or collect all of them (report)
    #[arg(short = 'm', long)]
    pub lint_mode: Option<LintMode>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ValidatorsArgs {
    /// Only list validators that run at this level
    #[arg(short, long)]
    pub level: Option<ValidationLevel>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".fqlint.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax
    Validate {
        /// Path to configuration file (default: .fqlint.toml)
        #[arg(short, long, default_value = ".fqlint.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration (merged from all sources)
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
