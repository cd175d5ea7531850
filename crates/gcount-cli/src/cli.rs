//! CLI argument definitions using Clap v4

use clap::{Args, Parser, Subcommand, ValueEnum};
use gcount_core::Strategy;
use std::path::PathBuf;

/// gcount - count user-perceived characters (base + combining marks)
#[derive(Parser, Debug)]
#[command(name = "gcount")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log debug output (RUST_LOG still takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count grapheme clusters in text
    #[command(alias = "c")]
    Count(CountArgs),

    /// Export a mark table as JSON
    Table(TableArgs),

    /// Check that both counting strategies agree on the input
    Verify(VerifyArgs),
}

/// Where the text comes from
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input text (reads from stdin if omitted)
    pub text: Option<String>,

    /// Read input text from file
    #[arg(short = 'T', long = "text-file", conflicts_with = "text")]
    pub text_file: Option<PathBuf>,
}

/// Which mark data to classify with
#[derive(Args, Debug)]
pub struct MarkDataArgs {
    /// Mark table JSON file (as written by `gcount table`)
    #[arg(long = "table", conflicts_with = "builtin")]
    pub table: Option<PathBuf>,

    /// Use the regex engine's bundled Unicode tables instead of ICU
    #[arg(long = "builtin")]
    pub builtin: bool,
}

/// Arguments for the count command
#[derive(Args, Debug)]
pub struct CountArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub marks: MarkDataArgs,

    /// Counting strategy
    #[arg(short = 's', long = "strategy", value_enum, default_value_t = StrategyArg::Scan)]
    pub strategy: StrategyArg,

    /// Print one count per input line
    #[arg(long = "lines", conflicts_with = "clusters")]
    pub lines: bool,

    /// Print every cluster with its code points instead of the total
    #[arg(long = "clusters")]
    pub clusters: bool,
}

/// Arguments for the table command
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Output file (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Data to snapshot
    #[arg(long = "source", value_enum, default_value_t = TableSource::Icu)]
    pub source: TableSource,

    /// Unicode version to record in the table metadata
    #[arg(long = "unicode-version")]
    pub unicode_version: Option<String>,
}

/// Arguments for the verify command
#[derive(Args, Debug)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub marks: MarkDataArgs,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Single pass with a "seen a base" flag
    Scan,
    /// Non-overlapping matches of the cluster pattern
    Pattern,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Scan => Strategy::Scan,
            StrategyArg::Pattern => Strategy::Pattern,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TableSource {
    /// ICU4X general category data
    Icu,
    /// The regex engine's bundled Unicode tables
    Builtin,
}
