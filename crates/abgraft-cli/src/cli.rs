use crate::utils::parser::{CardinalityList, parse_cardinalities};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "ABGRAFT CLI - Enumerate and sample antibody CDR graft permutations.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used for batch enumeration.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enumerate every permutation of one or more cardinality vectors.
    Enumerate(EnumerateArgs),
    /// Build a graft plan (which candidate goes on which CDR, per round) from a configuration file.
    Plan(PlanArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Whitespace-separated values, one permutation per line.
    Plain,
    /// Comma-separated table with a header row.
    Csv,
}

/// Arguments for the `enumerate` subcommand.
#[derive(Args, Debug)]
pub struct EnumerateArgs {
    /// Comma-separated cardinalities, one per slot (e.g., '2,0,3'). A 0 marks an inactive slot.
    /// Repeat to enumerate several vectors as a batch.
    #[arg(
        short = 'c',
        long = "cardinalities",
        required = true,
        value_name = "LIST",
        allow_hyphen_values = true,
        value_parser = parse_cardinalities
    )]
    pub cardinalities: Vec<CardinalityList>,

    /// Refuse to enumerate vectors with more permutations than this.
    #[arg(short, long, value_name = "INT")]
    pub limit: Option<usize>,

    /// Print the number of permutations instead of the permutations themselves.
    #[arg(long)]
    pub count_only: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Write output to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `plan` subcommand.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Path to the graft configuration file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Override the number of graft rounds.
    #[arg(short, long, value_name = "INT")]
    pub rounds: Option<usize>,

    /// Override the random seed used when sampling.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Override the maximum number of permutations to materialize.
    #[arg(long, value_name = "INT")]
    pub max_permutations: Option<usize>,

    /// Override the design type (FLXBB, FIXBB, RELAXED_DESIGN).
    #[arg(short, long, value_name = "NAME")]
    pub design_type: Option<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S cdrs.H3.candidates=12
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Write the plan to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
