use clap::{Args, Parser};
use fupred::core::scoring::model::ScoringModel;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const AFTER_HELP: &str = "\
Input is a connectivity table (CT): one line per position, the first
column the 1-based position and the fifth its 1-based partner (0 when
unpaired). Use '-' for standard input or standard output.";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "rFUpred - predict folding-unit (domain) boundaries of a chain from its contact map.",
    help_template = HELP_TEMPLATE,
    after_help = AFTER_HELP,
)]
pub struct Cli {
    /// Input CT file, or '-' to read standard input.
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Output FU report, or '-' to write standard output.
    #[arg(value_name = "OUTPUT", default_value = "-")]
    pub output: String,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub prediction: PredictionArgs,
}

/// Options shaping the prediction itself.
#[derive(Args, Debug, Default, Clone)]
pub struct PredictionArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Double-boundary scoring formula ('protein' or 'rna').
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<ScoringModel>,

    /// Report contiguous splits only, skipping the double-boundary search.
    #[arg(long)]
    pub no_discontinuous: bool,

    /// Skip candidates whose boundary plateaus overlap a better candidate's.
    #[arg(long)]
    pub exclusive: bool,

    /// Do not draw a progress bar on standard error.
    #[arg(long)]
    pub no_progress: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S ranking.min-reported=5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
