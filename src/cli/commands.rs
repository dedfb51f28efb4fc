use clap::{Parser, Subcommand, Args};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser)]
#[command(
    name = "sizelimit",
    version,
    long_version = LONG_VERSION,
    about = "Compare bundle size measurements and render a pull request report"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse tool output and persist it as the baseline for future runs
    Baseline(BaselineArgs),
    /// Compare tool output against a baseline and render the report
    Report(ReportArgs),
    /// Validate a settings file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct BaselineArgs {
    /// Raw JSON output of the measurement tool ("-" reads stdin)
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Where to write the canonical results
    #[arg(short, long, env = "INPUT_RESULTS_FILE")]
    pub results: Option<String>,

    /// Exit status of the measurement tool
    #[arg(long, default_value = "0")]
    pub tool_status: i32,

    /// YAML settings file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ReportArgs {
    /// Raw JSON output of the measurement tool ("-" reads stdin)
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Results persisted by a baseline run (missing file means no baseline)
    #[arg(short, long, env = "INPUT_RESULTS_FILE")]
    pub base: Option<String>,

    /// Percent change needed to report; non-numeric means always report
    #[arg(long, env = "INPUT_THRESHOLD")]
    pub threshold: Option<String>,

    /// Percent change needed before a change gets a direction marker
    #[arg(long, env = "INPUT_HIGHLIGHT_THRESHOLD")]
    pub highlight_threshold: Option<f64>,

    /// A report comment already exists and should be refreshed
    #[arg(long)]
    pub existing_comment: bool,

    /// Write the comment body here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print a JSON summary instead of the comment body
    #[arg(long)]
    pub json: bool,

    /// GitHub Actions output file to append step outputs to
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<String>,

    /// Exit status of the measurement tool
    #[arg(long, default_value = "0")]
    pub tool_status: i32,

    /// YAML settings file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Settings file to validate
    pub config: String,
}
