use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "textmap")]
#[command(about = "Article readability and sentiment metrics analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score stored article texts and write the metrics table
    Analyze {
        /// Directory of stored articles (defaults to the configured one)
        articles_dir: Option<PathBuf>,

        /// CSV with URL_ID and URL columns; its identifiers drive the batch
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .textmap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory of stopword files
        #[arg(long)]
        stopwords: Option<PathBuf>,

        /// Positive sentiment word list
        #[arg(long)]
        positive: Option<PathBuf>,

        /// Negative sentiment word list
        #[arg(long)]
        negative: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Syllable counting heuristic
        #[arg(long, value_enum)]
        syllables: Option<SyllableMode>,

        /// Disable parallel scoring
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Number of threads for parallel scoring (0 = use all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,

        /// Record per-article scoring time
        #[arg(long)]
        timing: bool,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
    Terminal,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => crate::io::OutputFormat::Csv,
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SyllableMode {
    /// Count vowel groups, discounting a trailing silent 'e'
    VowelRuns,
    /// Legacy heuristic that counts every word as one syllable
    FirstChar,
}

impl From<SyllableMode> for crate::text::SyllableStrategy {
    fn from(mode: SyllableMode) -> Self {
        match mode {
            SyllableMode::VowelRuns => crate::text::SyllableStrategy::VowelRuns,
            SyllableMode::FirstChar => crate::text::SyllableStrategy::FirstChar,
        }
    }
}

/// Log filter for a `-v` count; `RUST_LOG` takes precedence when set.
pub fn log_level_for(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
