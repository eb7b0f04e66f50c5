use anyhow::Result;
use textmap::cli::{self, Cli, Commands};
use textmap::commands::{self, AnalyzeConfig};

// Main orchestrator function
fn main() -> Result<()> {
    textmap::observability::install_panic_hook();

    let cli = cli::parse_args();
    let verbosity = command_verbosity(&cli);
    init_logging(verbosity);
    textmap::observability::init_tracing(verbosity);

    match cli.command {
        Commands::Analyze {
            articles_dir,
            input,
            config,
            stopwords,
            positive,
            negative,
            format,
            output,
            syllables,
            no_parallel,
            jobs,
            timing,
            quiet,
            verbosity: _,
        } => commands::handle_analyze(AnalyzeConfig {
            articles_dir,
            input,
            config_path: config,
            stopwords,
            positive,
            negative,
            format: format.map(Into::into),
            output,
            syllables: syllables.map(Into::into),
            parallel: !no_parallel,
            jobs,
            timing,
            quiet,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}

// RUST_LOG overrides the -v level when set
fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(cli::log_level_for(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn command_verbosity(cli: &Cli) -> u8 {
    match &cli.command {
        Commands::Analyze { verbosity, .. } => *verbosity,
        Commands::Init { .. } => 0,
    }
}
