use clap::Parser;
use tracing_subscriber::EnvFilter;

use sizelimit::{cli, config, errors};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging; stdout is reserved for the report
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr);

    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let result = match cli.command {
        cli::Commands::Baseline(args) => cli::baseline::handle_baseline(args).await,
        cli::Commands::Report(args) => cli::report::handle_report(args).await,
        cli::Commands::Validate(args) => handle_validate(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.classify().exit_code);
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), errors::SizeLimitError> {
    let path = std::path::PathBuf::from(&args.config);
    let _config = config::parse_config(&path).await?;
    println!("Configuration is valid: {}", args.config);
    Ok(())
}
