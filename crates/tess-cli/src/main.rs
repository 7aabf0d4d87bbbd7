use anyhow::Context;
use clap::Parser;
use tess_config::TesseraConfig;

mod cli;
mod commands;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("tessera error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;

    let config = load_config(&flags)?;
    commands::dispatch(&cli.command, &config, &flags)
}

fn load_config(flags: &cli::GlobalFlags) -> anyhow::Result<TesseraConfig> {
    let config = match &flags.config {
        Some(path) => TesseraConfig::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TesseraConfig::load_with_dotenv().context("failed to load tessera config")?,
    };
    tracing::debug!(
        default_column_width = config.grid.default_column_width,
        display_capacity = config.cache.display_capacity,
        "configuration loaded"
    );
    Ok(config)
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let level = if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TESSERA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
