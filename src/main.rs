use anyhow::Result;
use clap::Parser;
use permbridge::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let summary = cli.run()?;
    tracing::info!(
        "done: {} groups, {} users migrated",
        summary.groups,
        summary.users
    );

    Ok(())
}
