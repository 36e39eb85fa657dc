// CLI definition and top-level command execution

use crate::config::MigrationConfig;
use crate::migrate::progress::TracingProgress;
use crate::migrate::{MigrationSummary, Migrator};
use crate::store::{JsonTarget, MemoryTarget, SnapshotSource};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Migrate a rank-based permissions store into a typed permission-node model.
#[derive(Parser, Debug)]
#[command(name = "permbridge", version, about)]
pub struct Cli {
    /// Source snapshot JSON file
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Output directory for target documents
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Optional TOML config file; CLI flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run the migration in memory without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Execute the migration described by this invocation.
    pub fn run(self) -> Result<MigrationSummary> {
        let file_config = match &self.config {
            Some(path) => MigrationConfig::from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => MigrationConfig::default(),
        };

        let config = file_config.merge_cli(self.source, self.out, self.dry_run);

        let Some(source_path) = &config.source else {
            bail!("no source snapshot given; pass --source or set `source` in the config file");
        };

        let source = SnapshotSource::from_file(source_path)
            .with_context(|| format!("loading snapshot from {}", source_path.display()))?;

        let summary = if config.dry_run {
            tracing::info!("dry run: nothing will be written");
            Migrator::new(source, MemoryTarget::new(), TracingProgress).run()?
        } else {
            let Some(out_dir) = &config.output else {
                bail!("no output directory given; pass --out or set `output` in the config file");
            };
            let target = JsonTarget::new(out_dir)
                .with_context(|| format!("preparing output directory {}", out_dir.display()))?;
            Migrator::new(source, target, TracingProgress).run()?
        };

        Ok(summary)
    }
}
