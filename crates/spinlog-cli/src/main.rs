use anyhow::Result;
use clap::Parser;
use spinlog_core::{Credentials, CursorStore, PartitionStore, sync};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spinlog")]
#[command(about = "Spotify play-history archiver")]
struct Args {
    /// Directory holding one JSON record per day of plays
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// File tracking the incremental fetch cursor
    #[arg(short, long, default_value = "cursor.json")]
    cursor_file: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("spinlog=info".parse()?))
        .init();

    let args = Args::parse();

    // Pick up credentials from a .env file if one is present
    dotenvy::dotenv().ok();
    let credentials = Credentials::from_env()?;

    let partitions = PartitionStore::new(&args.data_dir);
    partitions.ensure_dir()?;
    let cursor_store = CursorStore::new(&args.cursor_file);

    let report = sync::run(&credentials, &cursor_store, &partitions)?;
    if report.fetched > 0 {
        info!(
            "Archived {} plays across {} dates",
            report.appended,
            report.dates.len()
        );
    }

    Ok(())
}
