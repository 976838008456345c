use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use folio_cursor::Settings;
use folio_cursor::replay::{load_script, replay_app, run_replay};

#[derive(Parser, Debug)]
#[command(name = "folio-cursor")]
#[command(about = "Replays recorded host events through the custom cursor headlessly")]
struct Args {
    /// Settings file to use instead of the one in the data directory.
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Print the final overlay frame as JSON.
    #[arg(long)]
    dump: bool,
    /// JSON array of `{ "at_ms": .., "event": .. }` entries.
    script: PathBuf,
}

fn main() -> Result<()> {
    // Respect RUST_LOG when set, otherwise show lifecycle logging only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .try_init()
        .ok();

    let args = Args::parse();
    let settings = match &args.settings {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load(),
    };
    let script = load_script(&args.script)?;

    let mut app = replay_app(settings);
    let Some(summary) = run_replay(&mut app, script) else {
        tracing::info!("host reports touch or reduced motion, nothing to replay");
        return Ok(());
    };
    tracing::info!(frames = summary.frames, published = summary.published, "replay finished");

    if args.dump {
        println!("{}", serde_json::to_string_pretty(&summary.overlay)?);
    }

    Ok(())
}
