use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use loadgate::{report, simulate, Scenario, Settings};
use loadgate_types::{format_dwell, parse_dwell};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "loadgate")]
#[command(about = "Replay loading-overlay scenarios against a minimum-dwell coordinator")]
struct Args {
    /// Path to a scenario JSON file
    scenario: PathBuf,

    /// Config file (defaults to ./loadgate.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum dwell, overriding config and environment (e.g. "3s", "500ms")
    #[arg(short, long)]
    dwell: Option<String>,

    /// Print the timeline as JSON
    #[arg(long, conflicts_with = "export")]
    json: bool,

    /// Write the timeline and a summary to a JSON file
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let dwell = match &args.dwell {
        Some(text) => {
            parse_dwell(text).with_context(|| format!("Invalid --dwell {:?}", text))?
        }
        None => Settings::load(args.config.as_deref())?.dwell()?,
    };

    let scenario = Scenario::from_file(&args.scenario)?;
    info!(
        steps = scenario.len(),
        dwell = %format_dwell(dwell),
        "replaying {}",
        args.scenario.display()
    );

    let timeline = simulate(&scenario, dwell)?;

    if let Some(path) = &args.export {
        report::export(&timeline, path)?;
        println!(
            "Exported {} transitions to {}",
            timeline.len(),
            path.display()
        );
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&timeline)?);
    } else {
        print!("{}", report::render(&timeline));
    }

    Ok(())
}
