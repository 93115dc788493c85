//! Example: replaying a scenario file through the simulator library.
//!
//! Run with: cargo run --example replay_scenario -- demos/portfolio.json

use std::path::PathBuf;
use std::time::Duration;

use loadgate::{report, simulate, Scenario};

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("demos/portfolio.json"));

    let scenario = Scenario::from_file(&path)?;
    for dwell_ms in [500, 3000] {
        let timeline = simulate(&scenario, Duration::from_millis(dwell_ms))?;
        println!("{}", report::render(&timeline));
    }
    Ok(())
}
