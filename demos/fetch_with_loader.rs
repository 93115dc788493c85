//! Example: wrapping data fetches so the overlay never sticks.
//!
//! Run with: cargo run --example fetch_with_loader

use std::time::Duration;

use loadgate_sdk::LoadingCoordinator;

#[derive(Debug)]
struct Project {
    name: &'static str,
}

async fn fetch_projects(fail: bool) -> Result<Vec<Project>, String> {
    tokio::time::sleep(Duration::from_millis(150)).await;
    if fail {
        Err("backend unavailable".to_string())
    } else {
        Ok(vec![Project { name: "portfolio" }, Project { name: "jets" }])
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("loadgate_sdk=debug")
        .init();

    let loader = LoadingCoordinator::builder()
        .dwell(Duration::from_millis(500))
        .build()?;

    let mut overlay = loader.subscribe();
    let started = tokio::time::Instant::now();
    let renderer = tokio::spawn(async move {
        while let Some(visibility) = overlay.changed().await {
            println!("[{:>4}ms] overlay {}", started.elapsed().as_millis(), visibility);
        }
    });

    match loader.with_loading(fetch_projects(false)).await {
        Ok(projects) => println!("loaded {} projects: {:?}", projects.len(), projects),
        Err(e) => println!("fetch failed: {e}"),
    }

    // a rejected request still releases the overlay
    match loader.with_loading(fetch_projects(true)).await {
        Ok(projects) => println!("loaded {} projects", projects.len()),
        Err(e) => println!("fetch failed: {e}"),
    }

    tokio::time::sleep(Duration::from_millis(700)).await;
    println!("final: loading = {}, stats = {:?}", loader.is_loading(), loader.stats());

    drop(loader);
    renderer.await?;
    Ok(())
}
