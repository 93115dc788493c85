//! Example: covering page navigations with the overlay.
//!
//! Run with: cargo run --example route_changes

use std::time::Duration;

use loadgate_sdk::{LoadingCoordinator, RouteTracker};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let loader = LoadingCoordinator::builder()
        .dwell(Duration::from_millis(300))
        .build()?;
    let routes = RouteTracker::new(loader.clone());

    for path in ["/", "/", "/about", "/works", "/skills"] {
        let changed = routes.navigate(path);
        println!(
            "navigate {:<8} changed={:<5} loading={}",
            path,
            changed,
            loader.is_loading()
        );
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    // last navigation was 100ms ago, so the overlay is still up
    println!("after burst: loading = {}", loader.is_loading());

    let mut overlay = loader.subscribe();
    overlay.wait_for(loadgate_sdk::Visibility::Hidden).await;
    println!("settled on {:?}, stats = {:?}", routes.current(), loader.stats());
    Ok(())
}
