//! Rendering and exporting timelines.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use loadgate_types::{format_dwell, Milliseconds, Timeline};

/// Total time the overlay was visible across closed spans.
pub fn total_visible(timeline: &Timeline) -> Milliseconds {
    Milliseconds(
        timeline
            .visible_spans()
            .iter()
            .filter_map(|span| span.duration())
            .map(|d| d.as_millis())
            .sum(),
    )
}

/// Human-readable summary of a run.
pub fn render(timeline: &Timeline) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "dwell: {}", format_dwell(timeline.dwell.to_duration()));

    if timeline.is_empty() {
        let _ = writeln!(out, "overlay never shown");
    } else {
        let width = timeline
            .transitions
            .iter()
            .map(|t| t.at.as_millis().to_string().len())
            .max()
            .unwrap_or(1);
        for t in &timeline.transitions {
            let _ = writeln!(
                out,
                "  {:>width$}ms  {}",
                t.at.as_millis(),
                t.visibility,
                width = width
            );
        }
    }

    let spans = timeline.visible_spans();
    let still_visible = spans.last().is_some_and(|s| s.end.is_none());
    let _ = writeln!(
        out,
        "visible spans: {} (total {}ms{})",
        spans.len(),
        total_visible(timeline).as_millis(),
        if still_visible { ", still visible at end" } else { "" }
    );

    let stats = &timeline.stats;
    let _ = writeln!(
        out,
        "shows: {}  hides: {}  fired: {}  superseded: {}",
        stats.shows, stats.hides, stats.hides_fired, stats.hides_superseded
    );
    out
}

/// Write the timeline plus a summary block to `path` as pretty JSON.
pub fn export(timeline: &Timeline, path: &Path) -> Result<()> {
    let spans = timeline.visible_spans();

    let mut summary = serde_json::Map::new();
    summary.insert("visible_spans".to_string(), serde_json::json!(spans.len()));
    summary.insert(
        "total_visible_ms".to_string(),
        serde_json::json!(total_visible(timeline)),
    );
    summary.insert(
        "final_visibility".to_string(),
        serde_json::json!(timeline.final_visibility()),
    );

    let mut export = serde_json::Map::new();
    export.insert("summary".to_string(), serde_json::Value::Object(summary));
    export.insert(
        "timeline".to_string(),
        serde_json::to_value(timeline).context("Failed to serialize timeline")?,
    );

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(export))?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write export to {}", path.display()))?;
    Ok(())
}
