//! Scenario files: scripted sequences of overlay requests.
//!
//! A scenario is a JSON document listing what happens when, relative to the
//! start of the run:
//!
//! ```json
//! {
//!   "steps": [
//!     { "at_ms": 0,    "action": "navigate", "path": "/" },
//!     { "at_ms": 200,  "action": "fetch", "duration_ms": 800, "fail": true },
//!     { "at_ms": 1500, "action": "show" },
//!     { "at_ms": 1600, "action": "hide" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Something a collaborator does to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Action {
    /// Direct `show()`.
    Show,

    /// Direct `hide()`.
    Hide,

    /// A page navigation through the route tracker.
    Navigate { path: String },

    /// A data fetch that holds the overlay for `duration_ms` and then
    /// resolves, or rejects when `fail` is set.
    Fetch {
        duration_ms: u64,
        #[serde(default)]
        fail: bool,
    },
}

/// One scheduled action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Offset from the start of the run.
    pub at_ms: u64,

    #[serde(flatten)]
    pub action: Action,
}

impl Step {
    pub fn new(at_ms: u64, action: Action) -> Self {
        Self { at_ms, action }
    }
}

/// A scripted run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Load a scenario from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse scenario {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Steps sorted by offset. Steps sharing an offset keep file order.
    pub fn ordered_steps(&self) -> Vec<&Step> {
        let mut steps: Vec<&Step> = self.steps.iter().collect();
        steps.sort_by_key(|step| step.at_ms);
        steps
    }

    /// Offset of the last step, or 0 for an empty scenario.
    pub fn last_offset_ms(&self) -> u64 {
        self.steps.iter().map(|s| s.at_ms).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_all_actions() {
        let scenario = Scenario::from_json(
            r#"{
                "steps": [
                    { "at_ms": 0, "action": "show" },
                    { "at_ms": 10, "action": "hide" },
                    { "at_ms": 20, "action": "navigate", "path": "/works" },
                    { "at_ms": 30, "action": "fetch", "duration_ms": 500 },
                    { "at_ms": 40, "action": "fetch", "duration_ms": 5, "fail": true }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            scenario.steps,
            vec![
                Step::new(0, Action::Show),
                Step::new(10, Action::Hide),
                Step::new(
                    20,
                    Action::Navigate {
                        path: "/works".to_string()
                    }
                ),
                Step::new(
                    30,
                    Action::Fetch {
                        duration_ms: 500,
                        fail: false
                    }
                ),
                Step::new(
                    40,
                    Action::Fetch {
                        duration_ms: 5,
                        fail: true
                    }
                ),
            ]
        );
    }

    #[test]
    fn missing_steps_is_empty() {
        let scenario = Scenario::from_json("{}").unwrap();
        assert!(scenario.is_empty());
        assert_eq!(scenario.last_offset_ms(), 0);
    }

    #[test]
    fn unknown_action_is_rejected() {
        let result = Scenario::from_json(r#"{ "steps": [ { "at_ms": 0, "action": "blink" } ] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn ordering_is_stable() {
        let scenario = Scenario::new(vec![
            Step::new(500, Action::Hide),
            Step::new(0, Action::Show),
            Step::new(500, Action::Show),
        ]);

        let ordered: Vec<_> = scenario
            .ordered_steps()
            .into_iter()
            .map(|s| (s.at_ms, s.action.clone()))
            .collect();
        assert_eq!(
            ordered,
            vec![(0, Action::Show), (500, Action::Hide), (500, Action::Show)]
        );
        assert_eq!(scenario.last_offset_ms(), 500);
    }

    #[test]
    fn from_file_reads_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "steps": [ {{ "at_ms": 0, "action": "show" }} ] }}"#).unwrap();

        let scenario = Scenario::from_file(file.path()).unwrap();
        assert_eq!(scenario.len(), 1);
    }

    #[test]
    fn from_file_reports_path() {
        let err = Scenario::from_file("/nonexistent/scenario.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/scenario.json"));
    }

    #[test]
    fn serializes_back_to_same_shape() {
        let step = Step::new(
            20,
            Action::Navigate {
                path: "/".to_string(),
            },
        );
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["action"], "navigate");
        assert_eq!(json["path"], "/");
        assert_eq!(json["at_ms"], 20);
    }
}
