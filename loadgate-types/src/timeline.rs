//! Timelines - the recorded visibility history of one coordinator run.

use crate::{CoordinatorStats, Milliseconds, SchemaVersion, Visibility};

/// One observed change of the overlay flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// Offset from the start of the run.
    pub at: Milliseconds,

    /// The visibility entered at `at`.
    pub visibility: Visibility,
}

impl Transition {
    pub const fn new(at: Milliseconds, visibility: Visibility) -> Self {
        Self { at, visibility }
    }
}

/// A contiguous stretch of time during which the overlay was visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleSpan {
    pub start: Milliseconds,

    /// `None` if the overlay was still visible when the run ended.
    pub end: Option<Milliseconds>,
}

impl VisibleSpan {
    pub fn duration(&self) -> Option<Milliseconds> {
        self.end.map(|end| Milliseconds(end.0.saturating_sub(self.start.0)))
    }
}

/// The visibility history of a run, in chronological order.
///
/// # Example
///
/// ```rust
/// use loadgate_types::{Milliseconds, Timeline, Transition, Visibility};
///
/// let mut timeline = Timeline::new(Milliseconds(3000));
/// timeline.push(Transition::new(Milliseconds(0), Visibility::Visible));
/// timeline.push(Transition::new(Milliseconds(3500), Visibility::Hidden));
///
/// let spans = timeline.visible_spans();
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].duration(), Some(Milliseconds(3500)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeline {
    /// Schema version for forward compatibility.
    pub version: SchemaVersion,

    /// Dwell time the coordinator was configured with.
    pub dwell: Milliseconds,

    /// Transitions in the order they were observed.
    pub transitions: Vec<Transition>,

    /// Coordinator counters at the end of the run.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: CoordinatorStats,
}

impl Timeline {
    /// Create an empty timeline for a coordinator with the given dwell.
    pub fn new(dwell: Milliseconds) -> Self {
        Self {
            version: SchemaVersion::current(),
            dwell,
            transitions: Vec::new(),
            stats: CoordinatorStats::default(),
        }
    }

    /// Append a transition.
    ///
    /// Transitions that do not change the visibility are dropped, so the
    /// timeline always alternates.
    pub fn push(&mut self, transition: Transition) {
        if self.final_visibility() != transition.visibility {
            self.transitions.push(transition);
        }
    }

    /// Attach end-of-run counters.
    pub fn with_stats(mut self, stats: CoordinatorStats) -> Self {
        self.stats = stats;
        self
    }

    /// Visibility at `at`. A transition at exactly `at` is already in effect.
    pub fn visible_at(&self, at: Milliseconds) -> bool {
        self.transitions
            .iter()
            .take_while(|t| t.at <= at)
            .last()
            .is_some_and(|t| t.visibility.is_visible())
    }

    /// Visibility after the last recorded transition.
    pub fn final_visibility(&self) -> Visibility {
        self.transitions
            .last()
            .map(|t| t.visibility)
            .unwrap_or_default()
    }

    /// Collapse the transitions into visible spans.
    pub fn visible_spans(&self) -> Vec<VisibleSpan> {
        let mut spans = Vec::new();
        let mut open: Option<Milliseconds> = None;

        for transition in &self.transitions {
            match (transition.visibility, open) {
                (Visibility::Visible, None) => open = Some(transition.at),
                (Visibility::Hidden, Some(start)) => {
                    spans.push(VisibleSpan {
                        start,
                        end: Some(transition.at),
                    });
                    open = None;
                }
                _ => {}
            }
        }

        if let Some(start) = open {
            spans.push(VisibleSpan { start, end: None });
        }
        spans
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline(points: &[(u64, Visibility)]) -> Timeline {
        let mut t = Timeline::new(Milliseconds(3000));
        for (at, vis) in points {
            t.push(Transition::new(Milliseconds(*at), *vis));
        }
        t
    }

    #[test]
    fn empty_timeline_is_hidden() {
        let t = Timeline::new(Milliseconds(3000));
        assert!(t.is_empty());
        assert!(!t.visible_at(Milliseconds(0)));
        assert_eq!(t.final_visibility(), Visibility::Hidden);
        assert!(t.visible_spans().is_empty());
    }

    #[test]
    fn visible_at_boundaries() {
        let t = timeline(&[(0, Visibility::Visible), (3000, Visibility::Hidden)]);
        assert!(t.visible_at(Milliseconds(0)));
        assert!(t.visible_at(Milliseconds(2999)));
        assert!(!t.visible_at(Milliseconds(3000)));
        assert!(!t.visible_at(Milliseconds(10_000)));
    }

    #[test]
    fn redundant_transitions_are_dropped() {
        let t = timeline(&[
            (0, Visibility::Hidden),
            (10, Visibility::Visible),
            (20, Visibility::Visible),
            (3020, Visibility::Hidden),
        ]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.transitions[0].at, Milliseconds(10));
    }

    #[test]
    fn spans_with_open_end() {
        let t = timeline(&[
            (0, Visibility::Visible),
            (3000, Visibility::Hidden),
            (4000, Visibility::Visible),
        ]);
        let spans = t.visible_spans();
        assert_eq!(
            spans,
            vec![
                VisibleSpan {
                    start: Milliseconds(0),
                    end: Some(Milliseconds(3000)),
                },
                VisibleSpan {
                    start: Milliseconds(4000),
                    end: None,
                },
            ]
        );
        assert_eq!(spans[1].duration(), None);
    }

    #[test]
    fn new_timeline_has_current_version() {
        let t = Timeline::new(Milliseconds(1));
        assert!(t.version.is_compatible());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_shape() {
        let t = timeline(&[(0, Visibility::Visible)]);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["dwell"], 3000);
        assert_eq!(json["transitions"][0]["visibility"], "visible");
        assert_eq!(json["version"]["major"], 1);
    }
}
