//! Overlay visibility.

use core::fmt;

/// Whether the loading overlay should currently be on screen.
///
/// A coordinator starts out [`Visibility::Hidden`] and only ever moves
/// between these two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    /// True for [`Visibility::Visible`].
    pub const fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Visibility::Hidden => "hidden",
            Visibility::Visible => "visible",
        }
    }
}

impl From<bool> for Visibility {
    fn from(visible: bool) -> Self {
        if visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
