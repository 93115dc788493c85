//! Schema versioning for exported timelines.

use crate::SCHEMA_VERSION;

/// Version of the exported timeline format, stored in every `Timeline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemaVersion {
    /// Bumped when a reader of older timelines could misread new ones.
    pub major: u32,

    /// Bumped when fields are added that older readers can ignore.
    pub minor: u32,
}

impl SchemaVersion {
    /// A specific version, e.g. one read back from an export.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// The version this crate writes.
    pub const fn current() -> Self {
        Self {
            major: SCHEMA_VERSION,
            minor: 0,
        }
    }

    /// Whether a timeline with this version can be read by this crate.
    pub fn is_compatible(&self) -> bool {
        self.major == SCHEMA_VERSION
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::current()
    }
}
