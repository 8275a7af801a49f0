//! Opaque version marker (entity tag) for a remote object.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Opaque token representing a specific content version of a remote object.
///
/// Markers are compared only for ordinal equality; no ordering or internal
/// structure is ever inferred from them. The empty marker means "no prior
/// version observed" and never matches any marker, including another empty
/// one, so a first poll always downloads.
#[derive(Debug, Display, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionMarker(String);

impl VersionMarker {
    /// Creates a marker from a backend-reported entity tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The "no prior version" marker.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether this marker names a real observed version.
    pub fn is_known(&self) -> bool {
        !self.0.is_empty()
    }

    /// Whether this marker matches `other`.
    ///
    /// Exact string equality, and only between two known markers: an
    /// unknown marker matches nothing.
    pub fn matches(&self, other: &VersionMarker) -> bool {
        self.is_known() && other.is_known() && self.0 == other.0
    }

    /// The marker as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Option<String>> for VersionMarker {
    fn from(tag: Option<String>) -> Self {
        Self(tag.unwrap_or_default())
    }
}
