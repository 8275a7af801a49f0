//! Descriptor for the current state of a remote object.

use serde::{Deserialize, Serialize};

use super::VersionMarker;

/// Metadata reported by the remote store for an existing object.
///
/// Everything besides [`marker`](Self::marker) is descriptive pass-through:
/// the fetcher hands it to the caller without interpreting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetadata {
    /// Current version marker of the object.
    pub marker: VersionMarker,
    /// Object size in bytes.
    pub size: u64,
    /// Last modification time, if the backend reports one.
    pub last_modified: Option<jiff::Timestamp>,
}

impl From<object_store::ObjectMeta> for ObjectMetadata {
    fn from(meta: object_store::ObjectMeta) -> Self {
        // Backends without e-tags fall back to their version string; with
        // neither, the marker stays unknown and every poll re-downloads.
        let marker = VersionMarker::from(meta.e_tag.or(meta.version));
        Self {
            marker,
            size: meta.size,
            last_modified: jiff::Timestamp::from_millisecond(meta.last_modified.timestamp_millis())
                .ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use object_store::path::Path;

    use super::*;

    fn object_meta(e_tag: Option<&str>, version: Option<&str>) -> object_store::ObjectMeta {
        object_store::ObjectMeta {
            location: Path::from("config/app.json"),
            last_modified: Default::default(),
            size: 42,
            e_tag: e_tag.map(str::to_string),
            version: version.map(str::to_string),
        }
    }

    #[test]
    fn marker_prefers_e_tag() {
        let meta = ObjectMetadata::from(object_meta(Some("abc123"), Some("gen-7")));
        assert_eq!(meta.marker, VersionMarker::new("abc123"));
        assert_eq!(meta.size, 42);
    }

    #[test]
    fn marker_falls_back_to_version() {
        let meta = ObjectMetadata::from(object_meta(None, Some("gen-7")));
        assert_eq!(meta.marker, VersionMarker::new("gen-7"));
    }

    #[test]
    fn marker_unknown_without_either() {
        let meta = ObjectMetadata::from(object_meta(None, None));
        assert!(!meta.marker.is_known());
    }
}
