//! Result type for [`ConditionalFetcher::check_and_fetch`](super::ConditionalFetcher::check_and_fetch).

use strum::{AsRefStr, IntoStaticStr};

use crate::types::ObjectMetadata;

/// Classification of one conditional fetch.
///
/// `Updated` is returned if and only if the full contents were transferred
/// into the caller's buffer; the other shapes leave the buffer untouched.
#[derive(Debug, Clone, PartialEq, Eq, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum FetchOutcome {
    /// The remote object does not exist.
    NotFound,
    /// The remote marker matches the caller's; nothing was transferred.
    Unchanged(ObjectMetadata),
    /// The object changed (or the caller had no marker); the buffer now
    /// holds its full contents.
    Updated(ObjectMetadata),
}

impl FetchOutcome {
    /// Metadata of the remote object, when it exists.
    pub fn metadata(&self) -> Option<&ObjectMetadata> {
        match self {
            Self::NotFound => None,
            Self::Unchanged(meta) | Self::Updated(meta) => Some(meta),
        }
    }

    /// Whether contents were transferred into the caller's buffer.
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VersionMarker;

    fn meta(marker: &str) -> ObjectMetadata {
        ObjectMetadata {
            marker: VersionMarker::new(marker),
            size: 1,
            last_modified: None,
        }
    }

    #[test]
    fn kind_labels() {
        assert_eq!(FetchOutcome::NotFound.as_ref(), "not_found");
        assert_eq!(FetchOutcome::Unchanged(meta("a")).as_ref(), "unchanged");
        assert_eq!(FetchOutcome::Updated(meta("a")).as_ref(), "updated");
    }

    #[test]
    fn metadata_accessor() {
        assert!(FetchOutcome::NotFound.metadata().is_none());
        let outcome = FetchOutcome::Updated(meta("abc123"));
        assert_eq!(
            outcome.metadata().unwrap().marker,
            VersionMarker::new("abc123")
        );
    }
}
