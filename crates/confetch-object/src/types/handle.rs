//! Identity of a remote object within a named container.

use serde::{Deserialize, Serialize};

/// Identifies a remote object by container name and object path.
///
/// Immutable once constructed and owned by the caller; the fetcher takes
/// it by reference on each call. The connected store is already scoped to
/// one container, so `container` is carried for identification and
/// tracing, not for routing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoteObjectHandle {
    /// Name of the container (bucket) holding the object.
    pub container: String,
    /// Path of the object within the container.
    pub path: String,
}

impl RemoteObjectHandle {
    /// Creates a handle for `path` within `container`.
    pub fn new(container: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            path: path.into(),
        }
    }
}

impl std::fmt::Display for RemoteObjectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.container, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_container_and_path() {
        let handle = RemoteObjectHandle::new("app-settings", "config/app.json");
        assert_eq!(handle.to_string(), "app-settings/config/app.json");
    }
}
