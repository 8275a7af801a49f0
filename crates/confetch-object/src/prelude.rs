//! Convenience re-exports.

pub use crate::client::ObjectStoreClient;
pub use crate::fetcher::{ConditionalFetcher, FetchOutcome};
pub use crate::providers::{AzureProvider, GcsProvider, Provider, S3Provider};
pub use crate::store::RemoteStore;
pub use crate::types::{Error, FetchResult, ObjectMetadata, RemoteObjectHandle, VersionMarker};
