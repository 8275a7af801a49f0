//! The remote-store capability consumed by [`ConditionalFetcher`].
//!
//! [`ConditionalFetcher`]: crate::fetcher::ConditionalFetcher

use bytes::Bytes;

use crate::types::{Error, ObjectMetadata, RemoteObjectHandle};

/// Read-only capability over a store of named, versioned binary objects.
///
/// This is the only boundary the fetcher depends on; any backend — cloud
/// object store, key-value service, local filesystem — can satisfy it.
/// The production implementation is [`ObjectStoreClient`].
///
/// An absent object is a *value* (`Ok(None)` from
/// [`probe_metadata`](Self::probe_metadata)), never an error:
/// implementations must translate their transport's not-found signal
/// rather than surface it as a fault. [`download`](Self::download) returns
/// the contents as one whole [`Bytes`] value, which is what lets the
/// fetcher guarantee it never commits a partial transfer to the caller's
/// buffer.
///
/// [`ObjectStoreClient`]: crate::client::ObjectStoreClient
#[async_trait::async_trait]
pub trait RemoteStore: Send + Sync + 'static {
    /// Fetches the object's metadata without transferring its contents.
    ///
    /// Returns `Ok(None)` when the object does not exist. Any other
    /// failure is an [`Error::Remote`].
    async fn probe_metadata(
        &self,
        handle: &RemoteObjectHandle,
    ) -> Result<Option<ObjectMetadata>, Error>;

    /// Transfers the object's full contents.
    ///
    /// Unlike the probe, an object that disappears before the download is
    /// an [`Error::Remote`]: existence was already established, so
    /// absence here is a mid-flight fault for the caller to sort out on
    /// its next poll.
    async fn download(&self, handle: &RemoteObjectHandle) -> Result<Bytes, Error>;
}
