//! Remote-store capability backed by [`object_store::ObjectStore`].
//!
//! [`ObjectStoreClient`] is a thin, cloneable wrapper around
//! `Arc<dyn ObjectStore>` providing the probe/download pair the fetcher
//! consumes. Every public method is instrumented with [`tracing`] for
//! observability.

use std::sync::Arc;

use bytes::Bytes;
use object_store::ObjectStore;
use object_store::path::Path;

use crate::store::RemoteStore;
use crate::types::{Error, ObjectMetadata, RemoteObjectHandle};

/// Cloneable handle to any [`ObjectStore`] backend (S3, Azure, GCS, ...).
///
/// The backing store is connected to a single container; objects are
/// resolved by path and the handle's container name only travels into
/// tracing spans.
#[derive(Clone, Debug)]
pub struct ObjectStoreClient(pub Arc<dyn ObjectStore>);

impl ObjectStoreClient {
    /// Wraps a concrete [`ObjectStore`] implementation.
    pub fn new(store: impl ObjectStore) -> Self {
        Self(Arc::new(store))
    }

    /// Issues a HEAD for `path`, returning `Ok(None)` when the object
    /// does not exist.
    #[tracing::instrument(name = "object.probe", skip(self), fields(path))]
    pub async fn probe(&self, path: &str) -> Result<Option<ObjectMetadata>, Error> {
        let path = Path::from(path);
        match self.0.head(&path).await {
            Ok(meta) => Ok(Some(meta.into())),
            Err(object_store::Error::NotFound { .. }) => Ok(None),
            Err(e) => Err(from_object_store(e)),
        }
    }

    /// Retrieves the full contents stored at `path`.
    ///
    /// Any failure, including a not-found response, is an
    /// [`Error::Remote`]; callers establish existence with
    /// [`probe`](Self::probe) first.
    #[tracing::instrument(name = "object.download", skip(self), fields(path))]
    pub async fn download(&self, path: &str) -> Result<Bytes, Error> {
        let path = Path::from(path);
        let result = self.0.get(&path).await.map_err(from_object_store)?;
        result.bytes().await.map_err(from_object_store)
    }
}

#[async_trait::async_trait]
impl RemoteStore for ObjectStoreClient {
    async fn probe_metadata(
        &self,
        handle: &RemoteObjectHandle,
    ) -> Result<Option<ObjectMetadata>, Error> {
        self.probe(&handle.path).await
    }

    async fn download(&self, handle: &RemoteObjectHandle) -> Result<Bytes, Error> {
        ObjectStoreClient::download(self, &handle.path).await
    }
}

/// Converts an [`object_store::Error`] into a crate [`Error`].
fn from_object_store(err: object_store::Error) -> Error {
    let retryable = !matches!(
        err,
        object_store::Error::NotFound { .. }
            | object_store::Error::PermissionDenied { .. }
            | object_store::Error::Unauthenticated { .. }
            | object_store::Error::AlreadyExists { .. }
            | object_store::Error::Precondition { .. }
    );
    Error::remote(err.to_string(), retryable).with_source(err)
}
