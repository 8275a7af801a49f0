//! Value types exchanged between the fetcher and the store capability.

pub mod error;
pub mod handle;
pub mod marker;
pub mod metadata;

pub use error::{BoxedError, Error, FetchResult};
pub use handle::RemoteObjectHandle;
pub use marker::VersionMarker;
pub use metadata::ObjectMetadata;
