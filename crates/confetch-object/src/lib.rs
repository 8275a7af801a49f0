#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Production [`RemoteStore`](store::RemoteStore) backed by [`object_store`].
pub mod client;
/// The conditional fetcher and its outcome type.
pub mod fetcher;
/// Provider trait and object storage provider factories.
pub mod providers;
/// The remote-store capability consumed by the fetcher.
pub mod store;
/// Inlined types (Error, handle, marker, metadata).
pub mod types;

#[doc(hidden)]
pub mod prelude;
