//! Freshness check and conditional download of a remote object.
//!
//! [`ConditionalFetcher`] answers one question per call: has the object
//! behind a handle changed since the version marker the caller last saw?
//! It costs one metadata round trip, plus one content round trip only
//! when the answer is yes.

use std::sync::Arc;

use crate::store::RemoteStore;
use crate::types::{Error, RemoteObjectHandle, VersionMarker};

mod outcome;

pub use outcome::FetchOutcome;

/// Cloneable handle to a [`RemoteStore`] capability, exposing
/// [`check_and_fetch`](Self::check_and_fetch).
///
/// The fetcher holds no state across calls: the caller persists the
/// returned marker and passes it back on the next poll. Calls for the
/// same or different handles may race freely, and dropping the returned
/// future cancels the in-flight round trip.
#[derive(Clone)]
pub struct ConditionalFetcher(Arc<dyn RemoteStore>);

impl ConditionalFetcher {
    /// Wraps a concrete [`RemoteStore`] capability.
    pub fn new(store: impl RemoteStore) -> Self {
        Self(Arc::new(store))
    }

    /// Checks whether the object behind `handle` differs from `known`,
    /// downloading its contents into `dest` only when it does.
    ///
    /// - `known` may be [`VersionMarker::none`] on a first poll; an
    ///   unknown marker never matches, so the object is downloaded.
    /// - `dest` is written only on the [`FetchOutcome::Updated`] path,
    ///   and only after the full contents arrived: an error return never
    ///   leaves partial contents in `dest`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when `handle.path` is empty, checked
    /// before any store round trip. [`Error::Remote`] for any store fault
    /// during the probe or the download; an absent object is not a fault
    /// but the [`FetchOutcome::NotFound`] outcome.
    #[tracing::instrument(
        name = "fetch.check_and_fetch",
        skip(self, known, dest),
        fields(container = %handle.container, path = %handle.path, outcome)
    )]
    pub async fn check_and_fetch(
        &self,
        handle: &RemoteObjectHandle,
        known: &VersionMarker,
        dest: &mut Vec<u8>,
    ) -> Result<FetchOutcome, Error> {
        if handle.path.is_empty() {
            return Err(Error::invalid_argument("handle path must not be empty"));
        }

        let Some(meta) = self.0.probe_metadata(handle).await? else {
            return Ok(record(FetchOutcome::NotFound));
        };

        if known.matches(&meta.marker) {
            return Ok(record(FetchOutcome::Unchanged(meta)));
        }

        let data = self.0.download(handle).await?;
        dest.extend_from_slice(&data);
        Ok(record(FetchOutcome::Updated(meta)))
    }
}

impl std::fmt::Debug for ConditionalFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConditionalFetcher").finish_non_exhaustive()
    }
}

fn record(outcome: FetchOutcome) -> FetchOutcome {
    tracing::Span::current().record("outcome", outcome.as_ref());
    outcome
}
