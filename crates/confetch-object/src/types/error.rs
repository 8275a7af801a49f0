//! Error types for conditional-fetch operations.
//!
//! Note that an absent remote object is not an error: it is the
//! [`FetchOutcome::NotFound`](crate::fetcher::FetchOutcome::NotFound)
//! shape of the normal result type.

/// Type alias for boxed dynamic errors that can be sent across threads.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for conditional-fetch operations.
pub type FetchResult<T> = Result<T, Error>;

/// Errors that can occur during a conditional fetch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller misuse, detected before any store round trip.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The remote store failed during a metadata probe or a download.
    ///
    /// Wraps the underlying transport fault. `retryable` is a hint for the
    /// caller's retry policy; this crate itself never retries.
    #[error("remote store error: {message}")]
    Remote {
        /// Human-readable description of the fault.
        message: String,
        /// Underlying transport error, when one is available.
        #[source]
        source: Option<BoxedError>,
        /// Whether the caller should consider retrying the operation.
        retryable: bool,
    },
}

impl Error {
    /// Creates a new invalid-argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates a new remote-store error.
    pub fn remote(msg: impl Into<String>, retryable: bool) -> Self {
        Self::Remote {
            message: msg.into(),
            source: None,
            retryable,
        }
    }

    /// Attaches a source error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        if let Self::Remote { source: slot, .. } = &mut self {
            *slot = Some(Box::new(source));
        }
        self
    }

    /// Whether this error came from the remote store rather than the caller.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// Whether the caller should consider retrying this operation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Remote { retryable: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_is_not_retryable() {
        let err = Error::invalid_argument("path must not be empty");
        assert!(!err.is_remote());
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "invalid argument: path must not be empty");
    }

    #[test]
    fn remote_carries_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "slow link");
        let err = Error::remote("probe failed", true).with_source(io);
        assert!(err.is_remote());
        assert!(err.is_retryable());
        assert!(std::error::Error::source(&err).is_some());
    }
}
