//! Provider trait for constructing connected store clients.

use serde::de::DeserializeOwned;

use crate::types::Error;

/// Factory for a store client scoped to one container.
///
/// Implementations validate typed credentials and build the backend
/// client for a specific provider (e.g. S3, Azure Blob). Acquiring and
/// refreshing tokens is the credential issuer's concern, not this
/// crate's: credentials arrive as plain typed fields.
pub trait Provider: Sized + Send + Sync + 'static {
    /// Strongly-typed credentials for this provider.
    type Credentials: DeserializeOwned + Send + Sync;

    /// Unique identifier (e.g. "s3", "azure").
    const ID: &str;

    /// Creates a connected client instance.
    async fn connect(creds: &Self::Credentials) -> Result<Self, Error>;
}
