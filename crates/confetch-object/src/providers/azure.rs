//! Azure Blob Storage provider using [`object_store::azure::MicrosoftAzureBuilder`].

use derive_more::Deref;
use object_store::azure::MicrosoftAzureBuilder;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Provider;
use crate::client::ObjectStoreClient;
use crate::types::Error;

/// Typed credentials for Azure Blob Storage.
#[derive(Debug, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct AzureCredentials {
    /// Azure storage container name.
    pub container: String,
    /// Azure storage account name.
    pub account_name: String,
    /// Storage account access key.
    #[serde(default)]
    pub access_key: Option<String>,
    /// Shared Access Signature token.
    #[serde(default)]
    pub sas_token: Option<String>,
    /// Custom endpoint URL (for Azure Stack or Azurite).
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Azure Blob Storage-backed store client.
#[derive(Deref)]
pub struct AzureProvider(ObjectStoreClient);

impl Provider for AzureProvider {
    type Credentials = AzureCredentials;

    const ID: &str = "azure";

    async fn connect(creds: &Self::Credentials) -> Result<Self, Error> {
        let mut builder = MicrosoftAzureBuilder::new()
            .with_container_name(&creds.container)
            .with_account(&creds.account_name);

        if let Some(key) = &creds.access_key {
            builder = builder.with_access_key(key);
        }

        if let Some(sas) = &creds.sas_token {
            let pairs: Vec<(String, String)> = sas
                .trim_start_matches('?')
                .split('&')
                .filter_map(|pair| {
                    let mut parts = pair.splitn(2, '=');
                    Some((
                        parts.next()?.to_string(),
                        parts.next().unwrap_or("").to_string(),
                    ))
                })
                .collect();
            builder = builder.with_sas_authorization(pairs);
        }

        if let Some(endpoint) = &creds.endpoint {
            builder = builder.with_endpoint(endpoint.clone());
        }

        let store = builder
            .build()
            .map_err(|e| Error::remote(format!("[{}] {e}", Self::ID), false))?;

        Ok(Self(ObjectStoreClient::new(store)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_deserialize_camel_case() {
        let creds: AzureCredentials = serde_json::from_str(
            r#"{"container":"app-settings","accountName":"prodacct","sasToken":"?sv=2024&sig=x"}"#,
        )
        .unwrap();
        assert_eq!(creds.container, "app-settings");
        assert_eq!(creds.account_name, "prodacct");
        assert!(creds.access_key.is_none());
    }

    #[tokio::test]
    async fn connect_with_access_key() {
        let creds = AzureCredentials {
            container: "app-settings".into(),
            account_name: "devstoreaccount1".into(),
            access_key: Some("a2V5".into()),
            sas_token: None,
            endpoint: Some("https://devstoreaccount1.blob.core.windows.net".into()),
        };
        assert!(AzureProvider::connect(&creds).await.is_ok());
    }
}
