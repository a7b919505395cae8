use crate::providers::error::ProviderError;
use log::{debug, info, warn};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Shared HTTP plumbing for every provider: one pooled client, JSON decoding and
/// uniform error mapping.
#[derive(Debug, Clone)]
pub struct HttpLoader {
    client: Client,
}

impl HttpLoader {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(ProviderError::ClientBuild)?;
        Ok(Self { client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Sends `request` and decodes a JSON body.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ProviderError> {
        let (client, request) = request.build_split();
        let request = request.map_err(|e| {
            ProviderError::NetworkRequest(e.url().map(|u| u.to_string()).unwrap_or_default(), e)
        })?;
        let url = request.url().to_string();
        info!("{} {}", request.method(), url);

        let response = client
            .execute(request)
            .await
            .map_err(|e| ProviderError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    ProviderError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    ProviderError::NetworkRequest(url, e)
                });
            }
        };

        let decoded = response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Decode(url.clone(), e))?;
        debug!("Decoded response from {}", url);
        Ok(decoded)
    }
}
