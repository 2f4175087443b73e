use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use uuid::Uuid;

use crate::config::ResourceConfig;
use crate::resource::error::FetchError;
use crate::resource::model::FetchResult;
use crate::resource::Resource;

const USER_AGENT: &str = concat!("postview/", env!("CARGO_PKG_VERSION"));

/// [`Resource`] backed by a single HTTP GET.
pub struct HttpResource {
    client: Client,
    url: Url,
}

impl HttpResource {
    pub fn new(url: Url, connect_timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client, url })
    }

    pub fn from_config(config: &ResourceConfig) -> Result<Self, FetchError> {
        let url = config
            .parsed_url()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Self::new(url, Duration::from_secs(u64::from(config.connect_timeout_seconds)))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Resource for HttpResource {
    async fn fetch(&self) -> Result<Option<FetchResult>, FetchError> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, url = %self.url, "GET");

        let response = self
            .client
            .get(self.url.clone())
            .header(ACCEPT, "application/json")
            .header("X-Request-Id", request_id.to_string())
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(%request_id, status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        serde_json::from_slice::<Option<FetchResult>>(&bytes)
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
