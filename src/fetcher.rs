use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::{config, Error, Result};

// Transport collaborator. Implementations own retries and timeouts; every
// failure they report is final for the pipeline.
#[async_trait]
pub trait Fetcher: Send + Sync {
  async fn fetch_text(&self, url: &str, video_id: &str) -> Result<String>;
}

#[derive(Clone)]
pub struct HttpFetcher {
  client: reqwest::Client,
}

impl HttpFetcher {
  pub fn new(client: reqwest::Client) -> Self {
    Self { client }
  }
}

impl Default for HttpFetcher {
  fn default() -> Self {
    Self::new(reqwest::Client::new())
  }
}

#[async_trait]
impl Fetcher for HttpFetcher {
  #[tracing::instrument(skip(self))]
  async fn fetch_text(&self, url: &str, video_id: &str) -> Result<String> {
    let resp = self
      .client
      .get(url)
      .header("User-Agent", config::user_agent())
      .send()
      .await
      .and_then(|resp| resp.error_for_status())
      .map_err(|e| Error::fetch(url, e))?;

    let body = resp.text().await.map_err(|e| Error::fetch(url, e))?;
    tracing::debug!(bytes = body.len(), "downloaded");

    Ok(body)
  }
}

/// Download `url` and decode its body as JSON. An undecodable body counts
/// as a failed fetch of that url.
pub async fn download_json<T, F>(
  fetcher: &F,
  url: &str,
  video_id: &str,
) -> Result<T>
where
  T: DeserializeOwned,
  F: Fetcher + ?Sized,
{
  let body = fetcher.fetch_text(url, video_id).await?;
  serde_json::from_str(&body).map_err(|e| Error::fetch(url, e))
}
