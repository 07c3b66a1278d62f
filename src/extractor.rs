mod videofyme;

use async_trait::async_trait;
use serde::Serialize;

use crate::Result;

pub use videofyme::Videofyme;

/// Normalized metadata for a single video. `id`, `title` and `url` are
/// always present, everything else degrades to `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoInfo {
  pub id: String,
  pub title: String,
  pub url: String,
  pub ext: String,
  pub thumbnail: Option<String>,
  pub description: Option<String>,
  pub timestamp: Option<i64>,
  pub upload_date: Option<String>,
  pub uploader_id: u64,
  pub uploader: Option<String>,
  pub view_count: Option<i64>,
}

#[async_trait]
pub trait Extractor: Send + Sync {
  fn name(&self) -> &'static str;
  async fn extract(&self, url: &str) -> Result<VideoInfo>;
}
