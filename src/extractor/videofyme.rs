use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_query::{DeserializeQuery, Query};

use crate::{
  config,
  error::AugmentationError,
  fetcher::{download_json, Fetcher, HttpFetcher},
  ld_json::StructuredMetadata,
  util::{clean_html, determine_ext, parse_iso8601, upload_date},
  Error, Result,
};

use super::{Extractor, VideoInfo};

const IE_NAME: &str = "videofy.me";
const DEFAULT_EXT: &str = "mp4";

static VALID_URL: Lazy<Regex> = Lazy::new(|| {
  Regex::new(
    r"^https?://(?:www\.videofy\.me/.+?|p\.videofy\.me/v)/(?P<id>\d+)(?:&|#|$)",
  )
  .unwrap()
});

#[derive(DeserializeQuery)]
struct PostRecord {
  #[query(".author")]
  author: u64,
}

#[derive(DeserializeQuery)]
struct UserRecord {
  #[query(".name")]
  name: String,
}

// videofy.me is a wordpress site: the page carries a json-ld video object
// and the uploader has to be looked up through the wp-json rest api.
// `origin` only applies to the rest api, the page itself is fetched from
// the url it was asked for.
pub struct Videofyme<F = HttpFetcher> {
  fetcher: F,
  origin: String,
}

impl Videofyme {
  pub fn new() -> Self {
    Self::with_fetcher(HttpFetcher::default())
  }
}

impl Default for Videofyme {
  fn default() -> Self {
    Self::new()
  }
}

impl<F: Fetcher> Videofyme<F> {
  pub fn with_fetcher(fetcher: F) -> Self {
    Self {
      fetcher,
      origin: config::origin().to_owned(),
    }
  }

  pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
    self.origin = origin.into().trim_end_matches('/').to_owned();
    self
  }

  pub fn video_id(url: &str) -> Result<String> {
    VALID_URL
      .captures(url)
      .and_then(|caps| caps.name("id"))
      .map(|m| m.as_str().to_owned())
      .ok_or_else(|| Error::NoMatch(url.to_owned()))
  }

  fn post_url(&self, video_id: &str) -> String {
    format!("{}/wp-json/wp/v2/posts/{}", self.origin, video_id)
  }

  fn user_url(&self, author_id: u64) -> String {
    format!("{}/wp-json/wp/v2/users/{}", self.origin, author_id)
  }

  async fn fetch_uploader_id(&self, video_id: &str) -> Result<u64> {
    let post: PostRecord = download_json::<Query<PostRecord>, _>(
      &self.fetcher,
      &self.post_url(video_id),
      video_id,
    )
    .await?
    .into();

    Ok(post.author)
  }

  async fn fetch_uploader_name(
    &self,
    author_id: u64,
  ) -> Result<String, AugmentationError> {
    let user: UserRecord = download_json::<Query<UserRecord>, _>(
      &self.fetcher,
      &self.user_url(author_id),
      &author_id.to_string(),
    )
    .await
    .map_err(|source| AugmentationError { author_id, source })?
    .into();

    Ok(user.name)
  }
}

#[async_trait]
impl<F: Fetcher> Extractor for Videofyme<F> {
  fn name(&self) -> &'static str {
    IE_NAME
  }

  #[tracing::instrument(skip(self))]
  async fn extract(&self, url: &str) -> Result<VideoInfo> {
    let video_id = Self::video_id(url)?;
    tracing::debug!(%video_id, "resolved video id");

    let page = self.fetcher.fetch_text(url, &video_id).await?;
    let metadata = StructuredMetadata::from_page(&page)?;

    let uploader_id = self.fetch_uploader_id(&video_id).await?;
    tracing::debug!(uploader_id, "resolved uploader id");

    let uploader = match self.fetch_uploader_name(uploader_id).await {
      Ok(name) => Some(name),
      Err(e) => {
        tracing::warn!(error = %e, "continuing without uploader name");
        None
      }
    };

    Ok(make_info(video_id, metadata, uploader_id, uploader))
  }
}

fn make_info(
  video_id: String,
  metadata: StructuredMetadata,
  uploader_id: u64,
  uploader: Option<String>,
) -> VideoInfo {
  let StructuredMetadata {
    name,
    content_url,
    thumbnail_url,
    description,
    upload_date: uploaded_at,
    interaction_count,
  } = metadata;

  let timestamp = uploaded_at.as_deref().and_then(parse_iso8601);

  VideoInfo {
    id: video_id,
    title: name,
    ext: determine_ext(&content_url, DEFAULT_EXT),
    url: content_url,
    thumbnail: thumbnail_url,
    description: description.as_deref().map(clean_html),
    timestamp,
    upload_date: timestamp.and_then(upload_date),
    uploader_id,
    uploader,
    view_count: interaction_count,
  }
}
