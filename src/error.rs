use axum::response::{IntoResponse, Response};
use reqwest::StatusCode;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("no video id found in url: {0}")]
  NoMatch(String),
  #[error("failed to fetch {url}: {source}")]
  Fetch {
    url: String,
    #[source]
    source: BoxError,
  },
  #[error("failed to parse structured data: {0}")]
  Parse(#[from] ParseError),
}

impl Error {
  pub fn fetch(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
    Error::Fetch {
      url: url.into(),
      source: source.into(),
    }
  }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
  #[error("invalid html: {0}")]
  InvalidHtml(String),
  #[error("no application/ld+json block on the page")]
  MissingBlock,
  #[error("invalid ld+json content: {0}")]
  InvalidJson(#[source] serde_json::Error),
}

// Raised by the uploader lookup. Never leaves the pipeline: the caller
// logs it and falls back to an unnamed uploader.
#[derive(Debug, thiserror::Error)]
#[error("failed to resolve name of user {author_id}: {source}")]
pub struct AugmentationError {
  pub author_id: u64,
  #[source]
  pub source: Error,
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match &self {
      Error::NoMatch(_) => StatusCode::BAD_REQUEST,
      Error::Fetch { .. } => StatusCode::BAD_GATEWAY,
      Error::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, self.to_string()).into_response()
  }
}
