use std::{net::SocketAddr, sync::Arc};

use axum::{
  extract::{Query, State},
  routing::get,
  Json, Router,
};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use videofyme_extract::{config, Extractor, Result, VideoInfo, Videofyme};

type SharedExtractor = Arc<dyn Extractor>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info")),
    )
    .init();

  let extractor: SharedExtractor = Arc::new(Videofyme::new());

  let app = Router::new()
    .route("/health", get(health))
    .route("/extract", get(extract))
    .with_state(extractor);

  let addr: SocketAddr = config::listen_addr().parse()?;
  tracing::info!(%addr, origin = config::origin(), "listening");

  axum::Server::bind(&addr)
    .serve(app.into_make_service())
    .await?;

  Ok(())
}

async fn health() -> &'static str {
  "ok"
}

#[derive(Deserialize)]
struct ExtractReq {
  url: String,
}

#[axum::debug_handler]
async fn extract(
  State(extractor): State<SharedExtractor>,
  Query(req): Query<ExtractReq>,
) -> Result<Json<VideoInfo>> {
  let info = extractor.extract(&req.url).await.map_err(|e| {
    tracing::error!(url = %req.url, error = %e, "extraction failed");
    e
  })?;

  Ok(Json(info))
}
