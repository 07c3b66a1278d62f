pub mod config;
mod error;
pub mod extractor;
pub mod fetcher;
pub mod ld_json;
mod util;

pub use error::{AugmentationError, BoxError, Error, ParseError, Result};
pub use extractor::{Extractor, VideoInfo, Videofyme};
pub use fetcher::{Fetcher, HttpFetcher};
pub use util::W;
