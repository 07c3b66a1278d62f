mod coerce;
mod html;

pub use coerce::{determine_ext, int_or_none, parse_iso8601, upload_date};
pub use html::clean_html;

// newtype used to hang site-specific helpers on foreign types,
// e.g. `W(&dom).ld_json()`.
#[derive(Default)]
pub struct W<T>(pub T);
