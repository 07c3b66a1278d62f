use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{error::ParseError, util::int_or_none, W};

// opening tag of any element whose `type` attribute is application/ld+json.
// group 1 is the tag name, used to find the matching closing tag.
static LD_JSON_OPEN_TAG: Lazy<Regex> = Lazy::new(|| {
  const ATTR: &str =
    r#"\s+[a-z0-9:._-]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]+))?"#;
  const VALUE: &str = r"application/ld\+json";

  let type_attr =
    format!(r#"\s+type\s*=\s*(?:"{VALUE}"|'{VALUE}'|{VALUE})"#);
  let pattern =
    format!(r"(?i)<([a-z0-9:._-]+)(?:{ATTR})*?{type_attr}(?:{ATTR})*\s*>");

  Regex::new(&pattern).unwrap()
});

/// The schema.org video object embedded in a page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredMetadata {
  pub name: String,
  pub content_url: String,
  #[serde(default, deserialize_with = "lenient_string")]
  pub thumbnail_url: Option<String>,
  #[serde(default, deserialize_with = "lenient_string")]
  pub description: Option<String>,
  #[serde(default, deserialize_with = "lenient_string")]
  pub upload_date: Option<String>,
  #[serde(default, deserialize_with = "lenient_int")]
  pub interaction_count: Option<i64>,
}

impl StructuredMetadata {
  pub fn from_page(page: &str) -> Result<Self, ParseError> {
    let block = W(page).ld_json_block().ok_or(ParseError::MissingBlock)?;
    let block = html_escape::decode_html_entities(block);

    serde_json::from_str(&block).map_err(ParseError::InvalidJson)
  }
}

impl<'a> W<&'a str> {
  // raw source between the first ld+json opening tag and its closing tag.
  // the content is not parsed as html, so markup inside json strings
  // survives untouched.
  fn ld_json_block(&self) -> Option<&'a str> {
    let page = self.0;
    let open = LD_JSON_OPEN_TAG.captures(page)?;
    let start = open.get(0)?.end();
    let closing = format!("</{}", open[1].to_ascii_lowercase());

    // ascii lower-casing keeps byte offsets intact.
    let len = page[start..].to_ascii_lowercase().find(&closing)?;
    Some(&page[start..start + len])
  }
}

// schema.org allows a list where we expect a single string; take the
// first string and ignore anything that isn't one.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;
  let string = match value {
    Value::String(s) => Some(s),
    Value::Array(items) => items.into_iter().find_map(|item| match item {
      Value::String(s) => Some(s),
      _ => None,
    }),
    _ => None,
  };

  Ok(string)
}

fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(int_or_none(&Value::deserialize(deserializer)?))
}
