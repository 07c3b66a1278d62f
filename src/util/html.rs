use once_cell::sync::Lazy;
use regex::Regex;

static BR_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\s*<\s*br\s*/?\s*>\s*").unwrap());

static PARAGRAPH_BREAK_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"<\s*/\s*p\s*>\s*<\s*p[^>]*>").unwrap());

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").unwrap());

/// Turn an html fragment into plain text.
///
/// Source newlines become spaces, `<br>` and paragraph boundaries become
/// newlines, every other tag is dropped and entities are decoded. The
/// result is trimmed, so an empty input stays empty.
pub fn clean_html(html: &str) -> String {
  let text = html.replace('\n', " ");
  let text = BR_REGEX.replace_all(&text, "\n");
  let text = PARAGRAPH_BREAK_REGEX.replace_all(&text, "\n");
  let text = TAG_REGEX.replace_all(&text, "");

  html_escape::decode_html_entities(&text).trim().to_owned()
}
