use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

const ISO8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Lenient integer coercion: integers pass, floats are truncated and
/// strings holding a decimal integer are parsed. Everything else is `None`.
pub fn int_or_none(value: &Value) -> Option<i64> {
  match value {
    Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
    Value::String(s) => s.trim().parse().ok(),
    _ => None,
  }
}

/// Parse an ISO-8601 datetime into a unix timestamp. Date and time may be
/// separated by `T` or a space. A missing zone designator is read as UTC.
pub fn parse_iso8601(date_str: &str) -> Option<i64> {
  let date_str = date_str.trim().replacen(' ', "T", 1);
  let date_str = match date_str.strip_suffix('Z') {
    Some(rest) => format!("{rest}+00:00"),
    None => date_str,
  };

  if let Ok(date) =
    DateTime::parse_from_str(&date_str, &format!("{ISO8601_FORMAT}%#z"))
  {
    return Some(date.timestamp());
  }

  NaiveDateTime::parse_from_str(&date_str, ISO8601_FORMAT)
    .ok()
    .map(|naive| Utc.from_utc_datetime(&naive).timestamp())
}

/// Render a unix timestamp as a `YYYYMMDD` date in UTC.
pub fn upload_date(timestamp: i64) -> Option<String> {
  Utc
    .timestamp_opt(timestamp, 0)
    .single()
    .map(|date| date.format("%Y%m%d").to_string())
}

// guess the container from the last path segment of the media url.
pub fn determine_ext(url: &str, default: &str) -> String {
  let path = url.split(['?', '#']).next().unwrap_or_default();
  let segment = path.rsplit('/').next().unwrap_or_default();

  match segment.rsplit_once('.') {
    Some((_, ext))
      if (1..=5).contains(&ext.len())
        && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
    {
      ext.to_ascii_lowercase()
    }
    _ => default.to_owned(),
  }
}
