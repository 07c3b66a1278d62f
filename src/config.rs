use std::sync::LazyLock;

const DEFAULT_ORIGIN: &str = "https://www.videofy.me";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

// origin serving the wp-json endpoints, read once from VIDEOFYME_ORIGIN.
static ORIGIN: LazyLock<String> = LazyLock::new(|| {
  env_or("VIDEOFYME_ORIGIN", DEFAULT_ORIGIN)
    .trim_end_matches('/')
    .to_owned()
});

static USER_AGENT: LazyLock<String> =
  LazyLock::new(|| env_or("VIDEOFYME_USER_AGENT", DEFAULT_USER_AGENT));

static LISTEN_ADDR: LazyLock<String> =
  LazyLock::new(|| env_or("LISTEN_ADDR", DEFAULT_LISTEN_ADDR));

fn env_or(key: &str, default: &str) -> String {
  std::env::var(key)
    .ok()
    .filter(|s| !s.trim().is_empty())
    .unwrap_or_else(|| default.to_owned())
}

pub fn origin() -> &'static str {
  ORIGIN.as_str()
}

pub fn user_agent() -> &'static str {
  USER_AGENT.as_str()
}

pub fn listen_addr() -> &'static str {
  LISTEN_ADDR.as_str()
}
