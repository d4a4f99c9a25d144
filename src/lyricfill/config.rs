use crate::error::{LyricsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "lyricfill.json";
pub const TOKEN_ENV: &str = "GENIUS_API_TOKEN";
pub const DEFAULT_DELAY_SECS: f64 = 10.0;
const DEFAULT_TIMEOUT_SECS: u64 = 20;
const DEFAULT_RETRIES: u32 = 2;

/// Run settings, optionally stored in `lyricfill.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScraperConfig {
    /// Seconds to wait after every row
    #[serde(default = "default_delay")]
    pub delay_seconds: f64,

    /// Per-request timeout for the provider
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Extra attempts on timeouts, 429 and 5xx responses
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Strip `[Chorus]`-style headers from fetched lyrics
    #[serde(default = "default_true")]
    pub remove_section_headers: bool,

    /// Treat track lists, credits, skits and similar pages as "not found"
    #[serde(default = "default_true")]
    pub skip_non_songs: bool,
}

fn default_delay() -> f64 {
    DEFAULT_DELAY_SECS
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_retries() -> u32 {
    DEFAULT_RETRIES
}

fn default_true() -> bool {
    true
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            delay_seconds: DEFAULT_DELAY_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            retries: DEFAULT_RETRIES,
            remove_section_headers: true,
            skip_non_songs: true,
        }
    }
}

impl ScraperConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(LyricsError::Io)?;
        let config: ScraperConfig =
            serde_json::from_str(&content).map_err(LyricsError::Serialization)?;
        Ok(config)
    }

    /// The pause between rows. Unusable values fall back to the default.
    pub fn delay(&self) -> Duration {
        if is_valid_delay(self.delay_seconds) {
            Duration::from_secs_f64(self.delay_seconds)
        } else {
            Duration::from_secs_f64(DEFAULT_DELAY_SECS)
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load `lyricfill.json` from a directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Self::load(dir.as_ref().join(CONFIG_FILENAME))
    }
}

/// Parse a delay given on the command line.
///
/// Returns `None` for anything that is not a finite, non-negative number of seconds.
pub fn parse_delay(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|secs| is_valid_delay(*secs))
}

/// A usable delay is a finite, non-negative number of seconds.
pub fn is_valid_delay(secs: f64) -> bool {
    secs.is_finite() && secs >= 0.0
}

/// Read the provider token from the environment.
///
/// `.env` loading happens once at startup in the binary; this only looks at the
/// process environment.
pub fn token_from_env() -> Result<String> {
    match std::env::var(TOKEN_ENV) {
        Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(LyricsError::MissingToken {
            var: TOKEN_ENV.to_string(),
        }),
    }
}
