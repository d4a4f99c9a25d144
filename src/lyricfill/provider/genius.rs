//! Genius client.
//!
//! Searching is a call to the official API (`/search`, bearer token). The API does not
//! return lyric text, so the lyrics come from the song page of the selected hit.
//!
//! Timeouts, 429 and 5xx responses are retried `retries` times with a linear backoff.
//! Any other failure is returned as [`LyricsError::Provider`].

use super::html::{extract_lyrics, remove_section_headers};
use super::{LyricsProvider, Song};
use crate::config::ScraperConfig;
use crate::error::{LyricsError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const API_BASE_URL: &str = "https://api.genius.com";
const USER_AGENT: &str = concat!("lyricfill/", env!("CARGO_PKG_VERSION"));
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Titles of pages that are not song lyrics.
static NON_SONG_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)track\s?list|album art(work)?|liner notes|booklet|credits|interview|skit|instrumental|setlist",
    )
    .unwrap()
});

pub struct GeniusClient {
    agent: ureq::Agent,
    token: String,
    base_url: String,
    retries: u32,
    remove_section_headers: bool,
    skip_non_songs: bool,
}

impl GeniusClient {
    pub fn new(token: impl Into<String>, config: &ScraperConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build();

        Self {
            agent,
            token: token.into(),
            base_url: API_BASE_URL.to_string(),
            retries: config.retries,
            remove_section_headers: config.remove_section_headers,
            skip_non_songs: config.skip_non_songs,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn search(&self, term: &str) -> Result<Vec<SearchHit>> {
        let url = format!("{}/search", self.base_url);
        let auth = format!("Bearer {}", self.token);
        let response = self.call(&url, || {
            self.agent
                .get(&url)
                .set("Authorization", &auth)
                .query("q", term)
        })?;

        let envelope: SearchEnvelope = response
            .into_json()
            .map_err(|e| LyricsError::Provider(format!("Parse error: {}", e)))?;
        Ok(envelope.response.hits)
    }

    fn song_page(&self, url: &str) -> Result<String> {
        let response = self.call(url, || self.agent.get(url))?;
        response
            .into_string()
            .map_err(|e| LyricsError::Provider(format!("Could not read song page: {}", e)))
    }

    fn call<F>(&self, url: &str, request: F) -> Result<ureq::Response>
    where
        F: Fn() -> ureq::Request,
    {
        let mut attempt = 0u32;
        loop {
            match request().call() {
                Ok(response) => return Ok(response),
                Err(error) if attempt < self.retries && is_retryable(&error) => {
                    attempt += 1;
                    let backoff = RETRY_BACKOFF * attempt;
                    warn!(%url, attempt, ?backoff, "request failed ({}), retrying", error);
                    std::thread::sleep(backoff);
                }
                Err(ureq::Error::Status(code, _)) => {
                    return Err(LyricsError::Provider(format!("HTTP {} from {}", code, url)))
                }
                Err(error) => return Err(LyricsError::Provider(error.to_string())),
            }
        }
    }
}

impl LyricsProvider for GeniusClient {
    fn search_song(&self, title: &str, artist: &str) -> Result<Option<Song>> {
        let term = format!("{} {}", title, artist).trim().to_string();
        let hits = self.search(&term)?;
        debug!(%term, hits = hits.len(), "genius search");

        let Some(hit) = select_hit(&hits, title) else {
            return Ok(None);
        };

        if self.skip_non_songs && !is_lyrics_page(&hit.title) {
            debug!(title = %hit.title, "rejecting non-song result");
            return Ok(None);
        }

        let page = self.song_page(&hit.url)?;
        let Some(mut lyrics) = extract_lyrics(&page) else {
            debug!(url = %hit.url, "song page has no lyrics");
            return Ok(None);
        };
        if self.remove_section_headers {
            lyrics = remove_section_headers(&lyrics);
        }

        Ok(Some(Song {
            title: hit.title.clone(),
            artist: hit
                .primary_artist
                .as_ref()
                .map(|a| a.name.clone())
                .unwrap_or_else(|| artist.to_string()),
            url: Some(hit.url.clone()),
            lyrics,
        }))
    }
}

fn is_retryable(error: &ureq::Error) -> bool {
    match error {
        ureq::Error::Status(code, _) => *code == 429 || (500..600).contains(code),
        ureq::Error::Transport(transport) => {
            let lowered = transport.to_string().to_ascii_lowercase();
            lowered.contains("timed out") || lowered.contains("timeout")
        }
    }
}

/// Prefer the song hit whose title matches the searched title, else the first song hit.
fn select_hit<'a>(hits: &'a [SearchHit], title: &str) -> Option<&'a HitResult> {
    let wanted = clean_title(title);
    let songs = || hits.iter().filter(|h| h.kind == "song").map(|h| &h.result);

    songs()
        .find(|r| clean_title(&r.title) == wanted)
        .or_else(|| songs().next())
}

fn is_lyrics_page(title: &str) -> bool {
    !NON_SONG_TITLE.is_match(title)
}

fn clean_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    response: SearchResponse,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "type")]
    kind: String,
    result: HitResult,
}

#[derive(Debug, Deserialize)]
struct HitResult {
    title: String,
    url: String,
    #[serde(default)]
    primary_artist: Option<HitArtist>,
}

#[derive(Debug, Deserialize)]
struct HitArtist {
    name: String,
}
