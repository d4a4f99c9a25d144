//! # Lyrics Providers
//!
//! A [`LyricsProvider`] answers one question: given a (normalized) song title and an
//! artist, is there a song with lyrics? It returns `Ok(Some(song))`, `Ok(None)` for
//! "no match", or an error for anything that went wrong on the way (timeouts, rate
//! limits, unexpected responses). Callers treat errors as per-row failures.
//!
//! - [`genius::GeniusClient`]: the production client, blocking HTTP via `ureq`.
//!
//! One client handle is created per run and reused for every row. Providers are not
//! required to be `Sync`; the run is single threaded.

use crate::error::Result;

pub mod genius;
pub mod html;

/// A matched song as returned by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub url: Option<String>,
    pub lyrics: String,
}

impl Song {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, lyrics: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            url: None,
            lyrics: lyrics.into(),
        }
    }
}

pub trait LyricsProvider {
    fn search_song(&self, title: &str, artist: &str) -> Result<Option<Song>>;
}

impl<P: LyricsProvider + ?Sized> LyricsProvider for &P {
    fn search_song(&self, title: &str, artist: &str) -> Result<Option<Song>> {
        (**self).search_song(title, artist)
    }
}

// --- Test Fixtures ---
