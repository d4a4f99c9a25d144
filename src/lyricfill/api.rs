//! # API Facade
//!
//! A thin facade over the command layer, and the only thing the CLI talks to.
//!
//! `LyricsApi<S, P, T>` is generic over the table store, the lyrics provider and the
//! pacer:
//! - Production: `LyricsApi<CsvStore, GeniusClient, ThreadPacer>`
//! - Testing: `LyricsApi<InMemoryStore, ScriptedProvider, RecordingPacer>`
//!
//! The facade owns those three handles for the lifetime of a run, so the provider
//! client is created once and reused for every row.

use crate::commands::process::{self, RunContext};
use crate::commands::{fetch, Reporter};
use crate::config::ScraperConfig;
use crate::error::Result;
use crate::model::{LyricResult, RunSummary};
use crate::pacer::Pacer;
use crate::provider::LyricsProvider;
use crate::store::TableStore;
use std::time::Duration;

pub struct LyricsApi<S: TableStore, P: LyricsProvider, T: Pacer> {
    store: S,
    provider: P,
    pacer: T,
    delay: Duration,
}

impl<S: TableStore, P: LyricsProvider, T: Pacer> LyricsApi<S, P, T> {
    pub fn new(store: S, provider: P, pacer: T, config: &ScraperConfig) -> Self {
        Self {
            store,
            provider,
            pacer,
            delay: config.delay(),
        }
    }

    /// Fill the `Lyrics` column for every row and save the table.
    pub fn fill_lyrics<R: Reporter>(&mut self, reporter: &mut R) -> Result<RunSummary> {
        process::run(
            &mut self.store,
            RunContext {
                provider: &self.provider,
                pacer: &mut self.pacer,
                reporter,
                delay: self.delay,
            },
        )
    }

    /// Look up a single song without touching the table.
    pub fn lookup(&self, artist: &str, title: &str) -> LyricResult {
        fetch::fetch(artist, title, &self.provider)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn pacer(&self) -> &T {
        &self.pacer
    }
}
