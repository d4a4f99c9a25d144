use lyricfill::api::LyricsApi;
use lyricfill::commands::{CmdMessage, MessageLevel};
use lyricfill::config::ScraperConfig;
use lyricfill::error::{LyricsError, Result};
use lyricfill::pacer::RecordingPacer;
use lyricfill::provider::{LyricsProvider, Song};
use lyricfill::store::csv::CsvStore;
use std::cell::RefCell;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

/// Answers from a fixed catalogue; titles listed in `broken` fail outright.
#[derive(Default)]
struct Catalogue {
    songs: Vec<(&'static str, &'static str)>,
    broken: Vec<&'static str>,
    asked: RefCell<Vec<String>>,
}

impl LyricsProvider for Catalogue {
    fn search_song(&self, title: &str, artist: &str) -> Result<Option<Song>> {
        self.asked.borrow_mut().push(title.to_string());
        if self.broken.iter().any(|b| *b == title) {
            return Err(LyricsError::Provider("connection reset".to_string()));
        }
        Ok(self
            .songs
            .iter()
            .find(|(t, _)| *t == title)
            .map(|(t, lyrics)| Song::new(*t, artist, *lyrics)))
    }
}

fn config() -> ScraperConfig {
    ScraperConfig {
        delay_seconds: 0.25,
        ..ScraperConfig::default()
    }
}

fn read_back(path: &std::path::Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let mut rows = vec![reader.headers().unwrap().iter().map(str::to_string).collect()];
    for record in reader.records() {
        rows.push(record.unwrap().iter().map(str::to_string).collect());
    }
    rows
}

#[test]
fn fills_file_in_place() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("playlist.csv");
    fs::write(
        &path,
        "Track,Artists,Year\n\
         Hotline Bling,Drake,2015\n\
         Work (feat. Drake),Rihanna,2016\n\
         Interlude,Someone,2001\n\
         ,Nobody,1999\n",
    )
    .unwrap();

    let provider = Catalogue {
        songs: vec![
            ("Hotline Bling", "You used to call me on my cell phone\nEmbedShare URLCopyEmbedCopy"),
            ("Work", "Work, work, work"),
            ("Interlude", "Instrumental"),
        ],
        ..Catalogue::default()
    };
    let mut messages: Vec<CmdMessage> = Vec::new();
    let mut api = LyricsApi::new(
        CsvStore::new(&path),
        &provider,
        RecordingPacer::default(),
        &config(),
    );

    let summary = api.fill_lyrics(&mut messages).unwrap();

    assert_eq!((summary.processed, summary.errors, summary.skipped), (3, 0, 1));
    assert_eq!(api.pacer().pauses, vec![Duration::from_millis(250); 4]);
    assert_eq!(
        *provider.asked.borrow(),
        vec!["Hotline Bling", "Work", "Interlude"]
    );

    let rows = read_back(&path);
    assert_eq!(rows[0], vec!["Track", "Artists", "Year", "Lyrics"]);
    assert_eq!(rows[1][3], "You used to call me on my cell phone");
    assert_eq!(rows[2][3], "Work, work, work");
    assert_eq!(rows[3][3], "Lyrics Not Available");
    assert_eq!(rows[4][3], "Skipped: Missing data");
    assert_eq!(rows[4][1], "Nobody");

    let last = messages.last().unwrap();
    assert_eq!(
        last.content,
        "Summary: Processed=3, Errors/Not Found=0, Skipped=1"
    );
}

#[test]
fn nothing_found_still_saves_every_row() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("songs.csv");
    fs::write(&path, "Artist,Song,Notes\nA,One,keep\nB,Two,\"multi\nline\"\nC,Three,x\n").unwrap();

    let provider = Catalogue {
        broken: vec!["Two"],
        ..Catalogue::default()
    };
    let mut messages: Vec<CmdMessage> = Vec::new();
    let mut api = LyricsApi::new(
        CsvStore::new(&path),
        &provider,
        RecordingPacer::default(),
        &config(),
    );

    let summary = api.fill_lyrics(&mut messages).unwrap();
    assert_eq!((summary.processed, summary.errors, summary.skipped), (0, 3, 0));

    let rows = read_back(&path);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[2][2], "multi\nline");
    for row in &rows[1..] {
        assert_eq!(row[3], "Lyrics Not Found/Error");
    }
    assert!(messages
        .iter()
        .any(|m| m.level == MessageLevel::Success && m.content.starts_with("Successfully")));
}

#[test]
fn schema_failure_does_not_write() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("songs.csv");
    fs::write(&path, "Name,Album\nA,B\n").unwrap();

    let provider = Catalogue::default();
    let mut api = LyricsApi::new(
        CsvStore::new(&path),
        &provider,
        RecordingPacer::default(),
        &config(),
    );

    let err = api.fill_lyrics(&mut Vec::<CmdMessage>::new()).unwrap_err();
    assert!(matches!(err, LyricsError::Schema { .. }));
    assert!(provider.asked.borrow().is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "Name,Album\nA,B\n");
}
