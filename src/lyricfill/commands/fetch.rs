use crate::model::{LyricResult, STATUS_NOT_AVAILABLE};
use crate::provider::LyricsProvider;
use tracing::{debug, info, warn};

/// Featuring-artist markers, checked in this order. Case-sensitive.
pub const FEATURE_MARKERS: [&str; 4] = [" (feat", " (ft.", " [feat", " [ft."];

/// Junk the provider used to append to lyric text.
pub const EMBED_JUNK: &str = "EmbedShare URLCopyEmbedCopy";

const UNRELEASED_MARKER: &str = "lyrics for this song have yet to be released";
const INSTRUMENTAL_MARKER: &str = "instrumental";
const INSTRUMENTAL_MAX_CHARS: usize = 150;

/// Cut the title at featuring annotations and trim it.
pub fn normalize_title(title: &str) -> &str {
    let mut cut = title;
    for marker in FEATURE_MARKERS {
        if let Some(pos) = cut.find(marker) {
            cut = &cut[..pos];
        }
    }
    cut.trim()
}

/// Look up one song. Never fails: provider errors become [`LyricResult::Error`].
pub fn fetch<P: LyricsProvider>(artist: &str, title: &str, provider: &P) -> LyricResult {
    let artist = artist.trim();
    let cleaned = normalize_title(title);
    info!("Searching for: '{}' by '{}'", cleaned, artist);

    if artist.is_empty() || cleaned.is_empty() {
        debug!("skipping search due to empty artist or cleaned song title");
        return LyricResult::Skipped;
    }

    match provider.search_song(cleaned, artist) {
        Ok(Some(song)) => {
            info!("Found lyrics for '{}' by '{}'", song.title, song.artist);
            if let Some(url) = &song.url {
                debug!(%url, "lyrics source");
            }
            LyricResult::Found(song.lyrics)
        }
        Ok(None) => {
            info!("Lyrics not found for '{}' by '{}'", title, artist);
            LyricResult::NotFound
        }
        Err(e) => {
            warn!("Error getting lyrics for '{}' by '{}': {}", title, artist, e);
            LyricResult::Error(e.to_string())
        }
    }
}

/// Final text for a found song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    Lyrics(String),
    Placeholder,
}

impl Classified {
    pub fn into_cell(self) -> String {
        match self {
            Classified::Lyrics(text) => text,
            Classified::Placeholder => STATUS_NOT_AVAILABLE.to_string(),
        }
    }
}

/// Strip embed junk, trim, and detect "unreleased" / short "instrumental" placeholders.
pub fn classify(raw: &str) -> Classified {
    let cleaned = raw.replace(EMBED_JUNK, "");
    let cleaned = cleaned.trim();
    let lower = cleaned.to_lowercase();

    let unreleased = lower.contains(UNRELEASED_MARKER);
    let instrumental =
        lower.contains(INSTRUMENTAL_MARKER) && cleaned.chars().count() < INSTRUMENTAL_MAX_CHARS;

    if unreleased || instrumental {
        Classified::Placeholder
    } else {
        Classified::Lyrics(cleaned.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::fixtures::{Scripted, ScriptedProvider};

    #[test]
    fn strips_featuring_annotations() {
        assert_eq!(normalize_title("God's Plan (feat. Someone)"), "God's Plan");
        assert_eq!(normalize_title("Song (ft. X)"), "Song");
        assert_eq!(normalize_title("Song [feat. X]"), "Song");
        assert_eq!(normalize_title("Song [ft. X] (Remix)"), "Song");
        assert_eq!(normalize_title("  Plain Song  "), "Plain Song");
    }

    #[test]
    fn markers_are_case_sensitive() {
        assert_eq!(normalize_title("Song (Feat. X)"), "Song (Feat. X)");
        assert_eq!(normalize_title("Song (FT. X)"), "Song (FT. X)");
    }

    #[test]
    fn earliest_marker_wins_regardless_of_check_order() {
        assert_eq!(normalize_title("A [ft. B] (feat. C)"), "A");
    }

    #[test]
    fn normalization_is_idempotent() {
        for title in [
            "God's Plan (feat. Someone)",
            "Song [ft. X] (feat. Y)",
            " spaced (feat",
            "(feat. Only)",
            "Nothing to strip",
        ] {
            let once = normalize_title(title);
            assert_eq!(normalize_title(once), once, "title: {title:?}");
        }
    }

    #[test]
    fn blank_inputs_skip_without_calling_provider() {
        let provider = ScriptedProvider::new();
        assert_eq!(fetch("  ", "Song", &provider), LyricResult::Skipped);
        assert_eq!(fetch("Artist", "   ", &provider), LyricResult::Skipped);
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn passes_normalized_title_to_provider() {
        let provider = ScriptedProvider::new().with_lyrics("God's Plan", "words");
        let result = fetch("Drake", "God's Plan (feat. Someone)", &provider);

        assert_eq!(result, LyricResult::Found("words".to_string()));
        assert_eq!(
            provider.calls.borrow().as_slice(),
            &[("God's Plan".to_string(), "Drake".to_string())]
        );
    }

    #[test]
    fn maps_provider_outcomes() {
        let provider = ScriptedProvider::new()
            .with("Missing", Scripted::NotFound)
            .with("Broken", Scripted::Fail("timeout".into()));

        assert_eq!(fetch("A", "Missing", &provider), LyricResult::NotFound);
        assert!(matches!(
            fetch("A", "Broken", &provider),
            LyricResult::Error(msg) if msg.contains("timeout")
        ));
    }

    #[test]
    fn classify_strips_embed_junk() {
        assert_eq!(
            classify("EmbedShare URLCopyEmbedCopy Some lyrics here"),
            Classified::Lyrics("Some lyrics here".to_string())
        );
        assert_eq!(
            classify("Line\nLine 2EmbedShare URLCopyEmbedCopy\n"),
            Classified::Lyrics("Line\nLine 2".to_string())
        );
    }

    #[test]
    fn unreleased_text_is_a_placeholder() {
        let text = "Lyrics for this song have yet to be released. Please check back once the song has been released.";
        assert_eq!(classify(text), Classified::Placeholder);
    }

    #[test]
    fn short_instrumental_is_a_placeholder() {
        assert_eq!(classify("[Instrumental]"), Classified::Placeholder);
        assert_eq!(
            classify("Instrumental").into_cell(),
            "Lyrics Not Available".to_string()
        );
    }

    #[test]
    fn long_text_mentioning_instrumental_is_kept() {
        let text = format!("{} instrumental break {}", "la ".repeat(60), "la ".repeat(10));
        let expected = text.trim().to_string();
        assert!(expected.chars().count() >= 150);
        assert_eq!(classify(&text), Classified::Lyrics(expected));
    }

    #[test]
    fn instrumental_length_counts_characters_not_bytes() {
        // 149 characters, well over 150 bytes.
        let text = format!("instrumental {}", "é".repeat(136));
        assert_eq!(text.chars().count(), 149);
        assert_eq!(classify(&text), Classified::Placeholder);
    }
}
