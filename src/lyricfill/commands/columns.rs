use crate::error::{LyricsError, Result};
use crate::model::{Table, LYRICS_COLUMN};

/// A logical column and the header names (lowercase) that can stand for it.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRole {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

pub const ARTIST_ROLE: ColumnRole = ColumnRole {
    name: "artist",
    aliases: &["artist", "artists"],
};

pub const SONG_ROLE: ColumnRole = ColumnRole {
    name: "song",
    aliases: &["song", "title", "song title", "track"],
};

impl ColumnRole {
    /// First header, in file order, whose lowercase form is one of the aliases.
    pub fn find(&self, headers: &[String]) -> Option<usize> {
        headers
            .iter()
            .position(|h| self.aliases.contains(&h.to_lowercase().as_str()))
    }
}

/// Positions of the artist and song columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceColumns {
    pub artist: usize,
    pub song: usize,
}

pub fn resolve(table: &Table) -> Result<SourceColumns> {
    let headers = table.headers();
    match (ARTIST_ROLE.find(headers), SONG_ROLE.find(headers)) {
        (Some(artist), Some(song)) => Ok(SourceColumns { artist, song }),
        _ => Err(LyricsError::Schema {
            found: headers.to_vec(),
        }),
    }
}

/// Index of the `Lyrics` column and whether it had to be added.
pub fn ensure_lyrics_column(table: &mut Table) -> (usize, bool) {
    match table.column_index(LYRICS_COLUMN) {
        Some(idx) => (idx, false),
        None => (table.add_column(LYRICS_COLUMN), true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str]) -> Table {
        Table::new(headers.iter().map(|s| s.to_string()).collect(), vec![]).unwrap()
    }

    #[test]
    fn resolves_aliases_case_insensitively() {
        let cols = resolve(&table(&["Artists", "Track"])).unwrap();
        assert_eq!(cols, SourceColumns { artist: 0, song: 1 });

        let cols = resolve(&table(&["Year", "SONG TITLE", "ARTIST"])).unwrap();
        assert_eq!(cols, SourceColumns { artist: 2, song: 1 });
    }

    #[test]
    fn first_matching_column_wins() {
        let cols = resolve(&table(&["Title", "Artist", "Song", "artists"])).unwrap();
        assert_eq!(cols, SourceColumns { artist: 1, song: 0 });
    }

    #[test]
    fn aliases_must_match_whole_header() {
        let err = resolve(&table(&["Artist Name", "Song"])).unwrap_err();
        match err {
            LyricsError::Schema { found } => assert_eq!(found, vec!["Artist Name", "Song"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_song_column_is_a_schema_error() {
        assert!(matches!(
            resolve(&table(&["Artist", "Album"])),
            Err(LyricsError::Schema { .. })
        ));
    }

    #[test]
    fn lyrics_column_added_once() {
        let mut t = table(&["Artist", "Song"]);
        assert_eq!(ensure_lyrics_column(&mut t), (2, true));
        assert_eq!(ensure_lyrics_column(&mut t), (2, false));
        assert_eq!(t.headers().len(), 3);
    }

    #[test]
    fn lyrics_column_match_is_exact() {
        let mut t = table(&["Artist", "Song", "lyrics"]);
        assert_eq!(ensure_lyrics_column(&mut t), (3, true));
    }
}
