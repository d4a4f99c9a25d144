//! Lyric extraction from a Genius song page.
//!
//! The page marks every lyric block with `data-lyrics-container="true"`. Blocks can
//! contain nested `<div>`s, and some nested blocks (contributor counts, the song title
//! header) carry `data-exclude-from-selection="true"` and are not part of the lyrics.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const CONTAINER_MARKER: &str = "data-lyrics-container=\"true\"";
const EXCLUDE_MARKER: &str = "data-exclude-from-selection=\"true\"";

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static NUMERIC_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#(x[0-9a-fA-F]+|[0-9]+);").unwrap());
static SECTION_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]").unwrap());

/// Plain lyric text from a song page, or `None` if the page has no lyric blocks
/// (or only empty ones).
pub fn extract_lyrics(html: &str) -> Option<String> {
    let blocks: Vec<String> = containers(html)
        .into_iter()
        .map(|inner| block_text(&remove_excluded(inner)))
        .collect();

    let text = blocks.join("\n");
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Drop `[Verse 1]`-style headers and collapse the blank lines they leave behind.
pub fn remove_section_headers(lyrics: &str) -> String {
    let without = SECTION_HEADER.replace_all(lyrics, "");
    without.replace("\n\n", "\n").trim_matches('\n').to_string()
}

fn containers(html: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut cursor = 0;

    while let Some(rel) = html[cursor..].find(CONTAINER_MARKER) {
        let marker = cursor + rel;
        let Some(tag_end) = html[marker..].find('>').map(|i| marker + i + 1) else {
            break;
        };
        match closing_div(html, tag_end) {
            Some((inner_end, after)) => {
                found.push(&html[tag_end..inner_end]);
                cursor = after;
            }
            None => {
                found.push(&html[tag_end..]);
                break;
            }
        }
    }

    found
}

/// Find the `</div>` that closes a div whose content starts at `from`.
/// Returns (start of the closing tag, index just past it).
fn closing_div(html: &str, from: usize) -> Option<(usize, usize)> {
    let mut depth = 1usize;
    let mut pos = from;

    loop {
        let rest = &html[pos..];
        let open = next_open_div(rest);
        let close = rest.find("</div");

        match (open, close) {
            (Some(o), Some(c)) if o < c => {
                depth += 1;
                pos += o + 4;
            }
            (_, Some(c)) => {
                depth -= 1;
                let start = pos + c;
                let end = html[start..].find('>').map(|i| start + i + 1)?;
                if depth == 0 {
                    return Some((start, end));
                }
                pos = end;
            }
            (_, None) => return None,
        }
    }
}

fn next_open_div(s: &str) -> Option<usize> {
    let mut offset = 0;
    while let Some(i) = s[offset..].find("<div") {
        let at = offset + i;
        match s.as_bytes().get(at + 4) {
            Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => return Some(at),
            Some(_) => offset = at + 4,
            None => return None,
        }
    }
    None
}

fn remove_excluded(inner: &str) -> String {
    let mut html = inner.to_string();

    while let Some(marker) = html.find(EXCLUDE_MARKER) {
        let Some(start) = html[..marker].rfind("<div") else {
            break;
        };
        let Some(tag_end) = html[marker..].find('>').map(|i| marker + i + 1) else {
            break;
        };
        let end = closing_div(&html, tag_end)
            .map(|(_, after)| after)
            .unwrap_or(html.len());
        html.replace_range(start..end, "");
    }

    html
}

fn block_text(inner: &str) -> String {
    let with_breaks = LINE_BREAK.replace_all(inner, "\n");
    let stripped = TAG.replace_all(&with_breaks, "");
    decode_entities(&stripped)
}

fn decode_entities(text: &str) -> String {
    let numeric = NUMERIC_ENTITY.replace_all(text, |caps: &Captures| {
        let code = &caps[1];
        let value = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse::<u32>().ok(),
        };
        value
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });

    numeric
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
