//! The row loop.
//!
//! Per row, in file order:
//!
//! ```text
//! blank artist/title ──────────────▶ "Skipped: Missing data"        skipped += 1
//! fetch ─┬─ Found(text) ─ classify ─▶ lyrics | "Lyrics Not Available" processed += 1
//!        │               write fails ▶ "Error writing lyrics"        errors += 1
//!        └─ NotFound/Skipped/Error ─▶ "Lyrics Not Found/Error"      errors += 1
//! anything else fails or panics ───▶ "Error processing row"         errors += 1
//! ```
//!
//! Every branch ends with exactly one pause of the configured delay. The table is
//! saved once, after the last row.

use super::columns::{self, SourceColumns};
use super::fetch::{self, Classified};
use super::{CmdMessage, Reporter};
use crate::error::Result;
use crate::model::{
    ColumnMap, LyricResult, RowOutcome, RunSummary, Table, STATUS_NOT_FOUND, STATUS_ROW_ERROR,
    STATUS_SKIPPED, STATUS_WRITE_ERROR,
};
use crate::pacer::Pacer;
use crate::provider::LyricsProvider;
use crate::store::TableStore;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;
use tracing::{error, warn};

pub struct RunContext<'a, P, T, R> {
    pub provider: &'a P,
    pub pacer: &'a mut T,
    pub reporter: &'a mut R,
    pub delay: Duration,
}

/// Load, resolve columns, process every row, save. Returns the counters.
///
/// File-level failures (load, schema, save) are returned as errors. Row-level
/// failures are recorded in the row and counted.
pub fn run<S, P, T, R>(store: &mut S, ctx: RunContext<'_, P, T, R>) -> Result<RunSummary>
where
    S: TableStore,
    P: LyricsProvider,
    T: Pacer,
    R: Reporter,
{
    let RunContext {
        provider,
        pacer,
        reporter,
        delay,
    } = ctx;
    let location = store.location().display().to_string();

    reporter.report(CmdMessage::info(format!(
        "Attempting to load CSV file: {}",
        location
    )));
    let mut table = store.load()?;
    reporter.report(CmdMessage::info(format!(
        "CSV loaded successfully. Shape: ({}, {})",
        table.len(),
        table.headers().len()
    )));

    let SourceColumns { artist, song } = columns::resolve(&table)?;
    reporter.report(CmdMessage::info(format!(
        "Using columns: Artist='{}', Song='{}'",
        table.headers()[artist],
        table.headers()[song]
    )));

    let (lyrics, added) = columns::ensure_lyrics_column(&mut table);
    if added {
        reporter.report(CmdMessage::info("Added 'Lyrics' column to dataframe."));
    }
    let map = ColumnMap {
        artist,
        song,
        lyrics,
    };

    reporter.report(CmdMessage::info(format!(
        "Starting to process {} songs...",
        table.len()
    )));

    let mut summary = RunSummary::default();
    for idx in 0..table.len() {
        let outcome = guarded_row(&mut table, idx, map, provider, reporter);
        summary = summary.record(&outcome);

        reporter.report(CmdMessage::info(format!(
            "Waiting for {:?} seconds before next row...",
            delay.as_secs_f64()
        )));
        pacer.pause(delay);
    }

    reporter.report(CmdMessage::info("Saving CSV file..."));
    if let Err(e) = store.save(&table) {
        reporter.report(CmdMessage::error(format!(
            "Could not save {}: {}",
            location, e
        )));
        return Err(e);
    }
    reporter.report(CmdMessage::success(format!(
        "Successfully processed and saved file: {}",
        location
    )));
    reporter.report(CmdMessage::success(format!(
        "Summary: Processed={}, Errors/Not Found={}, Skipped={}",
        summary.processed, summary.errors, summary.skipped
    )));

    Ok(summary)
}

/// Catch-all boundary around one row: errors and panics become "Error processing row".
fn guarded_row<P: LyricsProvider, R: Reporter>(
    table: &mut Table,
    idx: usize,
    map: ColumnMap,
    provider: &P,
    reporter: &mut R,
) -> RowOutcome {
    let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
        process_row(&mut *table, idx, map, provider, &mut *reporter)
    }));

    let failure = match attempt {
        Ok(Ok(outcome)) => return outcome,
        Ok(Err(e)) => e.to_string(),
        Err(payload) => panic_message(payload.as_ref()),
    };

    error!(row = idx, "critical error processing row: {}", failure);
    reporter.report(CmdMessage::error(format!(
        "!!! Critical error processing row {} !!! {}",
        idx, failure
    )));
    if let Err(e) = table.set_cell(idx, map.lyrics, STATUS_ROW_ERROR) {
        reporter.report(CmdMessage::error(format!(
            "Could not write error status for row {}: {}",
            idx, e
        )));
    }
    RowOutcome::Failed
}

/// Handle one row. Errors returned here are caught by [`guarded_row`].
pub fn process_row<P: LyricsProvider, R: Reporter>(
    table: &mut Table,
    idx: usize,
    map: ColumnMap,
    provider: &P,
    reporter: &mut R,
) -> Result<RowOutcome> {
    let artist = cell(table, idx, map.artist)?.trim().to_string();
    let title = cell(table, idx, map.song)?.trim().to_string();

    if artist.is_empty() || title.is_empty() {
        reporter.report(CmdMessage::warning(format!(
            "Skipping row {} because artist ('{}') or song title ('{}') is missing or empty.",
            idx, artist, title
        )));
        table.set_cell(idx, map.lyrics, STATUS_SKIPPED)?;
        return Ok(RowOutcome::Skipped);
    }

    reporter.report(CmdMessage::info(format!(
        "Processing row {}: '{}' - '{}'",
        idx, artist, title
    )));

    let raw = match fetch::fetch(&artist, &title, provider) {
        LyricResult::Found(text) if !text.is_empty() => text,
        other => {
            if let LyricResult::Error(reason) = &other {
                reporter.report(CmdMessage::warning(format!(
                    "Error getting lyrics for '{}' by '{}': {}",
                    title, artist, reason
                )));
            }
            reporter.report(CmdMessage::warning(format!(
                "No lyrics found or error occurred for row {}.",
                idx
            )));
            table.set_cell(idx, map.lyrics, STATUS_NOT_FOUND)?;
            return Ok(RowOutcome::NotFound);
        }
    };

    let classified = fetch::classify(&raw);
    let placeholder = classified == Classified::Placeholder;
    if placeholder {
        reporter.report(CmdMessage::warning(format!(
            "Found placeholder/instrumental text for '{}'",
            title
        )));
    }

    match table.set_cell(idx, map.lyrics, classified.into_cell()) {
        Ok(()) => {
            if !placeholder {
                reporter.report(CmdMessage::success(format!(
                    "Stored lyrics for '{}' by '{}'",
                    title, artist
                )));
            }
            Ok(RowOutcome::Stored { placeholder })
        }
        Err(e) => {
            warn!(row = idx, "error writing lyrics: {}", e);
            reporter.report(CmdMessage::error(format!(
                "Error writing lyrics for '{}': {}",
                title, e
            )));
            if let Err(e) = table.set_cell(idx, map.lyrics, STATUS_WRITE_ERROR) {
                reporter.report(CmdMessage::error(format!(
                    "Could not write error status for row {}: {}",
                    idx, e
                )));
            }
            Ok(RowOutcome::WriteFailed)
        }
    }
}

fn cell(table: &Table, row: usize, column: usize) -> Result<&str> {
    table
        .cell(row, column)
        .ok_or(crate::error::LyricsError::Cell { row, column })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic during row processing".to_string()
    }
}
