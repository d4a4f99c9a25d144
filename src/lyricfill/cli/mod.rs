//! # CLI Behavior
//!
//! This is **one possible UI client** for lyricfill, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Invocation
//!
//! ```text
//! lyricfill [CSV_PATH] [DELAY] [--timeout SECS] [--retries N] [--keep-section-headers]
//!           [--config PATH] [-v]
//! ```
//!
//! - Without `CSV_PATH` the user is prompted for one; an empty answer is an error.
//! - `DELAY` is lenient: anything that is not a non-negative number prints a warning
//!   and falls back to 10 seconds.
//! - `GENIUS_API_TOKEN` must be set, in the shell or in `.env`. It is checked before
//!   any file is touched.
//!
//! ## Exit Codes
//!
//! - `0`: the run finished (or was interrupted with Ctrl-C)
//! - `1`: missing token or path, or a file-level failure (missing file, bad CSV,
//!   no artist/song columns, save failed)
//!
//! ## Module Structure
//!
//! - `commands`: config resolution and the single run handler
//! - `interrupt`: Ctrl-C listener
//! - `print`: colored progress and error output
//! - `setup`: argument parsing via clap

mod commands;
mod interrupt;
mod print;
pub mod setup;

pub use commands::run;
pub use print::print_error;
