//! # Lyricfill Architecture
//!
//! Lyricfill fills a `Lyrics` column in a CSV file of (artist, song) rows by asking a
//! lyrics provider for every row, one row at a time, with a fixed pause in between.
//! It is a library that happens to have a CLI client: the binary only parses arguments,
//! prints progress and picks an exit code.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints colored progress       │
//! │  - The ONLY place that knows about stdout/exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store, the provider and the pacer               │
//! │  - Returns structured `RunSummary` values                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Column resolution, title normalization, classification   │
//! │  - The sequential row loop                                  │
//! └─────────────────────────────────────────────────────────────┘
//!                  │                       │
//!                  ▼                       ▼
//! ┌──────────────────────────┐  ┌──────────────────────────────┐
//! │  Store (store/)          │  │  Provider (provider/)        │
//! │  - TableStore trait      │  │  - LyricsProvider trait      │
//! │  - CsvStore, InMemory    │  │  - GeniusClient (ureq)       │
//! └──────────────────────────┘  └──────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout and never exits the process.
//! Progress leaves the core as [`commands::CmdMessage`] values handed to a
//! [`commands::Reporter`]; diagnostics go through `tracing`.
//!
//! ## Row Failures Never Abort a Run
//!
//! Every row ends with exactly one status written into its `Lyrics` cell and exactly
//! one pause. Provider errors, write errors and even panics inside the provider are
//! turned into status strings for that row only. Only file-level problems (missing
//! file, unparseable CSV, unresolvable columns, failed save) stop the run.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade used by the CLI
//! - [`commands`]: Column resolution, fetch/classify, the row loop
//! - [`store`]: Table persistence (CSV on disk, in-memory for tests)
//! - [`provider`]: Lyrics provider abstraction and the Genius client
//! - [`pacer`]: The fixed delay between rows
//! - [`model`]: `Table`, `LyricResult`, `RowOutcome`, `RunSummary`
//! - [`config`]: Token lookup and `lyricfill.json` settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod pacer;
pub mod provider;
pub mod store;
