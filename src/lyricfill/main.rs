//! # Lyricfill CLI
//!
//! The binary is intentionally thin: argument parsing, prompting and printing live in
//! `src/lyricfill/cli/`, while this file only invokes `cli::run()` and handles process
//! termination. Everything the run actually does is in the library (see `lib.rs`).

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::print_error(&e);
        std::process::exit(1);
    }
}
