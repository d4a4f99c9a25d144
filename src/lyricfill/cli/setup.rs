use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lyricfill", bin_name = "lyricfill", version)]
#[command(
    about = "Fill the Lyrics column of a CSV of artist/song pairs from Genius",
    long_about = "Reads a CSV with artist and song columns, looks up each row on Genius \
                  one at a time, and writes the results into a 'Lyrics' column of the same file.\n\n\
                  Requires GENIUS_API_TOKEN in the environment or in a .env file."
)]
pub struct Cli {
    /// CSV file to update in place (prompted for when omitted)
    pub csv_path: Option<String>,

    /// Seconds to wait between rows [default: 10.0]
    #[arg(allow_negative_numbers = true)]
    pub delay: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Extra attempts on timeouts and server errors
    #[arg(long)]
    pub retries: Option<u32>,

    /// Keep [Verse]/[Chorus] headers in the stored lyrics
    #[arg(long)]
    pub keep_section_headers: bool,

    /// Settings file [default: ./lyricfill.json]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
