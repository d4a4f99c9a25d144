use super::interrupt;
use super::print::{print_message, ConsoleReporter};
use super::setup::Cli;
use clap::Parser;
use lyricfill::api::LyricsApi;
use lyricfill::commands::CmdMessage;
use lyricfill::config::{self, ScraperConfig, CONFIG_FILENAME, DEFAULT_DELAY_SECS};
use lyricfill::error::{LyricsError, Result};
use lyricfill::pacer::ThreadPacer;
use lyricfill::provider::genius::GeniusClient;
use lyricfill::store::csv::CsvStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    // A missing .env is fine; the token may come from the shell.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    interrupt::install();

    let token = config::token_from_env()?;
    let csv_path = resolve_path(cli.csv_path.as_deref())?;
    let config = resolve_config(&cli)?;

    print_message(&CmdMessage::info(format!(
        "Using API delay of {:?} seconds between requests",
        config.delay_seconds
    )));

    let provider = GeniusClient::new(token, &config);
    let mut api = LyricsApi::new(CsvStore::new(csv_path), provider, ThreadPacer, &config);
    api.fill_lyrics(&mut ConsoleReporter)?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "lyricfill=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_path(arg: Option<&str>) -> Result<PathBuf> {
    let raw = match arg {
        Some(path) => path.to_string(),
        None => prompt("Enter the path to your CSV file: ")?,
    };
    if raw.is_empty() {
        return Err(LyricsError::Config("CSV file path is required.".to_string()));
    }
    Ok(PathBuf::from(raw))
}

fn prompt(question: &str) -> Result<String> {
    print!("{}", question);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Defaults, then the settings file, then command-line flags.
fn resolve_config(cli: &Cli) -> Result<ScraperConfig> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let mut config = ScraperConfig::load(path)?;
    if !config::is_valid_delay(config.delay_seconds) {
        config.delay_seconds = default_delay_with_warning();
    }

    if let Some(raw) = &cli.delay {
        config.delay_seconds =
            config::parse_delay(raw).unwrap_or_else(default_delay_with_warning);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(retries) = cli.retries {
        config.retries = retries;
    }
    if cli.keep_section_headers {
        config.remove_section_headers = false;
    }
    Ok(config)
}

fn default_delay_with_warning() -> f64 {
    print_message(&CmdMessage::warning(format!(
        "Warning: Invalid delay value, using default {:?} seconds",
        DEFAULT_DELAY_SECS
    )));
    DEFAULT_DELAY_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["lyricfill"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn missing_config() -> String {
        let dir = tempfile::tempdir().unwrap();
        dir.path().join("absent.json").display().to_string()
    }

    #[test]
    fn invalid_delay_falls_back_to_default() {
        let config = resolve_config(&cli(&["--config", &missing_config(), "a.csv", "fast"])).unwrap();
        assert_eq!(config.delay_seconds, 10.0);
    }

    #[test]
    fn delay_argument_overrides_default() {
        let config = resolve_config(&cli(&["--config", &missing_config(), "a.csv", "0.25"])).unwrap();
        assert_eq!(config.delay_seconds, 0.25);
    }

    #[test]
    fn flags_override_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"delay_seconds": 3.0, "timeout_secs": 60, "retries": 5}"#)
            .unwrap();

        let config = resolve_config(&cli(&[
            "--config",
            path.to_str().unwrap(),
            "--retries",
            "1",
            "--keep-section-headers",
            "a.csv",
        ]))
        .unwrap();

        assert_eq!(config.delay_seconds, 3.0);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.retries, 1);
        assert!(!config.remove_section_headers);
    }

    #[test]
    fn unusable_delay_in_settings_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"delay_seconds": -4.0}"#).unwrap();

        let config = resolve_config(&cli(&["--config", path.to_str().unwrap(), "a.csv"])).unwrap();
        assert_eq!(config.delay_seconds, 10.0);

        let config =
            resolve_config(&cli(&["--config", path.to_str().unwrap(), "a.csv", "1.5"])).unwrap();
        assert_eq!(config.delay_seconds, 1.5);
    }

    #[test]
    fn empty_path_argument_is_rejected() {
        assert!(matches!(resolve_path(Some("")), Err(LyricsError::Config(_))));
        assert_eq!(resolve_path(Some("x.csv")).unwrap(), PathBuf::from("x.csv"));
    }
}
