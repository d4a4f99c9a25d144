use colored::Colorize;
use lyricfill::commands::{CmdMessage, MessageLevel, Reporter};
use lyricfill::error::LyricsError;

/// Prints progress as it happens, colored by level.
pub(super) struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, message: CmdMessage) {
        print_message(&message);
    }
}

pub(super) fn print_message(message: &CmdMessage) {
    match message.level {
        MessageLevel::Info => println!("{}", message.content.dimmed()),
        MessageLevel::Success => println!("{}", message.content.green()),
        MessageLevel::Warning => println!("{}", message.content.yellow()),
        MessageLevel::Error => println!("{}", message.content.red()),
    }
}

pub fn print_error(error: &LyricsError) {
    eprintln!("{}", format!("Error: {}", error).red());
    match error {
        LyricsError::MissingToken { var } => {
            eprintln!();
            eprintln!("You can either:");
            eprintln!("1. Create a .env file with: {var}=your_token_here");
            eprintln!("2. Set the environment variable in your shell");
            eprintln!();
            eprintln!("Get your token at: https://genius.com/api-clients");
        }
        LyricsError::FileNotFound(_) => {
            eprintln!("Please ensure the path is correct and the file exists.");
        }
        _ => {}
    }
}
