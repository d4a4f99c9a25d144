//! # Command Layer
//!
//! - [`columns`]: alias-based column resolution and the `Lyrics` column
//! - [`fetch`]: title normalization, the provider call, and lyric classification
//! - [`process`]: the sequential row loop that ties it all together
//!
//! Progress is reported through a [`Reporter`]; nothing here prints.

pub mod columns;
pub mod fetch;
pub mod process;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Receives progress messages as the run goes.
pub trait Reporter {
    fn report(&mut self, message: CmdMessage);
}

/// Collects messages; used by tests and by callers that render after the fact.
impl Reporter for Vec<CmdMessage> {
    fn report(&mut self, message: CmdMessage) {
        self.push(message);
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Reporter for Silent {
    fn report(&mut self, _message: CmdMessage) {}
}
