use crate::scoring::Entry;

pub mod cd;
pub mod clean;
pub mod forget;
pub mod helpers;
pub mod pinning;
pub mod top;
pub mod visit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
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
}

/// Structured outcome of a command. The CLI decides how to print it.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Entries touched or listed, in display order.
    pub entries: Vec<Entry>,
    /// Pins as `(name, path)`, sorted by name.
    pub pins: Vec<(String, String)>,
    /// Directory the shell should change into.
    pub target: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_pins(mut self, pins: Vec<(String, String)>) -> Self {
        self.pins = pins;
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}
