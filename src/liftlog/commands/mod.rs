use crate::model::{RecordOutcome, WorkoutEntry};

pub mod actions;
pub mod history;
pub mod init;
pub mod record;

pub use history::History;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Celebrate,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    pub fn celebrate(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Celebrate, content)
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub actions: Vec<String>,
    pub history: Option<History>,
    pub recorded: Option<RecordOutcome>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_actions(mut self, actions: Vec<String>) -> Self {
        self.actions = actions;
        self
    }

    pub fn with_history(mut self, history: History) -> Self {
        self.history = Some(history);
        self
    }

    pub fn with_recorded(mut self, outcome: RecordOutcome) -> Self {
        self.recorded = Some(outcome);
        self
    }

    /// Entries listed by `history`, empty for every other command
    pub fn entries(&self) -> &[WorkoutEntry] {
        match &self.history {
            Some(History::Entries(entries)) => entries,
            _ => &[],
        }
    }
}
