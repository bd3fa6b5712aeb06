use crate::commands::{CmdMessage, CmdResult};
use crate::document::parse_entries;
use crate::error::Result;
use crate::model::WorkoutEntry;
use crate::store::DocumentStore;

/// Result of reading the log. `Empty` is distinct from an empty listing so
/// callers print a "no records" notice instead of an empty table.
#[derive(Debug, Clone, PartialEq)]
pub enum History {
    Empty,
    Entries(Vec<WorkoutEntry>),
}

impl History {
    pub fn from_entries(entries: Vec<WorkoutEntry>) -> Self {
        if entries.is_empty() {
            History::Empty
        } else {
            History::Entries(entries)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, History::Empty)
    }
}

/// All entries in file order, optionally narrowed to actions containing
/// `action_filter` (case-insensitive).
pub fn run<S: DocumentStore>(store: &S, action_filter: Option<&str>) -> Result<CmdResult> {
    let mut entries = parse_entries(&store.read()?);
    if let Some(filter) = action_filter {
        let needle = filter.to_lowercase();
        entries.retain(|entry| entry.action.to_lowercase().contains(&needle));
    }

    let history = History::from_entries(entries);
    let mut result = CmdResult::default();
    if history.is_empty() {
        result.add_message(CmdMessage::warning("还没有任何训练记录。"));
    }
    Ok(result.with_history(history))
}
