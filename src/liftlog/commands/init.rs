use crate::commands::{CmdMessage, CmdResult};
use crate::document::TEMPLATE;
use crate::error::Result;
use crate::store::DocumentStore;

/// Creates the log with the default skeleton unless it already exists.
pub fn run<S: DocumentStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.exists() {
        return Ok(result);
    }

    result.add_message(CmdMessage::info(format!(
        "Data file '{}' not found. Creating a new one.",
        store.location()
    )));
    store.write(TEMPLATE)?;
    tracing::debug!(location = %store.location(), "created log document");
    Ok(result)
}
