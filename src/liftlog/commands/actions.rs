use crate::commands::{CmdMessage, CmdResult};
use crate::document::{insert_action, parse_actions};
use crate::error::{LiftlogError, Result};
use crate::store::DocumentStore;

/// Registered actions in declaration order.
pub fn list<S: DocumentStore>(store: &S) -> Result<CmdResult> {
    let actions = parse_actions(&store.read()?);

    let mut result = CmdResult::default();
    if actions.is_empty() {
        result.add_message(CmdMessage::warning(
            "动作列表为空，请使用 'action add' 添加一个。",
        ));
    }
    Ok(result.with_actions(actions))
}

/// Registers `name` at the top of the action list.
///
/// The document is only rewritten once every check has passed.
pub fn add<S: DocumentStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let name = validate_name(name)?;
    let content = store.read()?;

    if parse_actions(&content).iter().any(|existing| existing == name) {
        return Err(LiftlogError::DuplicateAction(name.to_string()));
    }

    let updated = insert_action(&content, name)?;
    store.write(&updated)?;
    tracing::debug!(action = name, "registered action");

    let mut result = CmdResult::default().with_actions(vec![name.to_string()]);
    result.add_message(CmdMessage::success(format!("成功添加动作: '{}'", name)));
    Ok(result)
}

fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LiftlogError::InvalidActionName(
            "name cannot be empty".to_string(),
        ));
    }
    if name.contains(|c: char| matches!(c, '|' | '\n' | '\r')) {
        return Err(LiftlogError::InvalidActionName(format!(
            "'{}' contains '|' or a line break",
            name.escape_debug()
        )));
    }
    Ok(name)
}
