use crate::commands::{CmdMessage, CmdResult};
use crate::document::{append_text, parse_actions, previous_max, DATE_FORMAT};
use crate::error::{LiftlogError, Result};
use crate::model::{format_decimal, RecordOutcome, WorkoutEntry};
use crate::store::DocumentStore;
use chrono::NaiveDate;

/// First registered action containing `query`, ignoring case.
pub fn resolve_action(actions: &[String], query: &str) -> Option<String> {
    let needle = query.to_lowercase();
    actions
        .iter()
        .find(|action| action.to_lowercase().contains(&needle))
        .cloned()
}

pub fn run<S: DocumentStore>(
    store: &mut S,
    query: &str,
    reps: u32,
    weight: f64,
    sets: u32,
    today: NaiveDate,
) -> Result<CmdResult> {
    let content = store.read()?;
    let action = resolve_action(&parse_actions(&content), query)
        .ok_or_else(|| LiftlogError::ActionNotFound(query.to_string()))?;

    // PR is judged against the document as it was before this entry.
    let previous_max = previous_max(&content, &action);
    let entry = WorkoutEntry::new(today.format(DATE_FORMAT), action, sets, reps, weight);
    let outcome = RecordOutcome {
        is_pr: weight > previous_max,
        previous_max,
        entry,
    };
    tracing::debug!(
        action = %outcome.entry.action,
        previous_max,
        is_pr = outcome.is_pr,
        "resolved record"
    );

    store.append(&append_text(&content, &outcome.entry))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "记录成功: {}x{} {} @ {}kg. 训练量: {}kg.",
        sets,
        reps,
        outcome.entry.action,
        format_decimal(weight),
        format_decimal(outcome.volume())
    )));
    if outcome.is_pr {
        result.add_message(CmdMessage::celebrate(format!(
            "🎉 恭喜！你创造了新的个人纪录 (PR) in {} at {}kg! (之前是 {}kg) 🔥",
            outcome.entry.action,
            format_decimal(weight),
            format_decimal(previous_max)
        )));
    }
    Ok(result.with_recorded(outcome))
}
