//! # Rendering
//!
//! Turns command results into terminal text. Layout math (column widths,
//! padding) is done on plain strings with `unicode-width`, since exercise
//! names are often CJK and take two columns per glyph. Color is applied
//! after padding so escape codes never skew the widths.

use colored::Colorize;
use liftlog::api::{CmdMessage, MessageLevel};
use liftlog::model::{format_decimal, EntryView, WorkoutEntry};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub const ACTIONS_HEADER: &str = "可用动作 (Available Actions)";
pub const HISTORY_TITLE: &str = "训练历史记录";
pub const HISTORY_HEADERS: [&str; 6] = [
    "日期 (Date)",
    "动作 (Action)",
    "组数 (Sets)",
    "次数 (Reps)",
    "重量 (KG)",
    "训练量 (Volume)",
];

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Celebrate => message.content.yellow().bold(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// A bordered table. Every row must have as many cells as `headers`.
pub fn render_table(title: Option<&str>, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let border = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(mid), right)
    };
    let line = |cells: Vec<String>| format!("│ {} │\n", cells.join(" │ "));

    let mut output = String::new();
    if let Some(title) = title {
        let total: usize = widths.iter().map(|w| w + 3).sum::<usize>() + 1;
        let indent = total.saturating_sub(title.width()) / 2;
        output.push_str(&format!("{}{}\n", " ".repeat(indent), title.bold()));
    }

    output.push_str(&border("┌", "┬", "┐"));
    output.push_str(&line(
        headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(h, *w).bold().to_string())
            .collect(),
    ));
    output.push_str(&border("├", "┼", "┤"));
    for row in rows {
        output.push_str(&line(
            row.iter().zip(&widths).map(|(c, w)| pad(c, *w)).collect(),
        ));
    }
    output.push_str(&border("└", "┴", "┘"));
    output
}

fn pad(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

pub fn render_actions(actions: &[String]) -> String {
    let rows: Vec<Vec<String>> = actions.iter().map(|a| vec![a.clone()]).collect();
    render_table(None, &[ACTIONS_HEADER], &rows)
}

pub fn render_history(entries: &[WorkoutEntry]) -> String {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            vec![
                entry.date.clone(),
                entry.action.clone(),
                entry.sets.to_string(),
                entry.reps.to_string(),
                format_decimal(entry.weight),
                format_decimal(entry.volume()),
            ]
        })
        .collect();
    render_table(Some(HISTORY_TITLE), &HISTORY_HEADERS, &rows)
}

pub fn render_history_json(entries: &[WorkoutEntry]) -> serde_json::Result<String> {
    let views: Vec<EntryView<'_>> = entries.iter().map(EntryView::from).collect();
    serde_json::to_string_pretty(&views)
}
