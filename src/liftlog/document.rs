//! # Log Document Grammar
//!
//! The whole log lives in one Markdown file. Its structure is a small,
//! line-oriented grammar:
//!
//! ```text
//! # 我的训练日志                  <- title (heading, level 1)
//!
//! ## 可用动作                     <- registry heading
//! - 深蹲 (Squat)                  <- bullet: one registered action
//!
//! ## 训练目标                     <- goals heading, free-form bullets
//! - 深蹲: 120 kg
//!
//! ## 2025-10-27                   <- date heading
//! | 动作 (Action) | ... |         <- table header row
//! |---------------|-----|         <- table separator
//! | 深蹲 (Squat) | 3 | 5 | 100.0 | 1500.0 |   <- entry row
//! ```
//!
//! Every line is classified independently by [`classify`]. Parsing is
//! permissive: rows that do not decode are skipped, never rejected, so a
//! hand-edited file keeps working as long as the headings stay recognizable.

use crate::error::{LiftlogError, Result};
use crate::model::{format_decimal, WorkoutEntry};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const REGISTRY_TITLE: &str = "可用动作";
pub const REGISTRY_HEADING: &str = "## 可用动作";
pub const GOALS_HEADING: &str = "## 训练目标";
pub const ACTION_HEADER_LABEL: &str = "动作 (Action)";
pub const TABLE_HEADER: &str =
    "| 动作 (Action) | 组数 (Sets) | 次数 (Rps) | 重量 (KG) | 训练量 (Volume) |";
pub const TABLE_SEPARATOR: &str =
    "|---------------|-------------|------------|-----------|-----------------|";

/// Skeleton written when the log does not exist yet.
pub const TEMPLATE: &str = "# 我的训练日志

## 可用动作
- 深蹲 (Squat)
- 卧推 (Bench Press)
- 硬拉 (Deadlift)

## 训练目标
- 深蹲: 120 kg
- 卧推: 100 kg

";

const BULLET: &str = "- ";
const CELL_DELIMITER: char = '|';
const ROW_PARTS: usize = 7;

/// Classification of a single line of the log.
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    Blank,
    Heading { level: usize, text: &'a str },
    Bullet(&'a str),
    TableSeparator,
    /// All parts produced by splitting on `|`, trimmed. A well-formed row
    /// has seven: the empty outer parts plus five data cells.
    TableRow(Vec<&'a str>),
    Text(&'a str),
}

pub fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with('#') {
        let level = trimmed.chars().take_while(|c| *c == '#').count();
        return Line::Heading {
            level,
            text: trimmed[level..].trim(),
        };
    }
    if let Some(item) = trimmed.strip_prefix(BULLET) {
        return Line::Bullet(item);
    }
    if trimmed.starts_with(CELL_DELIMITER) {
        if trimmed.contains("---") {
            return Line::TableSeparator;
        }
        return Line::TableRow(trimmed.split(CELL_DELIMITER).map(str::trim).collect());
    }
    Line::Text(trimmed)
}

/// The `YYYY-MM-DD` text of a `## YYYY-MM-DD` heading.
///
/// Only the shape is checked: a hand-typed `## 2025-02-30` still opens a
/// section, so the rows under it stay visible.
pub fn date_heading(line: &str) -> Option<&str> {
    let rest = line.trim().strip_prefix("## ")?;
    let raw = rest.get(..10)?;
    let shaped = raw.char_indices().all(|(i, c)| match i {
        4 | 7 => c == '-',
        _ => c.is_ascii_digit(),
    });
    if !shaped {
        return None;
    }
    Some(raw)
}

pub fn date_heading_line(date: &str) -> String {
    format!("## {}", date)
}

fn is_registry_heading(line: &str) -> bool {
    matches!(classify(line), Line::Heading { level: 2, text } if text == REGISTRY_TITLE)
}

/// Registered action names in declaration order.
///
/// The registry spans from its heading to the next heading (or the end of
/// the document). A missing section yields an empty list.
pub fn parse_actions(content: &str) -> Vec<String> {
    let mut lines = content.lines();
    if !lines.by_ref().any(is_registry_heading) {
        return Vec::new();
    }

    lines
        .map(classify)
        .take_while(|line| !matches!(line, Line::Heading { .. }))
        .filter_map(|line| match line {
            Line::Bullet(name) => Some(name.to_string()),
            _ => None,
        })
        .collect()
}

/// Returns `content` with `- name` inserted directly below the registry heading.
pub fn insert_action(content: &str, name: &str) -> Result<String> {
    let mut offset = 0;
    for raw in content.split_inclusive('\n') {
        offset += raw.len();
        if !is_registry_heading(raw) {
            continue;
        }

        let mut updated = String::with_capacity(content.len() + name.len() + 4);
        updated.push_str(&content[..offset]);
        if !raw.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str(BULLET);
        updated.push_str(name);
        updated.push('\n');
        updated.push_str(&content[offset..]);
        return Ok(updated);
    }

    Err(LiftlogError::MissingSection(REGISTRY_HEADING.to_string()))
}

/// Data cells of a row that has exactly the expected number of parts.
fn row_cells<'a>(parts: &[&'a str]) -> Option<[&'a str; 5]> {
    if parts.len() != ROW_PARTS {
        return None;
    }
    Some([parts[1], parts[2], parts[3], parts[4], parts[5]])
}

fn parse_weight(cell: &str) -> Option<f64> {
    if cell.is_empty() || !cell.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    cell.parse().ok()
}

fn parse_count(cell: &str) -> Option<u32> {
    if cell.is_empty() || !cell.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    cell.parse().ok()
}

/// Weights of every table row whose action cell is exactly `action`,
/// wherever the row sits in the document.
pub fn recorded_weights(content: &str, action: &str) -> Vec<f64> {
    content
        .lines()
        .filter_map(|line| match classify(line) {
            Line::TableRow(parts) => row_cells(&parts),
            _ => None,
        })
        .filter(|[name, sets, reps, _, _]| {
            *name == action && parse_count(sets).is_some() && parse_count(reps).is_some()
        })
        .filter_map(|[_, _, _, weight, _]| parse_weight(weight))
        .collect()
}

/// Heaviest weight previously logged for `action`, `0.0` when none.
pub fn previous_max(content: &str, action: &str) -> f64 {
    recorded_weights(content, action)
        .into_iter()
        .fold(0.0, f64::max)
}

pub fn has_date_section(content: &str, date: &str) -> bool {
    content
        .lines()
        .filter_map(date_heading)
        .any(|heading| heading == date)
}

pub fn entry_row(entry: &WorkoutEntry) -> String {
    format!(
        "| {} | {} | {} | {} | {} |",
        entry.action,
        entry.sets,
        entry.reps,
        format_decimal(entry.weight),
        format_decimal(entry.volume())
    )
}

/// Text to append at the end of the document for `entry`.
///
/// A date section that already exists only gets the row; the row lands at
/// the end of the file even if other sections follow that date.
pub fn append_text(content: &str, entry: &WorkoutEntry) -> String {
    let row = entry_row(entry);
    if has_date_section(content, &entry.date) {
        format!("\n{}", row)
    } else {
        format!(
            "\n\n{}\n{}\n{}\n{}",
            date_heading_line(&entry.date),
            TABLE_HEADER,
            TABLE_SEPARATOR,
            row
        )
    }
}

fn decode_row(date: &str, parts: &[&str]) -> Option<WorkoutEntry> {
    let [action, sets, reps, weight, _volume] = row_cells(parts)?;
    if action.is_empty() || action == ACTION_HEADER_LABEL {
        return None;
    }
    Some(WorkoutEntry::new(
        date,
        action,
        parse_count(sets)?,
        parse_count(reps)?,
        parse_weight(weight)?,
    ))
}

/// Every entry row in file order, tagged with the nearest preceding date
/// heading. Rows before any date heading, and rows that do not decode, are
/// skipped.
pub fn parse_entries(content: &str) -> Vec<WorkoutEntry> {
    let mut current_date: Option<&str> = None;
    let mut entries = Vec::new();

    for (number, line) in content.lines().enumerate() {
        if let Some(date) = date_heading(line) {
            current_date = Some(date);
            continue;
        }

        let Some(date) = current_date else {
            continue;
        };
        if let Line::TableRow(parts) = classify(line) {
            match decode_row(date, &parts) {
                Some(entry) => entries.push(entry),
                None => tracing::debug!(line = number + 1, "skipping row"),
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn classifies_lines() {
        assert_eq!(classify("   "), Line::Blank);
        assert_eq!(
            classify("## 可用动作"),
            Line::Heading {
                level: 2,
                text: "可用动作"
            }
        );
        assert_eq!(classify("- 深蹲 (Squat)"), Line::Bullet("深蹲 (Squat)"));
        assert_eq!(classify(TABLE_SEPARATOR), Line::TableSeparator);
        assert_eq!(
            classify("| A | 1 | 2 | 3.0 | 6.0 |"),
            Line::TableRow(vec!["", "A", "1", "2", "3.0", "6.0", ""])
        );
        assert_eq!(classify("just words"), Line::Text("just words"));
    }

    #[test]
    fn date_heading_requires_shape() {
        assert_eq!(date_heading("## 2025-10-27"), Some("2025-10-27"));
        assert!(date_heading("## 可用动作").is_none());
        assert!(date_heading("### 2025-10-27").is_none());
        assert!(date_heading("## 2025-1-27").is_none());
    }

    #[test]
    fn impossible_dates_are_still_headings() {
        assert_eq!(date_heading("## 2025-02-30"), Some("2025-02-30"));
    }

    #[test]
    fn parses_template_actions_in_order() {
        assert_eq!(
            parse_actions(TEMPLATE),
            vec!["深蹲 (Squat)", "卧推 (Bench Press)", "硬拉 (Deadlift)"]
        );
    }

    #[test]
    fn registry_ends_at_next_heading() {
        let doc = "## 可用动作\n- A\nnot a bullet\n- B\n## Other\n- C\n";
        assert_eq!(parse_actions(doc), vec!["A", "B"]);
    }

    #[test]
    fn registry_may_run_to_end_of_document() {
        let doc = "# t\n\n## 可用动作\n- A\n- B";
        assert_eq!(parse_actions(doc), vec!["A", "B"]);
    }

    #[test]
    fn missing_registry_yields_no_actions() {
        assert!(parse_actions("# title\n\n## 训练目标\n- x\n").is_empty());
        assert!(parse_actions("").is_empty());
    }

    #[test]
    fn insert_action_prepends_in_section() {
        let updated = insert_action(TEMPLATE, "引体向上 (Pull-up)").unwrap();
        assert_eq!(parse_actions(&updated)[0], "引体向上 (Pull-up)");
        assert!(updated.contains("## 可用动作\n- 引体向上 (Pull-up)\n- 深蹲 (Squat)\n"));
        assert!(updated.ends_with("- 卧推: 100 kg\n\n"));
    }

    #[test]
    fn insert_action_handles_heading_on_last_line() {
        let updated = insert_action("# t\n## 可用动作", "A").unwrap();
        assert_eq!(updated, "# t\n## 可用动作\n- A\n");
    }

    #[test]
    fn insert_action_without_heading_fails() {
        let err = insert_action("# t\n\n## 训练目标\n", "A").unwrap_err();
        assert!(matches!(err, LiftlogError::MissingSection(_)));
    }

    #[test]
    fn previous_max_scans_exact_action_rows() {
        let doc = "\
## 2025-10-26
| 深蹲 (Squat) | 3 | 5 | 100.0 | 1500.0 |
| 深蹲 (Squat) | 1 | 1 | 140.5 | 140.5 |
| 深蹲 (Squat) extra | 1 | 1 | 200.0 | 200.0 |
| 卧推 (Bench Press) | 1 | 1 | 300.0 | 300.0 |
";
        assert_eq!(previous_max(doc, "深蹲 (Squat)"), 140.5);
        assert_eq!(previous_max(doc, "硬拉 (Deadlift)"), 0.0);
    }

    #[test]
    fn append_text_creates_section_when_date_is_new() {
        let entry = WorkoutEntry::new(date(2025, 10, 27), "深蹲 (Squat)", 3, 5, 100.0);
        let text = append_text(TEMPLATE, &entry);
        assert_eq!(
            text,
            format!(
                "\n\n## 2025-10-27\n{}\n{}\n| 深蹲 (Squat) | 3 | 5 | 100.0 | 1500.0 |",
                TABLE_HEADER, TABLE_SEPARATOR
            )
        );
    }

    #[test]
    fn append_text_only_adds_row_for_existing_date() {
        let doc = format!("{}\n\n## 2025-10-27\n{}\n", TEMPLATE, TABLE_HEADER);
        let entry = WorkoutEntry::new(date(2025, 10, 27), "A", 1, 2, 2.5);
        assert_eq!(append_text(&doc, &entry), "\n| A | 1 | 2 | 2.5 | 5.0 |");
    }

    #[test]
    fn parse_entries_tags_rows_with_preceding_date() {
        let doc = format!(
            "| stray | 1 | 1 | 1.0 | 1.0 |\n{}\n## 2025-10-26\n{}\n{}\n| A | 1 | 2 | 3.0 | 6.0 |\n\n## 2025-10-27\n{}\n{}\n| B | 2 | 2 | 10.0 | 40.0 |\n",
            TEMPLATE, TABLE_HEADER, TABLE_SEPARATOR, TABLE_HEADER, TABLE_SEPARATOR
        );
        let entries = parse_entries(&doc);
        assert_eq!(
            entries,
            vec![
                WorkoutEntry::new(date(2025, 10, 26), "A", 1, 2, 3.0),
                WorkoutEntry::new(date(2025, 10, 27), "B", 2, 2, 10.0),
            ]
        );
    }

    #[test]
    fn parse_entries_skips_malformed_rows() {
        let doc = "\
## 2025-10-27
| A | 1 | 2 | 3.0 |
| | 1 | 2 | 3.0 | 6.0 |
| B | x | 2 | 3.0 | 6.0 |
| C | 1 | 2 | 3.0 | 6.0 |
";
        let entries = parse_entries(doc);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, "C");
    }

    #[test]
    fn rows_under_impossible_date_are_kept() {
        let doc = "## 2025-10-26\n| A | 1 | 1 | 1.0 | 1.0 |\n## 2025-02-30\n| B | 1 | 2 | 3.0 | 6.0 |\n";
        let entries = parse_entries(doc);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].action, "B");
        assert_eq!(entries[1].date, "2025-02-30");
        assert_eq!(entries[1].volume(), 6.0);
    }

    #[test]
    fn volume_cell_is_ignored_when_reading() {
        let doc = "## 2025-10-27\n| A | 3 | 5 | 100.0 | 9 |\n";
        let entries = parse_entries(doc);
        assert_eq!(entries[0].volume(), 1500.0);
    }
}
