use serde::{Deserialize, Serialize};

/// A single logged workout row.
///
/// Volume is never stored on the entry: it is always derived from the other
/// three numbers, whatever the volume cell in the document says.
///
/// `date` is the `YYYY-MM-DD` text of the section heading as written, which
/// is not necessarily a real calendar day in a hand-edited log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub date: String,
    pub action: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
}

impl WorkoutEntry {
    pub fn new(
        date: impl ToString,
        action: impl Into<String>,
        sets: u32,
        reps: u32,
        weight: f64,
    ) -> Self {
        Self {
            date: date.to_string(),
            action: action.into(),
            sets,
            reps,
            weight,
        }
    }

    pub fn volume(&self) -> f64 {
        volume(self.sets, self.reps, self.weight)
    }
}

/// Serialized form of an entry, with the derived volume included.
#[derive(Debug, Clone, Serialize)]
pub struct EntryView<'a> {
    pub date: &'a str,
    pub action: &'a str,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
    pub volume: f64,
}

impl<'a> From<&'a WorkoutEntry> for EntryView<'a> {
    fn from(entry: &'a WorkoutEntry) -> Self {
        Self {
            date: &entry.date,
            action: &entry.action,
            sets: entry.sets,
            reps: entry.reps,
            weight: entry.weight,
            volume: entry.volume(),
        }
    }
}

/// Outcome of recording a workout.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
    pub entry: WorkoutEntry,
    pub previous_max: f64,
    pub is_pr: bool,
}

impl RecordOutcome {
    pub fn volume(&self) -> f64 {
        self.entry.volume()
    }
}

pub fn volume(sets: u32, reps: u32, weight: f64) -> f64 {
    f64::from(sets) * f64::from(reps) * weight
}

/// Formats a decimal the way the log writes them: integral values keep a
/// trailing `.0` (`100.0`), everything else uses the shortest form (`62.5`).
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 27).unwrap()
    }

    #[test]
    fn volume_is_sets_times_reps_times_weight() {
        let entry = WorkoutEntry::new(day(), "Squat", 3, 5, 100.0);
        assert_eq!(entry.volume(), 1500.0);
    }

    #[test]
    fn zero_weight_has_zero_volume() {
        let entry = WorkoutEntry::new(day(), "Pull-up", 4, 8, 0.0);
        assert_eq!(entry.volume(), 0.0);
    }

    #[test]
    fn format_decimal_keeps_trailing_zero_for_integral_values() {
        assert_eq!(format_decimal(100.0), "100.0");
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(1500.0), "1500.0");
    }

    #[test]
    fn format_decimal_uses_shortest_form_otherwise() {
        assert_eq!(format_decimal(62.5), "62.5");
        assert_eq!(format_decimal(2.25), "2.25");
    }

    #[test]
    fn entry_view_carries_derived_volume() {
        let entry = WorkoutEntry::new(day(), "Bench", 2, 10, 60.0);
        let view = EntryView::from(&entry);
        assert_eq!(view.date, "2025-10-27");
        assert_eq!(view.volume, 1200.0);
    }
}
