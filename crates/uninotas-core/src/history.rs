//! Per-user record history with semester selection

use serde::Serialize;

use crate::record::CourseRecord;

/// Which semester a history view shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SemesterSelection {
    /// The first semester the user saved anything in
    #[default]
    First,
    /// Every record regardless of semester
    All,
    /// One named semester
    Named(String),
}

/// Records filtered for display, plus the semesters available to pick from
#[derive(Debug, Clone, Serialize)]
pub struct HistoryView {
    pub semesters: Vec<String>,
    pub selected: Option<String>,
    pub records: Vec<CourseRecord>,
}

/// Distinct semester labels in first-seen order
pub fn semesters(records: &[CourseRecord]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for record in records {
        if !seen.iter().any(|s| s == &record.semester) {
            seen.push(record.semester.clone());
        }
    }
    seen
}

/// Build a history view from a user's records (already in insertion order)
pub fn history_view(records: Vec<CourseRecord>, selection: &SemesterSelection) -> HistoryView {
    let semesters = semesters(&records);

    let selected = match selection {
        SemesterSelection::All => None,
        SemesterSelection::First => semesters.first().cloned(),
        SemesterSelection::Named(name) => Some(name.trim().to_string()),
    };

    let records = match &selected {
        Some(semester) => records
            .into_iter()
            .filter(|r| &r.semester == semester)
            .collect(),
        None => records,
    };

    HistoryView {
        semesters,
        selected,
        records,
    }
}
