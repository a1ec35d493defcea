//! Cross-semester comparison of saved results

use std::collections::BTreeMap;

use serde::Serialize;

use crate::grade::RequiredGrade;
use crate::record::CourseRecord;

/// Summary of one semester's saved courses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterStatistics {
    pub semester: String,
    pub course_count: usize,
    /// Courses already passed with the first two components
    pub passed_count: usize,
    /// Courses where passing is impossible
    pub failed_count: usize,
    /// Mean requirement over courses that still need a score
    pub average_required: Option<f64>,
    pub passed_pct: u32,
    pub failed_pct: u32,
}

fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

/// Group records by semester, sorted by semester label
///
/// Labels compare case-insensitively, so `a-2023` sorts before `B-2023`.
/// Labels that differ only in case keep byte order between them.
pub fn compare_semesters(records: &[CourseRecord]) -> Vec<SemesterStatistics> {
    let mut groups: BTreeMap<&str, Vec<&CourseRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(&record.semester).or_default().push(record);
    }

    let mut stats: Vec<SemesterStatistics> = groups
        .into_iter()
        .map(|(semester, group)| {
            let course_count = group.len();
            let passed_count = group
                .iter()
                .filter(|r| r.outcome.is_already_passed())
                .count();
            let failed_count = group.iter().filter(|r| r.outcome.is_impossible()).count();

            let required: Vec<f64> = group
                .iter()
                .filter_map(|r| match r.outcome {
                    RequiredGrade::Required(v) => Some(v),
                    _ => None,
                })
                .collect();
            let average_required = (!required.is_empty())
                .then(|| required.iter().sum::<f64>() / required.len() as f64);

            SemesterStatistics {
                semester: semester.to_string(),
                course_count,
                passed_count,
                failed_count,
                average_required,
                passed_pct: percentage(passed_count, course_count),
                failed_pct: percentage(failed_count, course_count),
            }
        })
        .collect();

    stats.sort_by_cached_key(|s| (s.semester.to_lowercase(), s.semester.clone()));
    stats
}
