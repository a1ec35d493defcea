//! Persisted course results
//!
//! A record captures one calculation a signed-in user chose to keep: the two
//! known scores, the computed outcome and the semester it belongs to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grade::{compute_required_grade_for, AssessmentScore, RequiredGrade};
use crate::id::{RecordId, UserId};

/// A saved course result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: RecordId,
    pub owner: UserId,
    pub course_name: String,
    pub first_score: AssessmentScore,
    pub second_score: AssessmentScore,
    pub outcome: RequiredGrade,
    pub semester: String,
    pub created_at: DateTime<Utc>,
}

/// Input for building a new record
#[derive(Debug, Clone)]
pub struct NewCourseRecord<'a> {
    pub owner: &'a UserId,
    pub course_name: &'a str,
    pub semester: &'a str,
    pub first_score: AssessmentScore,
    pub second_score: AssessmentScore,
}

impl CourseRecord {
    /// Build a record, computing its outcome from the two scores.
    ///
    /// Course name and semester are trimmed and must not be blank.
    pub fn create(input: NewCourseRecord<'_>) -> Result<Self> {
        let course_name = input.course_name.trim();
        if course_name.is_empty() {
            crate::bail_invalid!("course name", "(empty)");
        }

        let semester = input.semester.trim();
        if semester.is_empty() {
            crate::bail_invalid!("semester", "(empty)");
        }

        Ok(CourseRecord {
            id: RecordId::generate(),
            owner: input.owner.clone(),
            course_name: course_name.to_string(),
            first_score: input.first_score,
            second_score: input.second_score,
            outcome: compute_required_grade_for(input.first_score, input.second_score),
            semester: semester.to_string(),
            created_at: Utc::now(),
        })
    }
}
