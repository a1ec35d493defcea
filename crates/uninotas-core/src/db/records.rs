//! Course record persistence

use rusqlite::{params, OptionalExtension, Row};

use super::{parse_timestamp, Database};
use crate::error::{Result, UninotasError};
use crate::grade::{AssessmentScore, RequiredGrade};
use crate::id::{RecordId, UserId};
use crate::record::CourseRecord;
use crate::repository::RecordRepository;

const SELECT_COLUMNS: &str = "id, owner, course_name, first_score, second_score, \
     outcome, required_score, semester, created_at";

fn outcome_columns(outcome: &RequiredGrade) -> (&'static str, Option<f64>) {
    match outcome {
        RequiredGrade::Required(v) => (outcome.status(), Some(*v)),
        _ => (outcome.status(), None),
    }
}

fn outcome_from_columns(status: &str, value: Option<f64>) -> Result<RequiredGrade> {
    match (status, value) {
        ("impossible", None) => Ok(RequiredGrade::Impossible),
        ("already_passed", None) => Ok(RequiredGrade::AlreadyPassed),
        ("required", Some(v)) => Ok(RequiredGrade::Required(v)),
        _ => Err(UninotasError::InvalidStore {
            reason: format!("inconsistent outcome {:?} with value {:?}", status, value),
        }),
    }
}

fn score_from_column(column: &str, hundredths: i64) -> Result<AssessmentScore> {
    u16::try_from(hundredths)
        .ok()
        .and_then(AssessmentScore::from_hundredths)
        .ok_or_else(|| UninotasError::InvalidStore {
            reason: format!("{} out of range: {}", column, hundredths),
        })
}

struct RawRecord {
    id: String,
    owner: String,
    course_name: String,
    first_score: i64,
    second_score: i64,
    outcome: String,
    required_score: Option<f64>,
    semester: String,
    created_at: String,
}

impl RawRecord {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(RawRecord {
            id: row.get(0)?,
            owner: row.get(1)?,
            course_name: row.get(2)?,
            first_score: row.get(3)?,
            second_score: row.get(4)?,
            outcome: row.get(5)?,
            required_score: row.get(6)?,
            semester: row.get(7)?,
            created_at: row.get(8)?,
        })
    }

    fn into_record(self) -> Result<CourseRecord> {
        Ok(CourseRecord {
            id: RecordId::parse(&self.id)?,
            owner: UserId::parse(&self.owner)?,
            course_name: self.course_name,
            first_score: score_from_column("first_score", self.first_score)?,
            second_score: score_from_column("second_score", self.second_score)?,
            outcome: outcome_from_columns(&self.outcome, self.required_score)?,
            semester: self.semester,
            created_at: parse_timestamp("created_at", &self.created_at)?,
        })
    }
}

impl Database {
    /// Look up a single record by ID
    pub fn get_record(&self, id: &RecordId) -> Result<Option<CourseRecord>> {
        let sql = format!("SELECT {} FROM records WHERE id = ?1", SELECT_COLUMNS);
        let raw = self
            .conn
            .query_row(&sql, [id.as_str()], RawRecord::from_row)
            .optional()?;
        raw.map(RawRecord::into_record).transpose()
    }

    /// Number of stored records across all owners
    #[cfg(test)]
    pub(crate) fn count_records(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM records", [], |r| r.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

impl RecordRepository for Database {
    #[tracing::instrument(skip(self), fields(owner = %owner))]
    fn load_records_for(&self, owner: &UserId) -> Result<Vec<CourseRecord>> {
        let sql = format!(
            "SELECT {} FROM records WHERE owner = ?1 ORDER BY seq",
            SELECT_COLUMNS
        );
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| UninotasError::db_operation("prepare records query", e))?;

        let rows = stmt.query_map([owner.as_str()], RawRecord::from_row)?;

        let mut records = Vec::new();
        for raw in rows {
            records.push(raw?.into_record()?);
        }

        tracing::debug!(count = records.len(), "loaded records");
        Ok(records)
    }

    #[tracing::instrument(skip(self, record), fields(id = %record.id))]
    fn append_record(&self, record: &CourseRecord) -> Result<()> {
        let (status, value) = outcome_columns(&record.outcome);

        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM records WHERE id = ?1)",
            [record.id.as_str()],
            |r| r.get(0),
        )?;
        if exists {
            return Err(UninotasError::already_exists("record", &record.id));
        }

        self.conn.execute(
            "INSERT INTO records (id, owner, course_name, first_score, second_score,
                 outcome, required_score, semester, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                record.id.as_str(),
                record.owner.as_str(),
                record.course_name,
                record.first_score.hundredths(),
                record.second_score.hundredths(),
                status,
                value,
                record.semester,
                record.created_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    fn remove_record(&self, id: &RecordId) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM records WHERE id = ?1", [id.as_str()])?;
        Ok(removed > 0)
    }
}
