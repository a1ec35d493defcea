use std::cell::RefCell;

use crate::error::{Result, UninotasError};
use crate::id::{RecordId, UserId};
use crate::record::CourseRecord;

use super::RecordRepository;

/// In-memory implementation of RecordRepository for testing.
#[derive(Debug, Default)]
pub struct InMemoryRecordRepository {
    records: RefCell<Vec<CourseRecord>>,
}

impl InMemoryRecordRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with records.
    pub fn with_records(records: Vec<CourseRecord>) -> Self {
        Self {
            records: RefCell::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl RecordRepository for InMemoryRecordRepository {
    fn load_records_for(&self, owner: &UserId) -> Result<Vec<CourseRecord>> {
        Ok(self
            .records
            .borrow()
            .iter()
            .filter(|r| &r.owner == owner)
            .cloned()
            .collect())
    }

    fn append_record(&self, record: &CourseRecord) -> Result<()> {
        let mut records = self.records.borrow_mut();
        if records.iter().any(|r| r.id == record.id) {
            return Err(UninotasError::already_exists("record", &record.id));
        }
        records.push(record.clone());
        Ok(())
    }

    fn remove_record(&self, id: &RecordId) -> Result<bool> {
        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.retain(|r| &r.id != id);
        Ok(records.len() != before)
    }
}
