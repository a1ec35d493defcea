//! Record storage capability
//!
//! The grade engine never touches storage; commands hand computed records to
//! whichever [`RecordRepository`] is injected. The SQLite-backed
//! [`crate::db::Database`] is the production implementation.

mod in_memory;

pub use in_memory::InMemoryRecordRepository;

use crate::error::Result;
use crate::id::{RecordId, UserId};
use crate::record::CourseRecord;

/// A store of course records, partitioned by owner.
pub trait RecordRepository {
    /// All records owned by `owner`, oldest first.
    fn load_records_for(&self, owner: &UserId) -> Result<Vec<CourseRecord>>;

    /// Persist a new record. Fails if the ID is already present.
    fn append_record(&self, record: &CourseRecord) -> Result<()>;

    /// Remove a record. Returns false if no record had that ID.
    fn remove_record(&self, id: &RecordId) -> Result<bool>;
}
