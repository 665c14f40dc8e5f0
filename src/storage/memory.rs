use crate::query::types::{FieldValue, Record};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// An append-only record collection that search requests read from.
///
/// Implementations must hand out snapshots that stay stable while new
/// records are appended concurrently.
pub trait RecordStore: Send + Sync {
    /// Stores a record and returns the stored copy.
    fn append(&self, record: Record) -> Arc<Record>;

    /// All records in submission order, as of the call.
    fn snapshot(&self) -> Vec<Arc<Record>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-process store backed by a vector of shared records.
///
/// Snapshots clone the `Arc`s under a short read lock, so evaluation never
/// holds the lock.
#[derive(Default)]
pub struct MemoryRecordStore {
    records: RwLock<Vec<Arc<Record>>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with two sample employees.
    pub fn with_sample_records() -> Self {
        let store = Self::new();
        for record in sample_records() {
            store.append(record);
        }
        store
    }

    // Poisoning is ignored: the only mutation is a single push.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Arc<Record>>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Arc<Record>>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl RecordStore for MemoryRecordStore {
    fn append(&self, record: Record) -> Arc<Record> {
        let record = Arc::new(record);
        self.write().push(record.clone());
        record
    }

    fn snapshot(&self) -> Vec<Arc<Record>> {
        self.read().clone()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

/// Builds a submission record: a fresh `id` first, then the submitted
/// fields. A client-supplied `id` overrides the generated one.
pub fn new_submission(fields: impl IntoIterator<Item = (String, FieldValue)>) -> Record {
    let mut record = Record::new();
    record.insert("id", uuid::Uuid::new_v4().to_string());
    for (field, value) in fields {
        record.insert(field, value);
    }
    record
}

pub fn sample_records() -> Vec<Record> {
    vec![
        Record::from_iter([
            ("id", FieldValue::from("1")),
            ("firstName", FieldValue::from("John")),
            ("lastName", FieldValue::from("Doe")),
            ("employeeId", FieldValue::from("ABC-12345")),
            ("salary", FieldValue::from(50000_i64)),
        ]),
        Record::from_iter([
            ("id", FieldValue::from("2")),
            ("firstName", FieldValue::from("Jane")),
            ("lastName", FieldValue::from("Smith")),
            ("employeeId", FieldValue::from("ABC-12344")),
            ("salary", FieldValue::from(60000_i64)),
        ]),
    ]
}
