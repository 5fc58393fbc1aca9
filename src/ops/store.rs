use std::collections::HashSet;

use crate::model::UserRecord;

/// The authoritative in-memory collection of user records.
///
/// Populated once at startup, mutated only through `delete` and `update`.
/// Order is load order and is preserved across mutations. The filtered view
/// is always derived from this store at render time, never cached, so every
/// mutation is immediately visible.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<UserRecord>,
}

impl RecordStore {
    /// Build the store from the loaded source data.
    ///
    /// Duplicate ids violate the store invariant; later occurrences are
    /// dropped, first wins.
    pub fn load(initial: Vec<UserRecord>) -> Self {
        let mut seen = HashSet::new();
        let records = initial
            .into_iter()
            .filter(|r| seen.insert(r.id.clone()))
            .collect();
        RecordStore { records }
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// Remove the record with the given id. Absent id is a no-op, not an
    /// error (the record may have been deleted out from under a stale view).
    pub fn delete(&mut self, id: &str) {
        self.records.retain(|r| r.id != id);
    }

    /// Replace the record with the given id in place, preserving its
    /// position. No-op if the id is absent. The replacement keeps the target
    /// id regardless of what the caller passed in.
    pub fn update(&mut self, id: &str, mut record: UserRecord) {
        if let Some(slot) = self.records.iter_mut().find(|r| r.id == id) {
            record.id = id.to_string();
            *slot = record;
        }
    }
}
