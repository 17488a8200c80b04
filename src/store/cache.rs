//! Ordered employee cache.
//!
//! [`EmployeeCache`] keeps employees in the order the backend (or local
//! patches) produced them and guarantees at most one entry per id.

use crate::domain::{Employee, EmployeeId};

/// In-memory mirror of the backend's employee collection.
///
/// All mutations go through [`load`](Self::load), [`upsert`](Self::upsert) and
/// [`remove`](Self::remove). There is no conflict detection: the last write
/// applied wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeCache {
    records: Vec<Employee>,
}

impl EmployeeCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Replaces the whole cache with a server payload.
    ///
    /// Server order is kept. A duplicated id in the payload replaces the
    /// earlier entry in place, so the id-uniqueness invariant holds even for
    /// a misbehaving backend.
    pub fn load(&mut self, records: Vec<Employee>) {
        let _span = tracing::debug_span!("cache_load", incoming = records.len()).entered();

        self.records.clear();
        for record in records {
            self.upsert(record);
        }

        tracing::debug!(count = self.records.len(), "cache replaced");
    }

    /// Replaces the entry with a matching id, or appends the record.
    pub fn upsert(&mut self, record: Employee) {
        if let Some(existing) = self.records.iter_mut().find(|e| e.id == record.id) {
            tracing::trace!(employee_id = record.id, "replacing cached employee");
            *existing = record;
        } else {
            tracing::trace!(employee_id = record.id, "appending cached employee");
            self.records.push(record);
        }
    }

    /// Deletes the entry with the given id.
    ///
    /// Returns `true` if an entry was removed. Removing an absent id is a
    /// no-op.
    pub fn remove(&mut self, id: EmployeeId) -> bool {
        let before = self.records.len();
        self.records.retain(|e| e.id != id);
        let removed = self.records.len() != before;
        tracing::trace!(employee_id = id, removed = removed, "cache remove");
        removed
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.records.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: EmployeeId) -> bool {
        self.get(id).is_some()
    }

    /// Records in cache order.
    #[must_use]
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Employee>> for EmployeeCache {
    fn from(records: Vec<Employee>) -> Self {
        let mut cache = Self::new();
        cache.load(records);
        cache
    }
}
