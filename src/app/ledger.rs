//! Sequence numbering and stale-completion detection.
//!
//! Requests complete in whatever order the network delivers them. Every
//! request gets a monotonically increasing sequence number when issued, and
//! the ledger remembers what has already been applied so that an older
//! completion can never overwrite a newer state.
//!
//! Rules:
//! - A replacement (list or sort) is stale once a newer replacement has been
//!   issued, or once a mutation issued after it has been applied. In the
//!   second case the snapshot predates a change already shown, so the caller
//!   refetches instead of loading it (see [`RequestLedger::needs_refetch`]).
//! - A mutation touching id X is stale when a newer completion for X, or a
//!   newer replacement, has already been applied.

use crate::domain::EmployeeId;
use crate::remote::RequestKind;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct RequestLedger {
    last_issued: u64,
    latest_replacement_issued: u64,
    latest_replacement_applied: u64,
    latest_mutation_applied: u64,
    applied_by_id: HashMap<EmployeeId, u64>,
}

impl RequestLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next sequence number for a request of `kind`.
    pub fn issue(&mut self, kind: RequestKind) -> u64 {
        self.last_issued += 1;
        if kind.is_replacement() {
            self.latest_replacement_issued = self.last_issued;
        }
        tracing::trace!(seq = self.last_issued, kind = ?kind, "issued request sequence");
        self.last_issued
    }

    /// Whether a completion should be dropped.
    ///
    /// `id` is the record the completion touches. For updates and deletes it
    /// is the target id; for creates it is the id the backend assigned.
    #[must_use]
    pub fn is_stale(&self, seq: u64, kind: RequestKind, id: Option<EmployeeId>) -> bool {
        if kind.is_replacement() {
            return seq < self.latest_replacement_issued || seq < self.latest_mutation_applied;
        }

        let last_for_id = id.and_then(|id| self.applied_by_id.get(&id).copied()).unwrap_or(0);
        seq < last_for_id.max(self.latest_replacement_applied)
    }

    /// Records that a completion was applied to the cache.
    pub fn mark_applied(&mut self, seq: u64, kind: RequestKind, id: Option<EmployeeId>) {
        if kind.is_replacement() {
            self.latest_replacement_applied = self.latest_replacement_applied.max(seq);
        } else {
            self.latest_mutation_applied = self.latest_mutation_applied.max(seq);
            if let Some(id) = id {
                let entry = self.applied_by_id.entry(id).or_insert(0);
                *entry = (*entry).max(seq);
            }
        }
    }

    /// Whether a dropped replacement left the cache without a fresher
    /// snapshot on the way.
    ///
    /// True when the replacement lost only to mutations applied after it was
    /// issued and no newer replacement is outstanding.
    #[must_use]
    pub const fn needs_refetch(&self, seq: u64, kind: RequestKind) -> bool {
        kind.is_replacement() && seq >= self.latest_replacement_issued && seq < self.latest_mutation_applied
    }

    /// Checks staleness and, if fresh, marks the completion applied.
    ///
    /// Returns `true` when the caller should apply the completion.
    pub fn admit(&mut self, seq: u64, kind: RequestKind, id: Option<EmployeeId>) -> bool {
        if self.is_stale(seq, kind, id) {
            tracing::debug!(seq = seq, kind = ?kind, employee_id = ?id, "dropping stale completion");
            return false;
        }
        self.mark_applied(seq, kind, id);
        true
    }

    #[must_use]
    pub const fn last_issued(&self) -> u64 {
        self.last_issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortColumn;

    #[test]
    fn sequence_numbers_increase() {
        let mut ledger = RequestLedger::new();
        let a = ledger.issue(RequestKind::List);
        let b = ledger.issue(RequestKind::Create);
        assert!(b > a);
        assert_eq!(ledger.last_issued(), b);
    }

    #[test]
    fn superseded_sort_is_stale_in_either_arrival_order() {
        let mut ledger = RequestLedger::new();
        let by_name = ledger.issue(RequestKind::Sort(SortColumn::Name));
        let by_salary = ledger.issue(RequestKind::Sort(SortColumn::Salary));

        assert!(ledger.admit(by_salary, RequestKind::Sort(SortColumn::Salary), None));
        assert!(!ledger.admit(by_name, RequestKind::Sort(SortColumn::Name), None));
    }

    #[test]
    fn update_older_than_applied_delete_is_stale() {
        let mut ledger = RequestLedger::new();
        let update = ledger.issue(RequestKind::Update(3));
        let delete = ledger.issue(RequestKind::Delete(3));

        assert!(ledger.admit(delete, RequestKind::Delete(3), Some(3)));
        assert!(ledger.is_stale(update, RequestKind::Update(3), Some(3)));
    }

    #[test]
    fn mutations_on_other_ids_are_independent() {
        let mut ledger = RequestLedger::new();
        let first = ledger.issue(RequestKind::Update(1));
        let second = ledger.issue(RequestKind::Update(2));

        assert!(ledger.admit(second, RequestKind::Update(2), Some(2)));
        assert!(ledger.admit(first, RequestKind::Update(1), Some(1)));
    }

    #[test]
    fn mutation_older_than_applied_replacement_is_stale() {
        let mut ledger = RequestLedger::new();
        let create = ledger.issue(RequestKind::Create);
        let list = ledger.issue(RequestKind::List);

        assert!(ledger.admit(list, RequestKind::List, None));
        assert!(!ledger.admit(create, RequestKind::Create, Some(10)));
    }

    #[test]
    fn mutation_newer_than_replacement_still_applies() {
        let mut ledger = RequestLedger::new();
        let list = ledger.issue(RequestKind::List);
        let create = ledger.issue(RequestKind::Create);

        assert!(ledger.admit(list, RequestKind::List, None));
        assert!(ledger.admit(create, RequestKind::Create, Some(10)));
    }

    #[test]
    fn replacement_older_than_applied_delete_is_stale_and_refetched() {
        let mut ledger = RequestLedger::new();
        let list = ledger.issue(RequestKind::List);
        let delete = ledger.issue(RequestKind::Delete(2));

        assert!(ledger.admit(delete, RequestKind::Delete(2), Some(2)));
        assert!(ledger.needs_refetch(list, RequestKind::List));
        assert!(!ledger.admit(list, RequestKind::List, None));
    }

    #[test]
    fn no_refetch_when_a_newer_replacement_is_pending() {
        let mut ledger = RequestLedger::new();
        let list = ledger.issue(RequestKind::List);
        let update = ledger.issue(RequestKind::Update(1));
        let sort = ledger.issue(RequestKind::Sort(SortColumn::Name));

        assert!(ledger.admit(update, RequestKind::Update(1), Some(1)));
        assert!(!ledger.needs_refetch(list, RequestKind::List));
        assert!(!ledger.admit(list, RequestKind::List, None));
        assert!(ledger.admit(sort, RequestKind::Sort(SortColumn::Name), None));
    }

    #[test]
    fn replacement_issued_after_mutation_applies() {
        let mut ledger = RequestLedger::new();
        let update = ledger.issue(RequestKind::Update(1));
        assert!(ledger.admit(update, RequestKind::Update(1), Some(1)));

        let list = ledger.issue(RequestKind::List);
        assert!(!ledger.needs_refetch(list, RequestKind::List));
        assert!(ledger.admit(list, RequestKind::List, None));
    }
}
