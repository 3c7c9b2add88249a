//! Reconciled pinned/unpinned session lists.
//!
//! The pinned list is user-ordered and persisted; the unpinned list is
//! derived from the live session set every time the store is reconciled.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::{PinError, PinResult};
use crate::persist::PinStorage;

/// Filter `pinned` against the live `all` set and derive the unpinned rest.
///
/// The pinned result keeps `pinned` order, the unpinned result keeps `all`
/// order. Duplicate names in `all` are kept as they appear.
pub fn reconcile(all: &[String], pinned: &[String]) -> (Vec<String>, Vec<String>) {
    let live: HashSet<&str> = all.iter().map(String::as_str).collect();
    let kept: Vec<String> = pinned
        .iter()
        .filter(|name| live.contains(name.as_str()))
        .cloned()
        .collect();

    let kept_set: HashSet<&str> = kept.iter().map(String::as_str).collect();
    let unpinned = all
        .iter()
        .filter(|name| !kept_set.contains(name.as_str()))
        .cloned()
        .collect();

    (kept, unpinned)
}

/// Pinned and unpinned session lists backed by a [`PinStorage`].
pub struct SessionStore<S> {
    storage: S,
    pinned: Vec<String>,
    unpinned: Vec<String>,
}

impl<S: PinStorage> SessionStore<S> {
    /// Load the persisted pinned list. Nothing is reconciled until
    /// [`SessionStore::refresh`] is called.
    pub fn load(storage: S) -> PinResult<Self> {
        let pinned = storage.load_lines()?;
        debug!(count = pinned.len(), "loaded pinned sessions");
        Ok(Self {
            storage,
            pinned,
            unpinned: Vec::new(),
        })
    }

    /// Replace the live session set and re-derive both lists.
    pub fn refresh(&mut self, all: &[String]) {
        let (pinned, unpinned) = reconcile(all, &self.pinned);
        if pinned.len() != self.pinned.len() {
            debug!(
                dropped = self.pinned.len() - pinned.len(),
                "dropped stale pinned sessions"
            );
        }
        self.pinned = pinned;
        self.unpinned = unpinned;
    }

    /// Append `name` to the pinned list unless it is already there.
    pub fn pin(&mut self, name: &str) {
        if self.is_pinned(name) {
            return;
        }
        info!(session = %name, "pinned");
        self.pinned.push(name.to_string());
    }

    /// Remove the pinned entry at `index` and return it.
    pub fn unpin(&mut self, index: usize) -> PinResult<String> {
        if index >= self.pinned.len() {
            return Err(PinError::OutOfRange {
                index,
                len: self.pinned.len(),
            });
        }
        let name = self.pinned.remove(index);
        info!(session = %name, "unpinned");
        Ok(name)
    }

    /// Replace a pinned `old` with `new` in place. Returns whether `old` was pinned.
    pub fn rename_pinned(&mut self, old: &str, new: &str) -> bool {
        match self.pinned.iter().position(|name| name == old) {
            Some(idx) => {
                self.pinned[idx] = new.to_string();
                true
            }
            None => false,
        }
    }

    /// Write the pinned list to storage.
    pub fn save(&self) -> PinResult<()> {
        self.storage.store_lines(&self.pinned)
    }

    pub fn is_pinned(&self, name: &str) -> bool {
        self.pinned.iter().any(|p| p == name)
    }

    pub fn pinned(&self) -> &[String] {
        &self.pinned
    }

    pub(crate) fn pinned_mut(&mut self) -> &mut [String] {
        &mut self.pinned
    }

    pub fn unpinned(&self) -> &[String] {
        &self.unpinned
    }

    /// Number of entries in the displayed list (pinned followed by unpinned).
    pub fn total(&self) -> usize {
        self.pinned.len() + self.unpinned.len()
    }

    /// Flat index of `name` in the displayed list.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.pinned
            .iter()
            .chain(self.unpinned.iter())
            .position(|n| n == name)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStorage;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn store_with(pinned: &[&str], all: &[&str]) -> SessionStore<MemoryStorage> {
        let mut store = SessionStore::load(MemoryStorage::with_lines(names(pinned))).unwrap();
        store.refresh(&names(all));
        store
    }

    #[test]
    fn reconcile_drops_stale_pinned() {
        let (pinned, unpinned) = reconcile(&names(&["a", "b", "c"]), &names(&["c", "gone", "a"]));
        assert_eq!(pinned, names(&["c", "a"]));
        assert_eq!(unpinned, names(&["b"]));
    }

    #[test]
    fn reconcile_is_idempotent() {
        let all = names(&["w", "x", "y", "z"]);
        let pinned = names(&["z", "q", "x"]);
        let (once, _) = reconcile(&all, &pinned);
        let (twice, unpinned) = reconcile(&all, &once);
        assert_eq!(once, twice);
        assert_eq!(unpinned, names(&["w", "y"]));
    }

    #[test]
    fn reconcile_partitions_all_sessions() {
        let all = names(&["a", "b", "c", "d", "e"]);
        let (pinned, unpinned) = reconcile(&all, &names(&["e", "b"]));

        let pinned_set: HashSet<&String> = pinned.iter().collect();
        let unpinned_set: HashSet<&String> = unpinned.iter().collect();
        assert!(pinned_set.is_disjoint(&unpinned_set));

        let union: HashSet<&String> = pinned_set.union(&unpinned_set).copied().collect();
        let all_set: HashSet<&String> = all.iter().collect();
        assert_eq!(union, all_set);
    }

    #[test]
    fn reconcile_keeps_duplicate_live_names() {
        let (pinned, unpinned) = reconcile(&names(&["a", "b", "b"]), &names(&["a"]));
        assert_eq!(pinned, names(&["a"]));
        assert_eq!(unpinned, names(&["b", "b"]));
    }

    #[test]
    fn reconcile_with_empty_live_set() {
        let (pinned, unpinned) = reconcile(&[], &names(&["a"]));
        assert!(pinned.is_empty());
        assert!(unpinned.is_empty());
    }

    #[test]
    fn pin_appends_once() {
        let mut store = store_with(&["a"], &["a", "b", "c"]);
        store.pin("c");
        store.pin("c");
        assert_eq!(store.pinned(), names(&["a", "c"]).as_slice());
    }

    #[test]
    fn pin_then_unpin_restores_list() {
        let mut store = store_with(&["a", "b"], &["a", "b", "c"]);
        let before = store.pinned().to_vec();
        store.pin("c");
        let idx = store.pinned().iter().position(|n| n == "c").unwrap();
        assert_eq!(store.unpin(idx).unwrap(), "c");
        assert_eq!(store.pinned(), before.as_slice());
    }

    #[test]
    fn unpin_out_of_range() {
        let mut store = store_with(&["a"], &["a"]);
        assert!(matches!(
            store.unpin(1),
            Err(PinError::OutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn rename_pinned_keeps_position() {
        let mut store = store_with(&["a", "b", "c"], &["a", "b", "c"]);
        assert!(store.rename_pinned("a", "alpha"));
        assert_eq!(store.pinned(), names(&["alpha", "b", "c"]).as_slice());
        assert!(!store.rename_pinned("zzz", "y"));
    }

    #[test]
    fn save_writes_reconciled_list() {
        let store = store_with(&["old", "a"], &["a", "b"]);
        store.save().unwrap();
        assert_eq!(store.storage().lines(), names(&["a"]));
    }

    #[test]
    fn position_spans_both_lists() {
        let store = store_with(&["c"], &["a", "b", "c"]);
        assert_eq!(store.position("c"), Some(0));
        assert_eq!(store.position("b"), Some(2));
        assert_eq!(store.position("nope"), None);
        assert_eq!(store.total(), 3);
    }
}
