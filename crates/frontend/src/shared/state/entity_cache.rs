//! Client-side cache of entity lists
//!
//! [`EntityCacheStore`] is the plain data part; [`EntityCache`] wraps it in
//! signals and is provided through context. Every fetch takes a ticket
//! before going to the network and the store keeps only the newest ticket's
//! result, so a slow response can't overwrite data fetched after it.
//!
//! An entry fetched with `include_inactive=true` holds every record and
//! satisfies active-only requests too; callers filter it for display. Such
//! an entry is never replaced by an active-only one.

use std::collections::HashMap;

use contracts::domain::common::{EntityKind, EntityRecord};
use leptos::prelude::*;

use crate::shared::api_client::{call, ApiError, HttpMethod};
use crate::shared::api_utils::list_url;
use crate::shared::config::AppConfig;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheEntry {
    pub items: Vec<EntityRecord>,
    /// Whether the list was fetched with `include_inactive=true`
    pub includes_inactive: bool,
    pub ticket: u64,
}

#[derive(Debug, Clone, Default)]
pub struct EntityCacheStore {
    entries: HashMap<EntityKind, CacheEntry>,
    /// Last ticket issued before the kind was invalidated
    invalidated_at: HashMap<EntityKind, u64>,
    last_ticket: u64,
}

impl EntityCacheStore {
    pub fn issue_ticket(&mut self) -> u64 {
        self.last_ticket += 1;
        self.last_ticket
    }

    /// Refetch when nothing is cached, or when inactive records are asked
    /// for but only active ones are cached
    pub fn needs_refetch(&self, kind: EntityKind, include_inactive: bool) -> bool {
        match self.entries.get(&kind) {
            None => true,
            Some(entry) if entry.items.is_empty() => true,
            Some(entry) => include_inactive && !entry.includes_inactive,
        }
    }

    /// Store a fetched list; returns false and keeps the current entry when
    /// the response was requested before the last invalidation, when it is
    /// active-only and the entry holds every record, or when it is older
    /// than the entry of the same coverage
    pub fn store(
        &mut self,
        kind: EntityKind,
        ticket: u64,
        items: Vec<EntityRecord>,
        includes_inactive: bool,
    ) -> bool {
        if ticket <= self.invalidated_at.get(&kind).copied().unwrap_or_default() {
            return false;
        }
        if let Some(current) = self.entries.get(&kind) {
            if current.includes_inactive && !includes_inactive {
                return false;
            }
            if current.includes_inactive == includes_inactive && current.ticket > ticket {
                return false;
            }
        }
        self.entries.insert(
            kind,
            CacheEntry {
                items,
                includes_inactive,
                ticket,
            },
        );
        true
    }

    pub fn entry(&self, kind: EntityKind) -> Option<&CacheEntry> {
        self.entries.get(&kind)
    }

    pub fn items(&self, kind: EntityKind) -> &[EntityRecord] {
        self.entries
            .get(&kind)
            .map(|e| e.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn find(&self, kind: EntityKind, id: i64) -> Option<&EntityRecord> {
        self.items(kind).iter().find(|r| r.id() == id)
    }

    /// Drop the entry and every response still in flight for it
    pub fn invalidate(&mut self, kind: EntityKind) {
        self.entries.remove(&kind);
        self.invalidated_at.insert(kind, self.last_ticket);
    }
}

#[derive(Clone, Copy)]
pub struct EntityCache {
    store: RwSignal<EntityCacheStore>,
    /// Bumped on invalidation; selects listing the kind re-populate
    revisions: RwSignal<HashMap<EntityKind, u64>>,
    /// Bumped whenever a fetched list is stored
    loads: RwSignal<HashMap<EntityKind, u64>>,
}

impl EntityCache {
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(EntityCacheStore::default()),
            revisions: RwSignal::new(HashMap::new()),
            loads: RwSignal::new(HashMap::new()),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&EntityCacheStore) -> R) -> R {
        self.store.with_untracked(f)
    }

    pub fn find(&self, kind: EntityKind, id: i64) -> Option<EntityRecord> {
        self.with(|s| s.find(kind, id).cloned())
    }

    /// Tracked read: selects listing `kind` re-populate when it changes
    pub fn revision(&self, kind: EntityKind) -> u64 {
        self.revisions
            .with(|r| r.get(&kind).copied().unwrap_or_default())
    }

    /// Tracked read: rows showing names of `kind` re-render when it changes
    pub fn loaded(&self, kind: EntityKind) -> u64 {
        self.loads.with(|r| r.get(&kind).copied().unwrap_or_default())
    }

    pub fn touch(&self, kind: EntityKind) {
        self.revisions.update(|r| *r.entry(kind).or_default() += 1);
    }

    /// Drop cached items of `kind` and notify dependent selects
    pub fn invalidate(&self, kind: EntityKind) {
        self.store.update(|s| s.invalidate(kind));
        self.touch(kind);
    }

    /// Fetch `kind` from the server and store it
    ///
    /// The fetched items are returned even when a newer entry is kept.
    pub async fn fetch(
        &self,
        config: &AppConfig,
        kind: EntityKind,
        include_inactive: bool,
    ) -> Result<Vec<EntityRecord>, ApiError> {
        let ticket = self.store.try_update(|s| s.issue_ticket()).unwrap_or_default();
        let url = list_url(config, kind, include_inactive);

        let value = call(&url, HttpMethod::Get, None, None).await?;
        let items =
            EntityRecord::parse_list(kind, value).map_err(|e| ApiError::Decode(e.to_string()))?;

        let stored = self
            .store
            .try_update(|s| s.store(kind, ticket, items.clone(), include_inactive))
            .unwrap_or(false);
        if stored {
            self.loads.update(|l| *l.entry(kind).or_default() += 1);
        } else {
            log::debug!("{}: response #{} not cached", kind.collection(), ticket);
        }

        Ok(items)
    }

    /// Cached items of `kind`, fetching them first when needed
    ///
    /// May return inactive records even for an active-only request.
    pub async fn ensure(
        &self,
        config: &AppConfig,
        kind: EntityKind,
        include_inactive: bool,
    ) -> Result<Vec<EntityRecord>, ApiError> {
        let refetch = self.with(|s| s.needs_refetch(kind, include_inactive));
        if refetch {
            self.fetch(config, kind, include_inactive).await?;
        }
        Ok(self.with(|s| s.items(kind).to_vec()))
    }
}

impl Default for EntityCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_factory::aggregate::Factory;

    fn factory(id: i64, active: bool) -> EntityRecord {
        EntityRecord::Factory(Factory {
            id,
            name: format!("F{id}"),
            is_active: active,
        })
    }

    #[test]
    fn test_empty_cache_needs_refetch() {
        let store = EntityCacheStore::default();
        assert!(store.needs_refetch(EntityKind::Factories, false));
        assert!(store.items(EntityKind::Factories).is_empty());
    }

    #[test]
    fn test_active_only_entry_refetched_for_inactive() {
        let mut store = EntityCacheStore::default();
        let t = store.issue_ticket();
        store.store(EntityKind::Factories, t, vec![factory(1, true)], false);
        assert!(!store.needs_refetch(EntityKind::Factories, false));
        assert!(store.needs_refetch(EntityKind::Factories, true));
    }

    #[test]
    fn test_full_entry_satisfies_active_only_request() {
        let mut store = EntityCacheStore::default();
        let t = store.issue_ticket();
        store.store(EntityKind::Factories, t, vec![factory(1, true), factory(2, false)], true);
        assert!(!store.needs_refetch(EntityKind::Factories, true));
        assert!(!store.needs_refetch(EntityKind::Factories, false));
    }

    #[test]
    fn test_listed_inactive_record_stays_editable() {
        let mut store = EntityCacheStore::default();
        let listed = store.issue_ticket();
        store.store(EntityKind::Factories, listed, vec![factory(1, true), factory(2, false)], true);

        // a select asking for active records only must not shrink the entry
        let select = store.issue_ticket();
        assert!(!store.needs_refetch(EntityKind::Factories, false));
        assert!(!store.store(EntityKind::Factories, select, vec![factory(1, true)], false));
        assert!(store.find(EntityKind::Factories, 2).is_some());
    }

    #[test]
    fn test_full_list_replaces_newer_active_only_list() {
        let mut store = EntityCacheStore::default();
        let list = store.issue_ticket();
        let select = store.issue_ticket();

        assert!(store.store(EntityKind::Sections, select, vec![factory(1, true)], false));
        assert!(store.store(
            EntityKind::Sections,
            list,
            vec![factory(1, true), factory(2, false)],
            true
        ));
        assert!(store.find(EntityKind::Sections, 2).is_some());
    }

    #[test]
    fn test_stored_empty_list_still_refetches() {
        let mut store = EntityCacheStore::default();
        let t = store.issue_ticket();
        store.store(EntityKind::Sections, t, vec![], false);
        assert!(store.needs_refetch(EntityKind::Sections, false));
    }

    #[test]
    fn test_stale_response_does_not_overwrite_newer() {
        let mut store = EntityCacheStore::default();
        let older = store.issue_ticket();
        let newer = store.issue_ticket();

        assert!(store.store(EntityKind::Factories, newer, vec![factory(1, true), factory(2, true)], false));
        assert!(!store.store(EntityKind::Factories, older, vec![factory(1, true)], false));

        let entry = store.entry(EntityKind::Factories).unwrap();
        assert_eq!(entry.ticket, newer);
        assert_eq!(entry.items.len(), 2);
    }

    #[test]
    fn test_response_requested_before_invalidation_dropped() {
        let mut store = EntityCacheStore::default();
        let before = store.issue_ticket();
        store.invalidate(EntityKind::Factories);
        let after = store.issue_ticket();

        assert!(!store.store(EntityKind::Factories, before, vec![factory(1, true)], true));
        assert!(store.entry(EntityKind::Factories).is_none());
        assert!(store.store(EntityKind::Factories, after, vec![factory(1, false)], true));
    }

    #[test]
    fn test_find_and_invalidate() {
        let mut store = EntityCacheStore::default();
        let t = store.issue_ticket();
        store.store(EntityKind::Factories, t, vec![factory(1, true), factory(3, false)], true);
        assert_eq!(store.find(EntityKind::Factories, 3).map(|r| r.name()), Some("F3"));
        assert!(store.find(EntityKind::Factories, 2).is_none());
        assert!(store.find(EntityKind::Sections, 1).is_none());

        store.invalidate(EntityKind::Factories);
        assert!(store.entry(EntityKind::Factories).is_none());
    }
}
