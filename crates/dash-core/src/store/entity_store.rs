// ============================================================================
// Dash Core - Entity Store
// File: crates/dash-core/src/store/entity_store.rs
// Description: Ordered record list with a monotonic id counter
// ============================================================================

use dash_shared::EntityId;
use tracing::debug;

/// A record kept in an [`EntityStore`].
pub trait Record: Clone {
    /// Validated fields for a new record, everything but the id.
    type Draft;
    /// Partial update; absent fields are left alone.
    type Changes;

    fn id(&self) -> EntityId;
    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;
    fn merge(&mut self, changes: Self::Changes);
}

/// Records in insertion order plus the next id to hand out. Ids only move
/// forward, so a deleted id is never assigned again.
#[derive(Debug, Clone)]
pub struct EntityStore<R: Record> {
    records: Vec<R>,
    next_id: EntityId,
}

impl<R: Record> Default for EntityStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> EntityStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Store pre-filled with `records`; the counter starts after the highest id.
    pub fn seeded(records: Vec<R>) -> Self {
        let next_id = records.iter().map(R::id).max().map_or(1, |max| max + 1);
        Self { records, next_id }
    }

    pub fn create(&mut self, draft: R::Draft) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(R::from_draft(id, draft));
        id
    }

    /// Returns `false` when no record has `id`.
    pub fn update(&mut self, id: EntityId, changes: R::Changes) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.merge(changes);
                true
            }
            None => {
                debug!("Update skipped, id {} not in store", id);
                false
            }
        }
    }

    /// Returns `false` when no record has `id`.
    pub fn delete(&mut self, id: EntityId) -> bool {
        match self.records.iter().position(|r| r.id() == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => {
                debug!("Delete skipped, id {} not in store", id);
                false
            }
        }
    }

    pub fn find(&self, id: EntityId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn list(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id the next `create` will assign.
    pub fn next_id(&self) -> EntityId {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: EntityId,
        title: String,
        body: String,
    }

    #[derive(Default)]
    struct NoteChanges {
        title: Option<String>,
        body: Option<String>,
    }

    impl Record for Note {
        type Draft = (String, String);
        type Changes = NoteChanges;

        fn id(&self) -> EntityId {
            self.id
        }

        fn from_draft(id: EntityId, (title, body): (String, String)) -> Self {
            Self { id, title, body }
        }

        fn merge(&mut self, changes: NoteChanges) {
            if let Some(title) = changes.title {
                self.title = title;
            }
            if let Some(body) = changes.body {
                self.body = body;
            }
        }
    }

    fn draft(title: &str) -> (String, String) {
        (title.to_string(), format!("{} body", title))
    }

    fn seeded_store() -> EntityStore<Note> {
        EntityStore::seeded(
            (1..=4)
                .map(|id| Note::from_draft(id, draft(&format!("n{}", id))))
                .collect(),
        )
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut store = EntityStore::<Note>::new();
        let mut last = 0;
        for i in 0..10 {
            let id = store.create(draft(&i.to_string()));
            assert!(id > last);
            last = id;
        }
    }

    #[test]
    fn test_seeded_counter_starts_after_max() {
        let store = seeded_store();
        assert_eq!(store.len(), 4);
        assert_eq!(store.next_id(), 5);
        assert_eq!(EntityStore::<Note>::seeded(Vec::new()).next_id(), 1);
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let mut store = seeded_store();
        assert!(store.delete(2));
        let ids: Vec<_> = store.list().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);

        assert!(store.delete(4));
        assert_eq!(store.create(draft("a")), 5);
        assert_eq!(store.create(draft("b")), 6);
        assert!(store.find(2).is_none());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = seeded_store();
        assert!(!store.delete(99));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_update_is_shallow_merge() {
        let mut store = seeded_store();
        assert!(store.update(
            3,
            NoteChanges {
                title: Some("renamed".to_string()),
                ..Default::default()
            }
        ));
        let note = store.find(3).unwrap();
        assert_eq!(note.title, "renamed");
        assert_eq!(note.body, "n3 body");
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut store = seeded_store();
        let before: Vec<_> = store.list().to_vec();
        assert!(!store.update(42, NoteChanges::default()));
        assert_eq!(store.list(), before.as_slice());
    }
}
