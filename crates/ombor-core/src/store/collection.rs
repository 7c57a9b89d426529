// ── Generic entity collection ──
//
// Insertion-ordered storage with O(1) id lookups. Every successful
// mutation bumps a version counter so consumers can tell whether a
// snapshot they hold is stale.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::CoreError;
use crate::model::{Entity, EntityId};

/// Sole owner of one entity collection.
///
/// Records iterate in insertion order; an update keeps the record where it
/// was. Ids come from a counter that never moves backwards, so deleting a
/// record never frees its id for reuse.
///
/// Mutation requires `&mut self` and there is no internal locking: the type
/// is not safe for uncoordinated concurrent access. Wrap it in a lock if it
/// must be shared between threads.
#[derive(Debug, Clone)]
pub struct EntityCollection<E: Entity> {
    /// Primary storage, in insertion order.
    entries: IndexMap<EntityId, E>,

    /// Next id to hand out.
    next_id: EntityId,

    /// Bumped on every successful mutation.
    version: u64,
}

impl<E: Entity> Default for EntityCollection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> EntityCollection<E> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            next_id: EntityId::from(1),
            version: 0,
        }
    }

    /// Build a collection pre-filled from drafts, in order.
    pub fn seeded(drafts: impl IntoIterator<Item = E::Draft>) -> Self {
        let mut collection = Self::new();
        for draft in drafts {
            collection.create(draft);
        }
        collection
    }

    /// Store a new record under a fresh id and return it.
    pub fn create(&mut self, draft: E::Draft) -> E {
        let id = self.allocate_id();
        let entity = E::from_draft(id, draft);
        self.entries.insert(id, entity.clone());
        self.bump_version();

        debug!(collection = %E::COLLECTION, %id, name = entity.name(), "record created");
        entity
    }

    /// Replace every field of an existing record except its id.
    pub fn update(&mut self, id: EntityId, draft: E::Draft) -> Result<E, CoreError> {
        let entity = self
            .entries
            .get_mut(&id)
            .ok_or_else(|| CoreError::not_found(E::COLLECTION, id))?;
        entity.apply(draft);
        let updated = entity.clone();
        self.bump_version();

        debug!(collection = %E::COLLECTION, %id, name = updated.name(), "record updated");
        Ok(updated)
    }

    /// Remove a record. Returns `true` if one was removed.
    ///
    /// Irreversible: callers are expected to have obtained an explicit
    /// confirmation first.
    pub fn delete(&mut self, id: EntityId) -> bool {
        let removed = self.entries.shift_remove(&id);
        if let Some(entity) = &removed {
            self.bump_version();
            debug!(collection = %E::COLLECTION, %id, name = entity.name(), "record deleted");
        }
        removed.is_some()
    }

    pub fn find_by_id(&self, id: EntityId) -> Option<&E> {
        self.entries.get(&id)
    }

    /// Records for which `predicate` holds, in collection order.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&E>
    where
        P: FnMut(&E) -> bool,
    {
        self.entries.values().filter(|e| predicate(e)).collect()
    }

    /// Count the records for which `predicate` holds.
    pub fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&E) -> bool,
    {
        self.entries.values().filter(|e| predicate(e)).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mutation counter; changes whenever the contents change.
    pub fn version(&self) -> u64 {
        self.version
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn allocate_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id = id.successor();
        id
    }

    fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductDraft};

    fn draft(name: &str, quantity: u64) -> ProductDraft {
        ProductDraft {
            name: name.into(),
            price: 1_000,
            quantity,
            category: "Mebel".into(),
            description: None,
        }
    }

    #[test]
    fn create_assigns_increasing_ids() {
        let mut col: EntityCollection<Product> = EntityCollection::new();
        let a = col.create(draft("a", 1));
        let b = col.create(draft("b", 1));
        assert!(b.id > a.id);
        assert_eq!(col.len(), 2);
    }

    #[test]
    fn create_then_find_yields_draft_plus_id() {
        let mut col: EntityCollection<Product> = EntityCollection::new();
        let stored = col.create(draft("Stol", 8));
        let found = col.find_by_id(stored.id).unwrap();
        assert_eq!(found.to_draft(), draft("Stol", 8));
        assert_eq!(found.id, stored.id);
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let mut col: EntityCollection<Product> = EntityCollection::new();
        let err = col.update(EntityId::from(99), draft("x", 1)).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
        assert_eq!(col.version(), 0);
    }

    #[test]
    fn update_keeps_position_and_other_records() {
        let mut col: EntityCollection<Product> = EntityCollection::new();
        let a = col.create(draft("a", 1));
        let b = col.create(draft("b", 1));
        let c = col.create(draft("c", 1));

        let updated = col.update(b.id, draft("B", 0)).unwrap();
        assert_eq!(updated.id, b.id);

        let names: Vec<_> = col.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a", "B", "c"]);
        assert_eq!(col.find_by_id(a.id).unwrap(), &a);
        assert_eq!(col.find_by_id(c.id).unwrap(), &c);
    }

    #[test]
    fn delete_removes_once() {
        let mut col: EntityCollection<Product> = EntityCollection::new();
        let a = col.create(draft("a", 1));
        assert!(col.delete(a.id));
        assert!(col.find_by_id(a.id).is_none());
        assert!(!col.delete(a.id));
        assert!(col.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut col: EntityCollection<Product> = EntityCollection::new();
        let a = col.create(draft("a", 1));
        col.delete(a.id);
        let b = col.create(draft("b", 1));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn filter_preserves_order() {
        let mut col: EntityCollection<Product> = EntityCollection::new();
        for (name, qty) in [("a", 1), ("b", 0), ("c", 3), ("d", 0)] {
            col.create(draft(name, qty));
        }
        let names: Vec<_> = col
            .filter(Product::in_stock)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["a", "c"]);
        assert_eq!(col.count(|p| !p.in_stock()), 2);
    }

    #[test]
    fn version_tracks_successful_mutations_only() {
        let mut col: EntityCollection<Product> = EntityCollection::new();
        let a = col.create(draft("a", 1));
        col.update(a.id, draft("a2", 1)).unwrap();
        col.delete(EntityId::from(1234));
        assert_eq!(col.version(), 2);
        col.delete(a.id);
        assert_eq!(col.version(), 3);
    }

    #[test]
    fn seeded_keeps_draft_order() {
        let col: EntityCollection<Product> =
            EntityCollection::seeded([draft("x", 1), draft("y", 2)]);
        let names: Vec<_> = col.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["x", "y"]);
    }
}
