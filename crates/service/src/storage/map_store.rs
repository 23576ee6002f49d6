use std::collections::HashMap;

use models::{Entity, IdSequence};
use tracing::{debug, error};

use crate::errors::ServiceError;

/// Generic in-memory store keyed by entity identifier.
///
/// Every stored entity carries `Some(id)` equal to its key. Identifiers are
/// generated from a counter that always sits past the largest identifier the
/// store has seen, so generated ids are never reused after deletion and never
/// collide with ids supplied by callers. Once the counter saturates at the
/// largest value of the id type, free ids are taken from the bottom of the
/// range instead; a stored entity is never overwritten by a generated id.
///
/// The store is a plain owned value with no internal locking; callers that
/// share one across threads serialise access themselves.
#[derive(Clone, Debug)]
pub struct MapStore<E: Entity> {
    inner: HashMap<E::Id, E>,
    next_id: E::Id,
}

impl<E: Entity> Default for MapStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> MapStore<E> {
    pub fn new() -> Self {
        Self::with_first_id(E::Id::first())
    }

    /// Empty store whose first generated identifier is `first`.
    pub fn with_first_id(first: E::Id) -> Self {
        Self { inner: HashMap::new(), next_id: first }
    }

    /// Snapshot of all stored entities, in no particular order.
    pub fn find_all(&self) -> Vec<E> {
        self.inner.values().cloned().collect()
    }

    pub fn find_by_id(&self, id: E::Id) -> Option<E> {
        self.inner.get(&id).cloned()
    }

    /// Insert or replace. A missing `id` is generated and written onto the
    /// entity; a present one overwrites whatever is stored under it.
    ///
    /// If every identifier is taken the entity is returned unstored with its
    /// id still `None`; [`MapStore::try_save`] reports that case as an error.
    pub fn save(&mut self, id: Option<E::Id>, entity: E) -> E {
        let Some(id) = id.or_else(|| self.generate_id()) else {
            error!(len = self.inner.len(), "identifier space exhausted; entity not stored");
            return entity;
        };
        self.store_under(id, entity)
    }

    /// Like [`MapStore::save`], but fails instead of returning an unstored entity.
    pub fn try_save(&mut self, id: Option<E::Id>, entity: E) -> Result<E, ServiceError> {
        let id = id
            .or_else(|| self.generate_id())
            .ok_or(ServiceError::IdsExhausted)?;
        Ok(self.store_under(id, entity))
    }

    fn store_under(&mut self, id: E::Id, mut entity: E) -> E {
        self.observe(id);
        if self.inner.contains_key(&id) {
            debug!(?id, "replacing stored entity");
        }
        entity.set_id(id);
        self.inner.insert(id, entity.clone());
        entity
    }

    pub fn delete_by_id(&mut self, id: E::Id) {
        self.inner.remove(&id);
    }

    /// Remove every entry whose value equals `entity`.
    pub fn delete(&mut self, entity: &E) {
        self.inner.retain(|_, stored| stored != entity);
    }

    /// Stored entities matching `pred`, in no particular order.
    pub fn filter<F>(&self, mut pred: F) -> Vec<E>
    where
        F: FnMut(&E) -> bool,
    {
        self.inner.values().filter(|e| pred(e)).cloned().collect()
    }

    /// Matching entity with the lowest identifier.
    pub fn find_first<F>(&self, mut pred: F) -> Option<E>
    where
        F: FnMut(&E) -> bool,
    {
        self.inner
            .iter()
            .filter(|(_, e)| pred(e))
            .min_by_key(|(id, _)| **id)
            .map(|(_, e)| e.clone())
    }

    pub fn contains_id(&self, id: E::Id) -> bool {
        self.inner.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn generate_id(&mut self) -> Option<E::Id> {
        let id = self.next_id;
        if !self.inner.contains_key(&id) {
            self.next_id = id.next();
            return Some(id);
        }
        // the counter only lands on a taken id after saturating at the maximum
        self.lowest_free_id()
    }

    fn lowest_free_id(&self) -> Option<E::Id> {
        let mut id = E::Id::first();
        loop {
            if !self.inner.contains_key(&id) {
                return Some(id);
            }
            let bumped = id.next();
            if bumped == id {
                return None;
            }
            id = bumped;
        }
    }

    fn observe(&mut self, id: E::Id) {
        if id >= self.next_id {
            self.next_id = id.next();
        }
    }
}
