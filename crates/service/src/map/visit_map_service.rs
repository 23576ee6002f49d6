use models::{Entity, Id, Visit};
use tracing::debug;

use crate::services::{CrudService, VisitService};
use crate::storage::MapStore;

#[derive(Clone, Debug, Default)]
pub struct VisitMapService {
    store: MapStore<Visit>,
}

impl VisitMapService {
    pub fn new() -> Self { Self::default() }

    pub fn with_first_id(first: Id) -> Self {
        Self { store: MapStore::with_first_id(first) }
    }
}

impl CrudService<Visit, Id> for VisitMapService {
    fn find_all(&self) -> Vec<Visit> { self.store.find_all() }

    fn find_by_id(&self, id: Id) -> Option<Visit> { self.store.find_by_id(id) }

    fn save(&mut self, object: Visit) -> Visit {
        if object.pet_id.is_none() {
            debug!(date = %object.date, "saving visit without a pet");
        }
        let id = object.id();
        self.store.save(id, object)
    }

    fn delete(&mut self, object: &Visit) { self.store.delete(object) }

    fn delete_by_id(&mut self, id: Id) { self.store.delete_by_id(id) }
}

impl VisitService for VisitMapService {
    fn find_all_by_pet_id(&self, pet_id: Id) -> Vec<Visit> {
        let mut visits = self.store.filter(|v| v.pet_id == Some(pet_id));
        visits.sort_by_key(|v| (v.date, v.id));
        visits
    }
}
