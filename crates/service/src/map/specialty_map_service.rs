use models::{Entity, Id, Specialty};

use crate::services::{CrudService, SpecialtyService};
use crate::storage::MapStore;

#[derive(Clone, Debug, Default)]
pub struct SpecialtyMapService {
    store: MapStore<Specialty>,
}

impl SpecialtyMapService {
    pub fn new() -> Self { Self::default() }

    pub fn with_first_id(first: Id) -> Self {
        Self { store: MapStore::with_first_id(first) }
    }

    pub fn find_by_description(&self, description: &str) -> Option<Specialty> {
        self.store.find_first(|s| s.description.eq_ignore_ascii_case(description))
    }
}

impl CrudService<Specialty, Id> for SpecialtyMapService {
    fn find_all(&self) -> Vec<Specialty> { self.store.find_all() }

    fn find_by_id(&self, id: Id) -> Option<Specialty> { self.store.find_by_id(id) }

    fn save(&mut self, object: Specialty) -> Specialty {
        let id = object.id();
        self.store.save(id, object)
    }

    fn delete(&mut self, object: &Specialty) { self.store.delete(object) }

    fn delete_by_id(&mut self, id: Id) { self.store.delete_by_id(id) }
}

impl SpecialtyService for SpecialtyMapService {}
