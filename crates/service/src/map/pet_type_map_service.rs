use models::{Entity, Id, PetType};

use crate::services::{CrudService, PetTypeService};
use crate::storage::MapStore;

#[derive(Clone, Debug, Default)]
pub struct PetTypeMapService {
    store: MapStore<PetType>,
}

impl PetTypeMapService {
    pub fn new() -> Self { Self::default() }

    pub fn with_first_id(first: Id) -> Self {
        Self { store: MapStore::with_first_id(first) }
    }

    /// Pet type with the given name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<PetType> {
        self.store.find_first(|t| t.name.eq_ignore_ascii_case(name))
    }
}

impl CrudService<PetType, Id> for PetTypeMapService {
    fn find_all(&self) -> Vec<PetType> { self.store.find_all() }

    fn find_by_id(&self, id: Id) -> Option<PetType> { self.store.find_by_id(id) }

    fn save(&mut self, object: PetType) -> PetType {
        let id = object.id();
        self.store.save(id, object)
    }

    fn delete(&mut self, object: &PetType) { self.store.delete(object) }

    fn delete_by_id(&mut self, id: Id) { self.store.delete_by_id(id) }
}

impl PetTypeService for PetTypeMapService {}
