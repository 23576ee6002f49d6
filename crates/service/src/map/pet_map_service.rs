use models::{Entity, Id, Pet};

use crate::services::{CrudService, PetService};
use crate::storage::MapStore;

#[derive(Clone, Debug, Default)]
pub struct PetMapService {
    store: MapStore<Pet>,
}

impl PetMapService {
    pub fn new() -> Self { Self::default() }

    pub fn with_first_id(first: Id) -> Self {
        Self { store: MapStore::with_first_id(first) }
    }

    /// Pets belonging to one owner, ordered by id.
    pub fn find_all_by_owner_id(&self, owner_id: Id) -> Vec<Pet> {
        let mut pets = self.store.filter(|p| p.owner_id == Some(owner_id));
        pets.sort_by_key(|p| p.id);
        pets
    }
}

impl CrudService<Pet, Id> for PetMapService {
    fn find_all(&self) -> Vec<Pet> { self.store.find_all() }

    fn find_by_id(&self, id: Id) -> Option<Pet> { self.store.find_by_id(id) }

    fn save(&mut self, object: Pet) -> Pet {
        let id = object.id();
        self.store.save(id, object)
    }

    fn delete(&mut self, object: &Pet) { self.store.delete(object) }

    fn delete_by_id(&mut self, id: Id) { self.store.delete_by_id(id) }
}

impl PetService for PetMapService {}
