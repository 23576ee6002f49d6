use models::{Entity, Id, Vet};
use tracing::{debug, instrument};

use crate::map::SpecialtyMapService;
use crate::services::{CrudService, SpecialtyService, VetService};
use crate::storage::MapStore;

/// Vet store that saves a vet's unsaved specialties before the vet itself.
#[derive(Clone, Debug)]
pub struct VetMapService<S = SpecialtyMapService> {
    store: MapStore<Vet>,
    specialties: S,
}

impl Default for VetMapService {
    fn default() -> Self {
        Self::new(SpecialtyMapService::new())
    }
}

impl<S: SpecialtyService> VetMapService<S> {
    pub fn new(specialties: S) -> Self {
        Self { store: MapStore::new(), specialties }
    }

    pub fn with_first_id(first: Id, specialties: S) -> Self {
        Self { store: MapStore::with_first_id(first), specialties }
    }

    pub fn specialties(&self) -> &S { &self.specialties }

    pub fn specialties_mut(&mut self) -> &mut S { &mut self.specialties }
}

impl<S: SpecialtyService> CrudService<Vet, Id> for VetMapService<S> {
    fn find_all(&self) -> Vec<Vet> { self.store.find_all() }

    fn find_by_id(&self, id: Id) -> Option<Vet> { self.store.find_by_id(id) }

    #[instrument(skip_all, fields(vet = %object.full_name()))]
    fn save(&mut self, mut object: Vet) -> Vet {
        for specialty in object.specialities.iter_mut().filter(|s| s.is_new()) {
            *specialty = self.specialties.save(specialty.clone());
            debug!(id = ?specialty.id, description = %specialty.description, "saved specialty");
        }
        let id = object.id();
        self.store.save(id, object)
    }

    fn delete(&mut self, object: &Vet) { self.store.delete(object) }

    fn delete_by_id(&mut self, id: Id) { self.store.delete_by_id(id) }
}

impl<S: SpecialtyService> VetService for VetMapService<S> {}
