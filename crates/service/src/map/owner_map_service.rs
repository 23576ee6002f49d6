use models::{Entity, Id, Owner};
use tracing::{debug, instrument};

use crate::map::{PetMapService, PetTypeMapService};
use crate::services::{CrudService, OwnerService, PetService, PetTypeService};
use crate::storage::MapStore;

/// Owner store with last-name queries.
///
/// Saving an owner also saves its pets (and their pet types) through the
/// injected pet and pet-type services, so every pet copy kept on the owner
/// carries a real identifier.
#[derive(Clone, Debug)]
pub struct OwnerMapService<T = PetTypeMapService, P = PetMapService> {
    store: MapStore<Owner>,
    pet_types: T,
    pets: P,
}

impl Default for OwnerMapService {
    fn default() -> Self {
        Self::new(PetTypeMapService::new(), PetMapService::new())
    }
}

impl<T: PetTypeService, P: PetService> OwnerMapService<T, P> {
    pub fn new(pet_types: T, pets: P) -> Self {
        Self { store: MapStore::new(), pet_types, pets }
    }

    pub fn with_first_id(first: Id, pet_types: T, pets: P) -> Self {
        Self { store: MapStore::with_first_id(first), pet_types, pets }
    }

    pub fn pet_types(&self) -> &T { &self.pet_types }

    pub fn pet_types_mut(&mut self) -> &mut T { &mut self.pet_types }

    pub fn pets(&self) -> &P { &self.pets }

    pub fn pets_mut(&mut self) -> &mut P { &mut self.pets }
}

impl<T: PetTypeService, P: PetService> CrudService<Owner, Id> for OwnerMapService<T, P> {
    fn find_all(&self) -> Vec<Owner> { self.store.find_all() }

    fn find_by_id(&self, id: Id) -> Option<Owner> { self.store.find_by_id(id) }

    #[instrument(skip_all, fields(owner_id = ?object.id, last_name = %object.last_name))]
    fn save(&mut self, mut object: Owner) -> Owner {
        let mut saved = self.store.save(object.id, Owner { pets: Vec::new(), ..object.clone() });
        let owner_id = saved.id;

        for pet in object.pets.iter_mut() {
            if let Some(pet_type) = pet.pet_type.as_mut() {
                if pet_type.is_new() {
                    *pet_type = self.pet_types.save(pet_type.clone());
                    debug!(pet_type_id = ?pet_type.id, name = %pet_type.name, "saved pet type");
                }
            }
            pet.owner_id = owner_id;
            // pets always go through the pet service so owner_id stays current there
            *pet = self.pets.save(pet.clone());
        }

        saved.pets = object.pets;
        let id = saved.id;
        self.store.save(id, saved)
    }

    fn delete(&mut self, object: &Owner) { self.store.delete(object) }

    fn delete_by_id(&mut self, id: Id) { self.store.delete_by_id(id) }
}

impl<T: PetTypeService, P: PetService> OwnerService for OwnerMapService<T, P> {
    fn find_by_last_name(&self, last_name: &str) -> Option<Owner> {
        self.store.find_first(|o| o.last_name == last_name)
    }

    fn find_all_by_last_name_like(&self, fragment: &str) -> Vec<Owner> {
        let needle = fragment.to_lowercase();
        self.store.filter(|o| o.last_name.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Pet, PetType};

    #[test]
    fn save_cascades_pets_and_pet_types() {
        let mut owners: OwnerMapService = OwnerMapService::default();
        let mut owner = Owner::new("Michael", "Weston");
        owner.add_pet(Pet::new("Rosco").with_pet_type(PetType::new("Dog")));

        let saved = owners.save(owner);
        let owner_id = saved.id.expect("owner id");
        let pet = &saved.pets[0];

        assert!(pet.id.is_some());
        assert_eq!(pet.owner_id, Some(owner_id));
        assert!(pet.pet_type.as_ref().and_then(|t| t.id).is_some());
        assert_eq!(owners.pet_types().find_all().len(), 1);
        assert_eq!(owners.pets().find_by_id(pet.id.unwrap()).unwrap().owner_id, Some(owner_id));
        assert_eq!(owners.find_by_id(owner_id), Some(saved));
    }

    #[test]
    fn saved_pet_type_is_not_duplicated() {
        let mut owners: OwnerMapService = OwnerMapService::default();
        let dog = owners.pet_types_mut().save(PetType::new("Dog"));

        let mut owner = Owner::new("Fiona", "Glenanne");
        owner.add_pet(Pet::new("Rosco").with_pet_type(dog.clone()));
        owner.add_pet(Pet::new("Rex").with_pet_type(dog.clone()));
        owners.save(owner);

        assert_eq!(owners.pet_types().find_all(), vec![dog]);
        assert_eq!(owners.pets().find_all().len(), 2);
    }

    #[test]
    fn pet_without_type_is_accepted() {
        let mut owners: OwnerMapService = OwnerMapService::default();
        let mut owner = Owner::new("Sam", "Axe");
        owner.add_pet(Pet::new("Stray"));
        let saved = owners.save(owner);
        assert!(saved.pets[0].id.is_some());
        assert!(owners.pet_types().find_all().is_empty());
    }

    #[test]
    fn resaving_owner_keeps_pet_ids() {
        let mut owners: OwnerMapService = OwnerMapService::default();
        let mut owner = Owner::new("Jessie", "Porter");
        owner.add_pet(Pet::new("Bella"));
        let first = owners.save(owner);
        let pet_id = first.pets[0].id;

        let second = owners.save(first.clone().with_telephone("555-0100"));
        assert_eq!(second.id, first.id);
        assert_eq!(second.pets[0].id, pet_id);
        assert_eq!(owners.pets().find_all().len(), 1);
        assert_eq!(owners.find_all().len(), 1);
    }

    #[test]
    fn last_name_lookup_breaks_ties_by_lowest_id() {
        let mut owners: OwnerMapService = OwnerMapService::default();
        owners.save(Owner::new("Second", "Smith").with_id(8));
        owners.save(Owner::new("First", "Smith").with_id(2));
        assert_eq!(owners.find_by_last_name("Smith").unwrap().first_name, "First");
        assert_eq!(owners.find_by_last_name("smith"), None);
    }

    #[test]
    fn like_query_with_empty_fragment_matches_all() {
        let mut owners: OwnerMapService = OwnerMapService::default();
        owners.save(Owner::new("A", "Smith"));
        owners.save(Owner::new("B", "Jones"));
        assert_eq!(owners.find_all_by_last_name_like("").len(), 2);
    }
}
