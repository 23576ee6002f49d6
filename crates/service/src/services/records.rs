use models::{Id, Pet, PetType, Specialty, Vet, Visit};

use super::crud::CrudService;

pub trait PetTypeService: CrudService<PetType, Id> {}

pub trait SpecialtyService: CrudService<Specialty, Id> {}

pub trait PetService: CrudService<Pet, Id> {}

pub trait VetService: CrudService<Vet, Id> {}

pub trait VisitService: CrudService<Visit, Id> {
    /// Visits recorded for one pet, oldest first.
    fn find_all_by_pet_id(&self, pet_id: Id) -> Vec<Visit>;
}
