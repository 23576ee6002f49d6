//! Clinic domain records.
//! - Every record carries a nullable identifier assigned by the store on first save.
//! - Back-references (pet -> owner, visit -> pet) are plain identifiers.

pub mod base;
pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod specialty;
pub mod vet;
pub mod visit;

pub use base::{Entity, Id, IdSequence};
pub use owner::Owner;
pub use pet::Pet;
pub use pet_type::PetType;
pub use specialty::Specialty;
pub use vet::Vet;
pub use visit::Visit;
