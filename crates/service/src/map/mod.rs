//! In-memory implementations of the service contracts, each backed by a
//! [`MapStore`](crate::storage::MapStore).

pub mod owner_map_service;
pub mod pet_map_service;
pub mod pet_type_map_service;
pub mod specialty_map_service;
pub mod vet_map_service;
pub mod visit_map_service;

pub use owner_map_service::OwnerMapService;
pub use pet_map_service::PetMapService;
pub use pet_type_map_service::PetTypeMapService;
pub use specialty_map_service::SpecialtyMapService;
pub use vet_map_service::VetMapService;
pub use visit_map_service::VisitMapService;
