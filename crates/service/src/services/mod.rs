//! Service contracts.
//!
//! Callers (a web layer, the CLI, a relational implementation) depend on these
//! traits only, so the in-memory services in [`crate::map`] are swappable.

pub mod crud;
pub mod owner;
pub mod records;

pub use crud::CrudService;
pub use owner::{search_owners, OwnerSearch, OwnerService};
pub use records::{PetService, PetTypeService, SpecialtyService, VetService, VisitService};
