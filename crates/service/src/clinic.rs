use configs::StorageConfig;

use crate::map::{
    OwnerMapService, PetMapService, PetTypeMapService, SpecialtyMapService, VetMapService,
    VisitMapService,
};

/// The clinic's record stores, built once and passed to whoever needs them.
#[derive(Clone, Debug)]
pub struct Clinic {
    pub owners: OwnerMapService,
    pub vets: VetMapService,
    pub visits: VisitMapService,
}

impl Default for Clinic {
    fn default() -> Self {
        Self::new(&StorageConfig::default())
    }
}

impl Clinic {
    pub fn new(storage: &StorageConfig) -> Self {
        let first = storage.first_id;
        Self {
            owners: OwnerMapService::with_first_id(
                first,
                PetTypeMapService::with_first_id(first),
                PetMapService::with_first_id(first),
            ),
            vets: VetMapService::with_first_id(first, SpecialtyMapService::with_first_id(first)),
            visits: VisitMapService::with_first_id(first),
        }
    }
}
