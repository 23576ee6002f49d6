//! Start-up data loading.
//!
//! Fills an empty [`Clinic`] either from the built-in sample records or from
//! a JSON seed file. Loading is skipped when pet types already exist.

use std::path::Path;

use chrono::{NaiveDate, Utc};
use models::{Owner, Pet, PetType, Specialty, Vet, Visit};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::clinic::Clinic;
use crate::errors::ServiceError;
use crate::services::CrudService;

/// Visit entry in seed data. Seed files carry no identifiers, so the pet is
/// referenced by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeedVisit {
    pub pet_name: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub pet_types: Vec<PetType>,
    #[serde(default)]
    pub specialties: Vec<Specialty>,
    #[serde(default)]
    pub owners: Vec<Owner>,
    #[serde(default)]
    pub vets: Vec<Vet>,
    #[serde(default)]
    pub visits: Vec<SeedVisit>,
}

/// Counts of what a load stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub skipped: bool,
    pub pet_types: usize,
    pub specialties: usize,
    pub owners: usize,
    pub pets: usize,
    pub vets: usize,
    pub visits: usize,
    pub unmatched_visits: usize,
}

impl SeedData {
    /// The clinic's demo records.
    pub fn sample() -> Self {
        let today = Utc::now().date_naive();
        let dog = PetType::new("Dog");
        let cat = PetType::new("Cat");
        let radiology = Specialty::new("Radiology");
        let surgery = Specialty::new("Surgery");
        let dentistry = Specialty::new("Dentistry");

        let mut michael = Owner::new("Michael", "Weston")
            .with_address("123 Brickerel", "Miami")
            .with_telephone("1231231234");
        michael.add_pet(Pet::new("Rosco").with_pet_type(dog.clone()).with_birth_date(today));

        let mut fiona = Owner::new("Fiona", "Glenanne")
            .with_address("123 Brickerel", "Miami")
            .with_telephone("1231231234");
        fiona.add_pet(Pet::new("Just Cat").with_pet_type(cat.clone()).with_birth_date(today));

        Self {
            pet_types: vec![dog, cat],
            specialties: vec![radiology.clone(), surgery.clone(), dentistry],
            owners: vec![michael, fiona],
            vets: vec![
                Vet::new("Sam", "Axe").with_specialty(radiology),
                Vet::new("Jessie", "Porter").with_specialty(surgery),
            ],
            visits: vec![SeedVisit {
                pet_name: "Just Cat".into(),
                date: Some(today),
                description: "Sneezy Kitty".into(),
            }],
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ServiceError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ServiceError> {
        serde_json::from_str(content).map_err(|e| ServiceError::Parse(e.to_string()))
    }
}

/// Store `seed` into `clinic` unless it already holds pet types.
///
/// Pet types and specialties referenced from owners and vets are matched
/// by name against what is already stored; an unknown one is saved the
/// first time it is seen, so each is saved once.
#[instrument(skip_all)]
pub fn load(clinic: &mut Clinic, seed: SeedData) -> LoadSummary {
    if !clinic.owners.pet_types().find_all().is_empty() {
        info!(event = "bootstrap_skipped", "pet types present; skipping data load");
        return LoadSummary { skipped: true, ..LoadSummary::default() };
    }

    let mut summary = LoadSummary::default();

    for pet_type in seed.pet_types {
        if clinic.owners.pet_types().find_by_name(&pet_type.name).is_none() {
            clinic.owners.pet_types_mut().save(pet_type);
            summary.pet_types += 1;
        }
    }
    for specialty in seed.specialties {
        if clinic.vets.specialties().find_by_description(&specialty.description).is_none() {
            clinic.vets.specialties_mut().save(specialty);
            summary.specialties += 1;
        }
    }

    for mut owner in seed.owners {
        for pet in owner.pets.iter_mut() {
            if let Some(pet_type) = pet.pet_type.as_mut() {
                *pet_type = match clinic.owners.pet_types().find_by_name(&pet_type.name) {
                    Some(stored) => stored,
                    None => {
                        summary.pet_types += 1;
                        clinic.owners.pet_types_mut().save(PetType::new(pet_type.name.clone()))
                    }
                };
            }
        }
        summary.pets += owner.pets.len();
        clinic.owners.save(owner);
        summary.owners += 1;
    }
    info!(event = "owners_loaded", owners = summary.owners, pets = summary.pets, "Loaded Owners....");

    for mut vet in seed.vets {
        for specialty in vet.specialities.iter_mut() {
            *specialty = match clinic.vets.specialties().find_by_description(&specialty.description) {
                Some(stored) => stored,
                None => {
                    summary.specialties += 1;
                    clinic.vets.specialties_mut().save(Specialty::new(specialty.description.clone()))
                }
            };
        }
        clinic.vets.save(vet);
        summary.vets += 1;
    }
    info!(event = "vets_loaded", vets = summary.vets, "Loaded Vets....");

    let today = Utc::now().date_naive();
    for seed_visit in seed.visits {
        let pet = clinic
            .owners
            .pets()
            .find_all()
            .into_iter()
            .filter(|p| p.name.eq_ignore_ascii_case(&seed_visit.pet_name))
            .min_by_key(|p| p.id);
        let Some(pet_id) = pet.and_then(|p| p.id) else {
            warn!(pet_name = %seed_visit.pet_name, "no pet for seeded visit; skipping");
            summary.unmatched_visits += 1;
            continue;
        };
        let visit = Visit::new(seed_visit.date.unwrap_or(today), seed_visit.description).for_pet(pet_id);
        clinic.visits.save(visit);
        summary.visits += 1;
    }
    info!(event = "visits_loaded", visits = summary.visits, "Loaded Visits....");

    summary
}
