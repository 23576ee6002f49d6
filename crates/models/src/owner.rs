use serde::{Deserialize, Serialize};

use crate::base::Id;
use crate::pet::Pet;

/// Pet owner record.
///
/// `pets` holds copies of the owner's pets as they were when the owner was
/// last saved; the pet store stays the source of truth for pets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub pets: Vec<Pet>,
}

impl Owner {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>, city: impl Into<String>) -> Self {
        self.address = address.into();
        self.city = city.into();
        self
    }

    pub fn with_telephone(mut self, telephone: impl Into<String>) -> Self {
        self.telephone = telephone.into();
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Attach a pet, pointing it back at this owner when the owner is saved already.
    pub fn add_pet(&mut self, mut pet: Pet) {
        if let Some(id) = self.id {
            pet.owner_id = Some(id);
        }
        self.pets.push(pet);
    }

    /// Find one of this owner's pets by name, ignoring case.
    pub fn pet(&self, name: &str) -> Option<&Pet> {
        self.pets.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

crate::impl_entity!(Owner);
