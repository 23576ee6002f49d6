use serde::{Deserialize, Serialize};

use crate::base::Id;
use crate::specialty::Specialty;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vet {
    #[serde(default)]
    pub id: Option<Id>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub specialities: Vec<Specialty>,
}

impl Vet {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn with_specialty(mut self, specialty: Specialty) -> Self {
        self.specialities.push(specialty);
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

crate::impl_entity!(Vet);
