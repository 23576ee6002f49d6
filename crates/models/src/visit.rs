use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::base::Id;

/// A pet's visit to the clinic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    #[serde(default)]
    pub id: Option<Id>,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pet_id: Option<Id>,
}

impl Visit {
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        Self { id: None, date, description: description.into(), pet_id: None }
    }

    pub fn for_pet(mut self, pet_id: Id) -> Self {
        self.pet_id = Some(pet_id);
        self
    }
}

crate::impl_entity!(Visit);
