use serde::{Deserialize, Serialize};

use crate::base::Id;

/// Kind of animal, e.g. "Dog" or "Cat".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetType {
    #[serde(default)]
    pub id: Option<Id>,
    pub name: String,
}

impl PetType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: None, name: name.into() }
    }
}

crate::impl_entity!(PetType);
